pub mod client;
pub mod prompts;

pub use client::{ChatModel, Embedder, EmbeddingClient, LLMClient, LlmClients};
