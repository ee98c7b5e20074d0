pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod llm;
pub mod loader;
pub mod logging;
pub mod store;
pub mod tools;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use agent::RecyclingAgent;
pub use config::Config;
pub use error::{ChatbotError, ChatbotResult};
pub use loader::DocumentLoader;
pub use store::VectorStoreManager;
