pub mod conversation;
pub mod document;
pub mod intent;

pub use conversation::{ConversationState, ConversationSummary, Message, Role, TurnState};
pub use document::{Document, DocumentMetadata};
pub use intent::IntentAnalysis;
