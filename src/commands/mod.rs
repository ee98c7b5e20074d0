pub mod build_index;
pub mod chat;

pub use build_index::BuildSummary;
