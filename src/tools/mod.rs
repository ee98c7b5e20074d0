//! 聊天机器人工具：意图分类、回收问题回答、闲聊回复

mod casual;
mod intent;
mod recycling;

pub use casual::{CASUAL_STEER_THRESHOLD, respond_casually};
pub use intent::{classify_intent, format_recent_context, parse_intent};
pub use recycling::{
    RegionResolution, answer_recycling_query, build_context, dedup_documents, resolve_region,
};

/// 每次取用的最近消息数（最近 2 轮对话）
pub const RECENT_MESSAGES: usize = 4;
