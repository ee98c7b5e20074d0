use serde::{Deserialize, Serialize};

/// 消息角色
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "ai")]
    Ai,
}

/// 对话中的一条消息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            content: content.into(),
        }
    }

    pub fn is_human(&self) -> bool {
        self.role == Role::Human
    }
}

/// 会话级状态，由 Agent 持有，进程重启后不保留
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ConversationState {
    pub history: Vec<Message>,
    /// 连续闲聊次数，遇到回收问题时归零
    pub casual_count: u32,
    /// 本会话处理过的轮次
    pub total_turns: u32,
}

/// 取消息序列末尾最多 `n` 条
pub fn recent_messages(history: &[Message], n: usize) -> &[Message] {
    let start = history.len().saturating_sub(n);
    &history[start..]
}

/// 单轮执行过程中的状态，执行完毕后折叠回 [`ConversationState`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TurnState {
    pub user_input: String,
    pub is_recycling_query: bool,
    pub current_region: Option<String>,
    pub history: Vec<Message>,
    pub final_answer: Option<String>,
    pub casual_count: u32,
    pub total_turns: u32,
}

impl TurnState {
    /// 将会话状态与新的用户输入合并
    pub fn new(state: &ConversationState, user_input: &str) -> Self {
        Self {
            user_input: user_input.to_string(),
            is_recycling_query: false,
            current_region: None,
            history: state.history.clone(),
            final_answer: None,
            casual_count: state.casual_count,
            total_turns: state.total_turns,
        }
    }
}

/// 대화 요약 정보
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ConversationSummary {
    pub total_turns: u32,
    pub casual_count: u32,
    pub history_length: usize,
}
