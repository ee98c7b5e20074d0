//! 回收聊天机器人Agent：持有会话状态，逐轮调用工作流

use tracing::{error, info};
use uuid::Uuid;

use crate::graph::RecyclingGraph;
use crate::llm::prompts::{AGENT_ERROR_MESSAGE, DEFAULT_ANSWER};
use crate::types::{ConversationState, ConversationSummary, TurnState};

/// 버링이 재활용 챗봇 세션
pub struct RecyclingAgent {
    graph: RecyclingGraph,
    session_id: String,
    state: ConversationState,
}

impl RecyclingAgent {
    pub fn new(graph: RecyclingGraph) -> Self {
        let session_id = Uuid::new_v4().to_string();
        info!("새 세션 시작: {}", session_id);
        Self {
            graph,
            session_id,
            state: ConversationState::default(),
        }
    }

    /// 대화 상태 초기화
    pub fn reset(&mut self) {
        self.state = ConversationState::default();
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// 处理用户输入并返回回复。工作流失败时返回通用错误消息，会话状态保持不变
    pub async fn get_response(&mut self, user_input: &str) -> String {
        let turn = TurnState::new(&self.state, user_input);

        match self.graph.invoke(turn).await {
            Ok(result) => {
                let answer = result
                    .final_answer
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ANSWER.to_string());
                self.update_state(result);
                answer
            }
            Err(e) => {
                error!("[{}] 처리 실패: {:#}", self.session_id, e);
                format!("{}: {}", AGENT_ERROR_MESSAGE, e)
            }
        }
    }

    fn update_state(&mut self, result: TurnState) {
        self.state.history = result.history;
        self.state.casual_count = result.casual_count;
        self.state.total_turns = result.total_turns;
    }

    /// 대화 요약 정보 반환
    pub fn conversation_summary(&self) -> ConversationSummary {
        ConversationSummary {
            total_turns: self.state.total_turns,
            casual_count: self.state.casual_count,
            history_length: self.state.history.len(),
        }
    }
}
