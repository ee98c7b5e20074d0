//! 回收聊天机器人工作流：parse → {recycling | casual} → 结束

use anyhow::Result;
use tracing::debug;

use crate::llm::LlmClients;
use crate::store::VectorStoreManager;
use crate::types::TurnState;

pub mod nodes;

pub use nodes::{Route, route};

/// 单轮处理流程，本身不保存任何跨轮状态
#[derive(Clone)]
pub struct RecyclingGraph {
    pub clients: LlmClients,
    pub store: VectorStoreManager,
}

impl RecyclingGraph {
    pub fn new(clients: LlmClients, store: VectorStoreManager) -> Self {
        Self { clients, store }
    }

    /// 执行一轮：先分析上下文，再由路由选择且只执行一个处理节点
    pub async fn invoke(&self, mut state: TurnState) -> Result<TurnState> {
        nodes::parse_context(self, &mut state).await;

        let next = route(&state);
        debug!("라우팅: {:?}", next);

        match next {
            Route::Recycling => nodes::handle_recycling(self, &mut state).await,
            Route::Casual => nodes::handle_casual(self, &mut state).await?,
        }

        Ok(state)
    }
}

// Include tests
#[cfg(test)]
mod tests;
