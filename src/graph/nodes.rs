//! 工作流节点：读取单轮状态、调用工具、写回状态

use anyhow::Result;

use super::RecyclingGraph;
use crate::tools::{answer_recycling_query, classify_intent, respond_casually};
use crate::types::{Message, TurnState};

/// 路由结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Recycling,
    Casual,
}

/// Step 1: 대화 맥락 분석
pub async fn parse_context(graph: &RecyclingGraph, state: &mut TurnState) {
    let intent = classify_intent(
        graph.clients.recycling.as_ref(),
        graph.store.config(),
        &state.user_input,
        &state.history,
    )
    .await;

    state.is_recycling_query = intent.is_recycling;
    state.current_region = intent.region;
    state.history.push(Message::human(state.user_input.clone()));
    state.total_turns += 1;
}

/// 路由决定
pub fn route(state: &TurnState) -> Route {
    if state.is_recycling_query {
        Route::Recycling
    } else {
        Route::Casual
    }
}

/// Step 2A: 处理回收问题，错误已在工具内部转换为回复
pub async fn handle_recycling(graph: &RecyclingGraph, state: &mut TurnState) {
    let answer = answer_recycling_query(
        graph.clients.recycling.as_ref(),
        &graph.store,
        &state.user_input,
        state.current_region.as_deref(),
        &state.history,
    )
    .await;

    state.history.push(Message::ai(answer.clone()));
    state.final_answer = Some(answer);
    state.casual_count = 0;
}

/// Step 2B: 일반 대화 처리
pub async fn handle_casual(graph: &RecyclingGraph, state: &mut TurnState) -> Result<()> {
    let response = respond_casually(
        graph.clients.casual.as_ref(),
        &state.user_input,
        state.casual_count,
    )
    .await?;

    state.history.push(Message::ai(response.clone()));
    state.final_answer = Some(response);
    state.casual_count += 1;
    Ok(())
}
