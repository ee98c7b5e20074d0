#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::graph::{RecyclingGraph, Route, route};
    use crate::llm::LlmClients;
    use crate::store::VectorStoreManager;
    use crate::test_support::{HashEmbedder, ScriptedChatModel, intent_json};
    use crate::types::{ConversationState, Message, Role, TurnState};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn create_graph(
        temp_dir: &TempDir,
        recycling: Arc<ScriptedChatModel>,
        casual: Arc<ScriptedChatModel>,
    ) -> RecyclingGraph {
        let config = Config {
            data_dir: temp_dir.path().join("data"),
            index_dir: temp_dir.path().join("index"),
            ..Default::default()
        };
        let store = VectorStoreManager::new(config, Arc::new(HashEmbedder::new())).unwrap();
        RecyclingGraph::new(LlmClients::new(recycling, casual), store)
    }

    fn state_with(casual_count: u32, total_turns: u32) -> ConversationState {
        ConversationState {
            history: vec![Message::human("이전"), Message::ai("이전 답변")],
            casual_count,
            total_turns,
        }
    }

    #[test]
    fn test_route() {
        let mut state = TurnState::default();
        assert_eq!(route(&state), Route::Casual);
        state.is_recycling_query = true;
        assert_eq!(route(&state), Route::Recycling);
    }

    #[tokio::test]
    async fn test_recycling_turn() {
        let temp_dir = TempDir::new().unwrap();
        let recycling = Arc::new(ScriptedChatModel::new(vec![Ok(
            intent_json(true, Some("관악구")).as_str(),
        )]));
        let casual = Arc::new(ScriptedChatModel::always(Ok("unused")));
        let graph = create_graph(&temp_dir, recycling.clone(), casual.clone());

        let input = TurnState::new(&state_with(3, 7), "관악구에서 플라스틱 어떻게 버려요?");
        let result = graph.invoke(input).await.unwrap();

        assert!(result.is_recycling_query);
        assert_eq!(result.current_region.as_deref(), Some("관악구"));
        // 索引不存在
        assert_eq!(
            result.final_answer.as_deref(),
            Some("관악구 데이터를 찾을 수 없습니다.")
        );
        assert_eq!(result.casual_count, 0);
        assert_eq!(result.total_turns, 8);
        assert_eq!(result.history.len(), 4);
        assert_eq!(result.history[2], Message::human("관악구에서 플라스틱 어떻게 버려요?"));
        assert_eq!(result.history[3].role, Role::Ai);
        assert_eq!(casual.call_count(), 0);
    }

    #[tokio::test]
    async fn test_casual_turn() {
        let temp_dir = TempDir::new().unwrap();
        let recycling = Arc::new(ScriptedChatModel::new(vec![Ok(
            intent_json(false, None).as_str(),
        )]));
        let casual = Arc::new(ScriptedChatModel::always(Ok("안녕하세요! 저는 버링이에요.")));
        let graph = create_graph(&temp_dir, recycling.clone(), casual.clone());

        let result = graph
            .invoke(TurnState::new(&state_with(2, 5), "안녕"))
            .await
            .unwrap();

        assert!(!result.is_recycling_query);
        assert_eq!(
            result.final_answer.as_deref(),
            Some("안녕하세요! 저는 버링이에요.")
        );
        assert_eq!(result.casual_count, 3);
        assert_eq!(result.total_turns, 6);
        assert_eq!(result.history.last(), Some(&Message::ai("안녕하세요! 저는 버링이에요.")));
        assert_eq!(recycling.call_count(), 1);
        assert_eq!(casual.call_count(), 1);
    }

    #[tokio::test]
    async fn test_classification_failure_routes_to_casual() {
        let temp_dir = TempDir::new().unwrap();
        let recycling = Arc::new(ScriptedChatModel::always(Err("invalid api key")));
        let casual = Arc::new(ScriptedChatModel::always(Ok("반가워요!")));
        let graph = create_graph(&temp_dir, recycling, casual.clone());

        let result = graph
            .invoke(TurnState::new(&ConversationState::default(), "관악구 페트병"))
            .await
            .unwrap();

        assert!(!result.is_recycling_query);
        assert_eq!(result.casual_count, 1);
        assert_eq!(result.total_turns, 1);
        assert_eq!(casual.call_count(), 1);
    }

    #[tokio::test]
    async fn test_casual_failure_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let recycling = Arc::new(ScriptedChatModel::new(vec![Ok(
            intent_json(false, None).as_str(),
        )]));
        let casual = Arc::new(ScriptedChatModel::always(Err("connection reset")));
        let graph = create_graph(&temp_dir, recycling, casual);

        let result = graph
            .invoke(TurnState::new(&ConversationState::default(), "안녕"))
            .await;

        assert!(result.is_err());
    }
}
