use std::collections::HashSet;
use tracing::{debug, info};

use super::RECENT_MESSAGES;
use crate::config::Config;
use crate::error::{ChatbotError, ChatbotResult};
use crate::llm::ChatModel;
use crate::llm::prompts::{
    ANSWER_SYSTEM_PROMPT, NO_DOCUMENTS_MESSAGE, SEARCH_ERROR_MESSAGE, answer_prompt,
    ask_item_message, data_not_found_message, missing_region_message, unsupported_region_message,
};
use crate::store::VectorStoreManager;
use crate::types::{Document, Message};
use crate::types::conversation::recent_messages;

/// 地区解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionResolution {
    /// 지원 지역
    Supported(String),
    /// 提到了地区但不在地区表中
    Unsupported(String),
    /// 没有找到任何地区
    Missing,
}

/// 地区解析顺序：已识别的地区 → 当前输入 → 最近两轮中用户消息（从新到旧）
pub fn resolve_region(
    config: &Config,
    user_input: &str,
    detected_region: Option<&str>,
    history: &[Message],
) -> RegionResolution {
    let region = detected_region
        .map(str::to_string)
        .or_else(|| config.find_region_in(user_input).map(str::to_string))
        .or_else(|| {
            recent_messages(history, RECENT_MESSAGES)
                .iter()
                .rev()
                .filter(|msg| msg.is_human())
                .find_map(|msg| config.find_region_in(&msg.content))
                .map(str::to_string)
        });

    match region {
        Some(region) if config.region_code(&region).is_some() => {
            RegionResolution::Supported(region)
        }
        Some(region) => RegionResolution::Unsupported(region),
        None => RegionResolution::Missing,
    }
}

/// 回答回收问题。所有错误都转换为面向用户的消息，不会向调用方返回错误
pub async fn answer_recycling_query(
    llm: &dyn ChatModel,
    store: &VectorStoreManager,
    user_input: &str,
    current_region: Option<&str>,
    history: &[Message],
) -> String {
    let config = store.config();
    let supported = config.supported_regions();

    let region = match resolve_region(config, user_input, current_region, history) {
        RegionResolution::Supported(region) => region,
        RegionResolution::Unsupported(region) => {
            info!("지원하지 않는 지역 요청: {}", region);
            return unsupported_region_message(&region, &supported);
        }
        RegionResolution::Missing => return missing_region_message(&supported),
    };

    match search_and_answer(llm, store, user_input, &region).await {
        Ok(answer) => answer,
        Err(e) => format!("{}: {}", SEARCH_ERROR_MESSAGE, e),
    }
}

async fn search_and_answer(
    llm: &dyn ChatModel,
    store: &VectorStoreManager,
    user_input: &str,
    region: &str,
) -> ChatbotResult<String> {
    let Some(index) = store.load_index(region) else {
        return Ok(data_not_found_message(region));
    };

    if user_input.trim().is_empty() {
        return Ok(ask_item_message(region));
    }

    let docs = store
        .similarity_search(&index, user_input, store.config().search_k)
        .await?;
    let unique_docs = dedup_documents(docs);
    if unique_docs.is_empty() {
        return Ok(NO_DOCUMENTS_MESSAGE.to_string());
    }
    debug!("{} 검색 결과 {}건", region, unique_docs.len());

    let context = build_context(&unique_docs);
    llm.prompt(
        ANSWER_SYSTEM_PROMPT,
        &answer_prompt(region, user_input, &context),
    )
    .await
    .map_err(|e| ChatbotError::Api(e.to_string()))
}

/// 按内容完全相同去重，保留首次出现的顺序
pub fn dedup_documents(docs: Vec<Document>) -> Vec<Document> {
    let mut seen = HashSet::new();
    docs.into_iter()
        .filter(|doc| seen.insert(doc.content.clone()))
        .collect()
}

/// 为答案生成构建编号的参考资料块
pub fn build_context(docs: &[Document]) -> String {
    let mut parts = Vec::new();
    for (i, doc) in docs.iter().enumerate() {
        parts.push(format!("[{}] {}", i + 1, doc.content));
        if let Some(source) = &doc.metadata.source {
            parts.push(format!("출처: {}", source));
        }
        if let Some(url) = &doc.metadata.url {
            parts.push(format!("URL: {}", url));
        }
    }
    parts.join("\n\n")
}
