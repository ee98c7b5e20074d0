use anyhow::{Result, anyhow};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::RECENT_MESSAGES;
use crate::config::Config;
use crate::llm::ChatModel;
use crate::llm::prompts::{INTENT_SYSTEM_PROMPT, intent_prompt};
use crate::types::conversation::recent_messages;
use crate::types::{IntentAnalysis, Message, Role};

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fenced json regex")
});

/// 分析用户输入是否为回收问题，并提取提及的地区。
///
/// 任何失败（API错误、JSON格式错误）都降级为 `{is_recycling: false, region: None}`。
pub async fn classify_intent(
    llm: &dyn ChatModel,
    config: &Config,
    user_input: &str,
    history: &[Message],
) -> IntentAnalysis {
    let context = format_recent_context(history);
    let prompt = intent_prompt(
        &config.supported_regions().join(", "),
        if context.is_empty() {
            "(대화 시작)"
        } else {
            context.as_str()
        },
        user_input,
        &format_instructions(),
    );

    let result = match llm.prompt(INTENT_SYSTEM_PROMPT, &prompt).await {
        Ok(reply) => parse_intent(&reply),
        Err(e) => Err(e),
    };

    match result {
        Ok(intent) => {
            debug!(
                "의도 분석: is_recycling={}, region={:?}",
                intent.is_recycling, intent.region
            );
            intent
        }
        Err(e) => {
            warn!("의도 분석 실패, 일반 대화로 처리합니다: {}", e);
            IntentAnalysis::casual()
        }
    }
}

/// 最近两轮对话的文本表示，没有历史时返回空串
pub fn format_recent_context(history: &[Message]) -> String {
    let recent = recent_messages(history, RECENT_MESSAGES);
    if recent.is_empty() {
        return String::new();
    }

    let mut context = String::from("최근 대화:\n");
    for msg in recent {
        let speaker = match msg.role {
            Role::Human => "사용자",
            Role::Ai => "AI",
        };
        context.push_str(&format!("{}: {}\n", speaker, msg.content));
    }
    context
}

/// 解析模型回复中的 JSON 对象（允许被 ``` 代码块包裹）
pub fn parse_intent(reply: &str) -> Result<IntentAnalysis> {
    let json = match FENCED_JSON.captures(reply) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or_default(),
        None => {
            let start = reply.find('{');
            let end = reply.rfind('}');
            match (start, end) {
                (Some(start), Some(end)) if start < end => &reply[start..=end],
                _ => return Err(anyhow!("JSON 객체를 찾을 수 없습니다: {}", reply)),
            }
        }
    };

    let mut intent: IntentAnalysis = serde_json::from_str(json)?;
    if intent
        .region
        .as_ref()
        .is_some_and(|region| region.trim().is_empty())
    {
        intent.region = None;
    }
    Ok(intent)
}

fn format_instructions() -> String {
    let schema = schemars::schema_for!(IntentAnalysis);
    let schema_json = serde_json::to_string_pretty(&schema).unwrap_or_default();
    format!(
        "다음 JSON 스키마를 따르는 JSON 객체 하나로만 답하세요:\n```json\n{}\n```",
        schema_json
    )
}
