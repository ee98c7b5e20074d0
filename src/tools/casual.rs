use anyhow::Result;

use crate::llm::ChatModel;
use crate::llm::prompts::{CASUAL_GUIDE_FRIENDLY, CASUAL_GUIDE_STEER, SYSTEM_PROMPT, casual_prompt};

/// 连续闲聊达到该次数后开始引导到回收话题
pub const CASUAL_STEER_THRESHOLD: u32 = 4;

/// 生成简短的闲聊回复，不做检索
pub async fn respond_casually(
    llm: &dyn ChatModel,
    user_input: &str,
    casual_count: u32,
) -> Result<String> {
    let guide = if casual_count >= CASUAL_STEER_THRESHOLD {
        CASUAL_GUIDE_STEER
    } else {
        CASUAL_GUIDE_FRIENDLY
    };

    llm.prompt(SYSTEM_PROMPT, &casual_prompt(user_input, guide))
        .await
}
