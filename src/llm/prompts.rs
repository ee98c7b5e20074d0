//! 提示词模板与固定回复

/// `버링이` 角色系统提示
pub const SYSTEM_PROMPT: &str = "당신은 재활용 도우미 '버링이'입니다. \
친근하고 밝은 말투로 대화하며, 사용자가 올바르게 분리배출할 수 있도록 돕습니다. \
모르는 내용은 지어내지 말고 솔직하게 모른다고 말하세요.";

/// 意图分析系统提示
pub const INTENT_SYSTEM_PROMPT: &str = "당신은 재활용 챗봇의 질문 분석기입니다. \
사용자의 질문이 재활용, 분리배출, 쓰레기 처리와 관련된 질문인지 판단하고 \
질문에 언급된 지역(구 이름)을 추출합니다. 반드시 JSON 객체 하나만 출력하세요.";

/// 答案生成系统提示
pub const ANSWER_SYSTEM_PROMPT: &str = "당신은 재활용 도우미 '버링이'입니다. \
주어진 참고 자료에 근거해서만 분리배출 방법을 안내하세요. \
참고 자료에 없는 내용은 추측하지 말고, 해당 지역 구청에 문의하도록 안내하세요.";

pub const NO_DOCUMENTS_MESSAGE: &str =
    "죄송해요, 관련된 재활용 정보를 찾지 못했어요. 품목 이름을 조금 더 구체적으로 알려주시겠어요?";

/// 검색/답변 생성 실패 시 고정 메시지 (뒤에 오류 내용이 붙음)
pub const SEARCH_ERROR_MESSAGE: &str = "재활용 정보를 검색하는 중 오류가 발생했습니다";

/// Agent 层面的兜底回复
pub const AGENT_ERROR_MESSAGE: &str = "처리 중 오류가 발생했습니다";

/// final_answer 缺失时的默认回复
pub const DEFAULT_ANSWER: &str = "무엇을 도와드릴까요?";

/// 일반 대화가 길어졌을 때의 유도 지침
pub const CASUAL_GUIDE_STEER: &str = "재활용 주제로 자연스럽게 유도하세요.";

pub const CASUAL_GUIDE_FRIENDLY: &str = "친근하게 대화하세요.";

/// 意图分析用户提示
pub fn intent_prompt(
    regions: &str,
    context: &str,
    input: &str,
    format_instructions: &str,
) -> String {
    format!(
        "지원 지역: {regions}\n\n\
         {context}\n\n\
         현재 질문: {input}\n\n\
         판단 기준:\n\
         - 품목의 버리는 법, 분리배출, 수거 요일 등을 묻거나 이전 재활용 대화를 이어가는 경우 is_recycling은 true\n\
         - 인사, 잡담, 재활용과 무관한 질문이면 is_recycling은 false\n\
         - region은 질문이나 최근 대화에서 언급된 구 이름(지원 여부와 관계없이)이며, 없으면 null\n\n\
         {format_instructions}"
    )
}

/// 答案生成用户提示
pub fn answer_prompt(region: &str, question: &str, context: &str) -> String {
    format!(
        "지역: {region}\n\
         질문: {question}\n\n\
         참고 자료:\n{context}\n\n\
         위 참고 자료를 바탕으로 {region}의 분리배출 방법을 간결하고 친절하게 답변하세요. \
         출처나 URL이 있다면 마지막에 함께 안내하세요."
    )
}

/// 闲聊用户提示
pub fn casual_prompt(input: &str, guide: &str) -> String {
    format!("사용자: '{input}'\n\n{guide} 1-2문장으로 답하세요.")
}

pub fn unsupported_region_message(region: &str, supported: &[&str]) -> String {
    format!(
        "'{}'은(는) 지원하지 않는 지역입니다.\n\n현재 지원하는 지역은 {}입니다.\n어느 지역의 분리배출 방법이 궁금하신가요?",
        region,
        supported.join(", ")
    )
}

pub fn missing_region_message(supported: &[&str]) -> String {
    format!(
        "재활용 방법을 알려드릴게요!\n\n현재 지원하는 지역은 {}입니다.\n어느 지역의 분리배출 방법이 궁금하신가요?",
        supported.join(", ")
    )
}

pub fn data_not_found_message(region: &str) -> String {
    format!("{} 데이터를 찾을 수 없습니다.", region)
}

pub fn ask_item_message(region: &str) -> String {
    format!("{}에서 어떤 품목의 재활용 방법이 궁금하신가요?", region)
}
