use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 의도 분석 결과
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, JsonSchema)]
pub struct IntentAnalysis {
    /// 재활용 관련 질문 여부
    #[serde(default)]
    pub is_recycling: bool,
    /// 언급된 지역
    #[serde(default)]
    pub region: Option<String>,
}

impl IntentAnalysis {
    /// 分类失败时的降级结果：视为非回收问题
    pub fn casual() -> Self {
        Self::default()
    }
}
