use serde::{Deserialize, Serialize};

/// 回收品目文档：一个 (品目, 地区) 对应一个文档
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Document {
    /// 嵌入与检索所使用的文本，总是非空
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// 문서 출처 정보
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DocumentMetadata {
    /// 품목명
    pub item: String,
    /// 地区名，来自JSON文件中的 `지역` 字段，可能为空
    pub region: String,
    /// 来源JSON文件名
    pub filename: String,
    /// `[경로]` 출처
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `[URL]` 출처
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}
