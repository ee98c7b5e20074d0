use thiserror::Error;

/// 챗봇 공통 오류
#[derive(Debug, Error)]
pub enum ChatbotError {
    /// 配置错误（缺少API KEY、数据目录不存在等），属于致命错误
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("지원하지 않는 지역: {0}")]
    RegionNotFound(String),

    /// 向量索引的创建、保存失败
    #[error("벡터 스토어 오류: {0}")]
    VectorStore(String),

    #[error("문서를 찾을 수 없습니다: {0}")]
    DocumentNotFound(String),

    /// 模型服务调用失败
    #[error("API 호출 오류: {0}")]
    Api(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ChatbotResult<T> = std::result::Result<T, ChatbotError>;
