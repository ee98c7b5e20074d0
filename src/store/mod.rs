//! 向量存储管理：按地区构建、保存、加载向量索引

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ChatbotError, ChatbotResult};
use crate::llm::Embedder;
use crate::types::Document;

mod index;

pub use index::{INDEX_FILE_NAME, IndexedDocument, ScoredDocument, VectorIndex, cosine_similarity};

/// 벡터 스토어 생성 및 관리
#[derive(Clone)]
pub struct VectorStoreManager {
    config: Config,
    embedder: Arc<dyn Embedder>,
}

impl VectorStoreManager {
    /// 创建管理器，同时确保索引根目录存在
    pub fn new(config: Config, embedder: Arc<dyn Embedder>) -> ChatbotResult<Self> {
        config.ensure_index_dir().map_err(|e| {
            ChatbotError::VectorStore(format!("인덱스 디렉토리 생성 실패: {}", e))
        })?;
        Ok(Self { config, embedder })
    }

    /// 分批嵌入文档并构建索引。
    ///
    /// 非最后一批完成后等待 `api_sleep_ms`；任意批次失败时等待 `error_sleep_ms` 后返回错误，
    /// 不返回部分构建的索引，也不重试失败的批次。
    pub async fn create_index(
        &self,
        documents: &[Document],
        batch_size: Option<usize>,
    ) -> ChatbotResult<VectorIndex> {
        if documents.is_empty() {
            return Err(ChatbotError::DocumentNotFound("문서가 비어있습니다.".to_string()));
        }

        let embedding = &self.config.embedding;
        let batch_size = batch_size.unwrap_or(embedding.batch_size).max(1);
        let total_batches = documents.len().div_ceil(batch_size);

        println!("🔄 벡터 스토어 생성 중... (총 {}개 문서)", documents.len());

        let mut index: Option<VectorIndex> = None;

        for (i, batch) in documents.chunks(batch_size).enumerate() {
            let batch_num = i + 1;
            println!("  배치 {}/{} 처리 중...", batch_num, total_batches);

            let texts = batch.iter().map(|doc| doc.content.clone()).collect();
            let result = match self.embedder.embed_documents(texts).await {
                Ok(vectors) => index
                    .get_or_insert_with(|| VectorIndex::new(self.embedder.model_name()))
                    .add(batch.to_vec(), vectors),
                Err(e) => Err(ChatbotError::Api(e.to_string())),
            };

            if let Err(e) = result {
                warn!("배치 {} 처리 실패: {}", batch_num, e);
                eprintln!("❌ 배치 {} 처리 실패: {}", batch_num, e);
                tokio::time::sleep(Duration::from_millis(embedding.error_sleep_ms)).await;
                return Err(ChatbotError::VectorStore(format!(
                    "벡터 스토어 생성 실패: {}",
                    e
                )));
            }

            // API 속도 제한 대응
            if batch_num < total_batches {
                tokio::time::sleep(Duration::from_millis(embedding.api_sleep_ms)).await;
            }
        }

        index.ok_or_else(|| ChatbotError::VectorStore("문서가 비어있습니다.".to_string()))
    }

    /// 保存索引到 `<index_dir>/<region_code>`，返回保存目录
    pub fn save_index(&self, index: &VectorIndex, region_name: &str) -> ChatbotResult<PathBuf> {
        let save_path = self
            .config
            .index_path(region_name)
            .ok_or_else(|| ChatbotError::RegionNotFound(region_name.to_string()))?;

        index
            .save(&save_path)
            .map_err(|e| ChatbotError::VectorStore(format!("벡터 스토어 저장 실패: {}", e)))?;

        info!("벡터 스토어 저장 완료: {}", save_path.display());
        println!("✅ 벡터 스토어 저장 완료: {}", save_path.display());
        Ok(save_path)
    }

    /// 加载地区索引；索引不存在、地区不支持或反序列化失败时返回 None
    pub fn load_index(&self, region_name: &str) -> Option<VectorIndex> {
        let index_path = self.config.index_path(region_name)?;
        if !index_path.exists() {
            return None;
        }

        match VectorIndex::load(&index_path) {
            Ok(index) => {
                if index.embedding_model != self.embedder.model_name() {
                    warn!(
                        "{} 인덱스의 임베딩 모델({})이 현재 설정({})과 다릅니다",
                        region_name,
                        index.embedding_model,
                        self.embedder.model_name()
                    );
                }
                Some(index)
            }
            Err(e) => {
                warn!("벡터 스토어 로드 실패: {}", e);
                None
            }
        }
    }

    /// 嵌入查询并在索引中检索最相似的 `k` 个文档。查询向量维度与索引不一致时返回错误
    pub async fn similarity_search(
        &self,
        index: &VectorIndex,
        query: &str,
        k: usize,
    ) -> ChatbotResult<Vec<Document>> {
        let query_vector = self
            .embedder
            .embed_query(query)
            .await
            .map_err(|e| ChatbotError::Api(e.to_string()))?;

        if !index.is_empty() && query_vector.len() != index.dimensions {
            return Err(ChatbotError::VectorStore(format!(
                "쿼리 임베딩 차원({})이 인덱스 차원({})과 다릅니다",
                query_vector.len(),
                index.dimensions
            )));
        }

        Ok(index
            .search_by_vector(&query_vector, k)
            .into_iter()
            .map(|scored| scored.document)
            .collect())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
