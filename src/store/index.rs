use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::{ChatbotError, ChatbotResult};
use crate::types::Document;

/// 索引目录中的数据文件名
pub const INDEX_FILE_NAME: &str = "index.json";

/// 已嵌入的文档
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndexedDocument {
    pub document: Document,
    pub vector: Vec<f64>,
}

/// 检索结果
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub document: Document,
    pub score: f64,
}

/// 单个地区的向量索引，构建时创建，查询时只读加载
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VectorIndex {
    /// 构建索引时使用的嵌入模型
    pub embedding_model: String,
    /// 向量维度，第一批嵌入后确定
    pub dimensions: usize,
    entries: Vec<IndexedDocument>,
}

impl VectorIndex {
    pub fn new(embedding_model: &str) -> Self {
        Self {
            embedding_model: embedding_model.to_string(),
            dimensions: 0,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 追加一批文档及其向量，文档与向量数量、维度必须一致
    pub fn add(&mut self, documents: Vec<Document>, vectors: Vec<Vec<f64>>) -> ChatbotResult<()> {
        if documents.len() != vectors.len() {
            return Err(ChatbotError::VectorStore(format!(
                "문서 수({})와 임베딩 수({})가 일치하지 않습니다",
                documents.len(),
                vectors.len()
            )));
        }

        for (document, vector) in documents.into_iter().zip(vectors) {
            if self.dimensions == 0 {
                self.dimensions = vector.len();
            }
            if vector.is_empty() || vector.len() != self.dimensions {
                return Err(ChatbotError::VectorStore(format!(
                    "임베딩 차원이 올바르지 않습니다: expected {}, got {}",
                    self.dimensions,
                    vector.len()
                )));
            }
            self.entries.push(IndexedDocument { document, vector });
        }
        Ok(())
    }

    /// 余弦相似度检索，按得分降序返回最多 `k` 个结果
    pub fn search_by_vector(&self, query: &[f64], k: usize) -> Vec<ScoredDocument> {
        let mut results: Vec<ScoredDocument> = self
            .entries
            .iter()
            .map(|entry| ScoredDocument {
                document: entry.document.clone(),
                score: cosine_similarity(query, &entry.vector),
            })
            .collect();
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(k);
        results
    }

    /// 保存到目录，返回数据文件路径
    pub fn save(&self, dir: &Path) -> ChatbotResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(INDEX_FILE_NAME);
        let content = serde_json::to_string(self)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn load(dir: &Path) -> ChatbotResult<Self> {
        let content = std::fs::read_to_string(dir.join(INDEX_FILE_NAME))?;
        let index: VectorIndex = serde_json::from_str(&content)?;
        Ok(index)
    }
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x.powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x.powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
