//! 向量索引构建：将每个支持地区的回收信息转换为向量索引

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ChatbotError;
use crate::llm::EmbeddingClient;
use crate::loader::DocumentLoader;
use crate::store::VectorStoreManager;

/// 构建结果汇总
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl BuildSummary {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// 构建所有地区的索引
pub async fn execute(config: &Config) -> Result<BuildSummary> {
    println!("🚀 벡터 인덱스 빌드 시작\n");

    config.validate()?;

    let embedder = EmbeddingClient::from_config(config)
        .map_err(|e| ChatbotError::Config(format!("초기화 실패: {}", e)))?;
    let manager = VectorStoreManager::new(config.clone(), Arc::new(embedder))?;

    let summary = build_all(&manager).await;

    println!("\n{}", "=".repeat(50));
    println!("🏁 빌드 완료");
    println!(
        "성공: {}/{} 지역",
        summary.success_count(),
        summary.total()
    );
    println!("{}", "=".repeat(50));

    Ok(summary)
}

/// 逐个地区构建；单个地区失败不会中断其它地区
pub async fn build_all(manager: &VectorStoreManager) -> BuildSummary {
    let mut summary = BuildSummary::default();
    let regions: Vec<String> = manager
        .config()
        .supported_regions()
        .into_iter()
        .map(str::to_string)
        .collect();

    for region_name in regions {
        if build_index_for_region(&region_name, manager).await {
            summary.succeeded.push(region_name);
        } else {
            summary.failed.push(region_name);
        }
    }
    summary
}

/// 构建单个地区的索引，成功返回 true
pub async fn build_index_for_region(region_name: &str, manager: &VectorStoreManager) -> bool {
    println!("\n{}", "=".repeat(50));
    println!("📍 {} 처리 시작", region_name);
    println!("{}", "=".repeat(50));

    let region_path = manager.config().region_data_path(region_name);
    if !region_path.exists() {
        eprintln!("⚠️ 경로가 존재하지 않음: {}", region_path.display());
        return false;
    }

    println!("📂 문서 로드 중...");
    let documents = DocumentLoader::load_all_documents(&region_path);
    if documents.is_empty() {
        eprintln!("⚠️ {}: 문서가 없습니다.", region_name);
        return false;
    }
    println!("총 {}개 문서 로드 완료", documents.len());

    let result = match manager.create_index(&documents, None).await {
        Ok(index) => manager.save_index(&index, region_name),
        Err(e) => Err(e),
    };

    match result {
        Ok(path) => {
            info!("{} 인덱스 생성 완료: {}", region_name, path.display());
            println!("✅ {} 인덱스 생성 완료!", region_name);
            true
        }
        Err(e) => {
            error!("{} 처리 중 오류: {}", region_name, e);
            eprintln!("❌ {} 처리 중 오류: {}", region_name, e);
            false
        }
    }
}
