//! LLM客户端 - 对话模型与嵌入模型的统一接口

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;

mod providers;

pub use providers::{ProviderAgent, ProviderClient, SamplingParams};

/// 对话模型：给定系统提示与用户输入，返回模型文本
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// 嵌入模型
#[async_trait]
pub trait Embedder: Send + Sync {
    /// 批量嵌入文档
    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f64>>>;

    /// 嵌入检索用的查询
    async fn embed_query(&self, text: &str) -> Result<Vec<f64>> {
        let mut vectors = self.embed_documents(vec![text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| anyhow::anyhow!("임베딩 결과가 비어 있습니다"))
    }

    /// 模型名称，写入索引以便核对
    fn model_name(&self) -> &str;
}

/// 基于 rig provider 的对话模型，每次调用按需构建Agent
#[derive(Clone)]
pub struct LLMClient {
    client: ProviderClient,
    model: String,
    params: SamplingParams,
}

impl LLMClient {
    pub fn new(client: ProviderClient, model: &str, params: SamplingParams) -> Self {
        Self {
            client,
            model: model.to_string(),
            params,
        }
    }
}

#[async_trait]
impl ChatModel for LLMClient {
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        debug!(
            "LLM 호출: model={}, temperature={}",
            self.model, self.params.temperature
        );
        let agent = self
            .client
            .create_agent(&self.model, system_prompt, self.params)?;
        agent.prompt(user_prompt).await
    }
}

/// 基于 rig provider 的嵌入模型
#[derive(Clone)]
pub struct EmbeddingClient {
    client: ProviderClient,
    model: String,
}

impl EmbeddingClient {
    pub fn new(client: ProviderClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self::new(client, &config.embedding.model))
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f64>>> {
        self.client.embed_texts(&self.model, texts).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// 按用途区分的一对对话模型：回收问答（准确度优先）与闲聊（亲和力优先）
#[derive(Clone)]
pub struct LlmClients {
    pub recycling: Arc<dyn ChatModel>,
    pub casual: Arc<dyn ChatModel>,
}

impl LlmClients {
    pub fn new(recycling: Arc<dyn ChatModel>, casual: Arc<dyn ChatModel>) -> Self {
        Self { recycling, casual }
    }

    /// 根据配置创建，两个用途共享同一个 provider 客户端
    pub fn from_config(config: &Config) -> Result<Self> {
        let llm = &config.llm;
        let client = ProviderClient::new(llm)?;

        let recycling = LLMClient::new(
            client.clone(),
            &llm.model,
            SamplingParams {
                temperature: llm.temperature,
                max_tokens: llm.max_tokens,
            },
        );
        let casual = LLMClient::new(
            client,
            &llm.model,
            SamplingParams {
                temperature: llm.temperature_casual,
                max_tokens: llm.max_tokens_short,
            },
        );

        Ok(Self::new(Arc::new(recycling), Arc::new(casual)))
    }
}
