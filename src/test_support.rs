//! 单元测试用的模型替身，不访问网络

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::llm::{ChatModel, Embedder};

const DIMENSIONS: usize = 64;

/// 按字符散列到固定维度的嵌入，内容越相近向量越相似
pub struct HashEmbedder {
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self::with_dimensions(DIMENSIONS)
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on_call: None,
            dimensions,
        }
    }

    /// 第 `n` 次调用（从 1 开始）返回错误
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn embed(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimensions];
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            vector[(ch as usize) % self.dimensions] += 1.0;
        }
        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed_documents(&self, texts: Vec<String>) -> Result<Vec<Vec<f64>>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(anyhow!("quota exceeded"));
        }
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }

    fn model_name(&self) -> &str {
        "hash-embedding"
    }
}

/// 按顺序返回预设回复的对话模型，并记录收到的提示
pub struct ScriptedChatModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    fallback: Result<String, String>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedChatModel {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            fallback: Ok("네!".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// 回复队列耗尽后始终返回同一结果
    pub fn always(reply: Result<&str, &str>) -> Self {
        let mut model = Self::new(Vec::new());
        model.fallback = reply.map(str::to_string).map_err(str::to_string);
        model
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedChatModel {
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        reply.map_err(|e| anyhow!(e))
    }
}

pub fn intent_json(is_recycling: bool, region: Option<&str>) -> String {
    serde_json::json!({ "is_recycling": is_recycling, "region": region }).to_string()
}
