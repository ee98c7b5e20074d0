use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ChatbotError, ChatbotResult};

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "gemini")]
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Ok(LLMProvider::Gemini),
            "openai" => Ok(LLMProvider::OpenAI),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 지원 지역 (지역명 -> 지역 코드)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Region {
    /// 地区名，例如 "관악구"
    pub name: String,
    /// 地区代码，同时也是索引目录名
    pub code: String,
}

impl Region {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 回收信息原始数据目录（必须预先存在）
    pub data_dir: PathBuf,

    /// 向量索引保存目录（不存在时自动创建）
    pub index_dir: PathBuf,

    /// 支持的地区列表，顺序即地区匹配的优先级
    pub regions: Vec<Region>,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 嵌入与索引构建配置
    pub embedding: EmbeddingConfig,

    /// 유사도 검색 시 반환할 문서 수
    pub search_k: usize,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，为空时使用provider的默认地址
    pub api_base_url: String,

    /// 对话模型
    pub model: String,

    /// 回收问答用温度（准确度优先）
    pub temperature: f64,

    /// 闲聊用温度（多样性优先）
    pub temperature_casual: f64,

    /// 最大tokens
    pub max_tokens: u32,

    /// 简短回复的最大tokens
    pub max_tokens_short: u32,
}

/// 嵌入配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// 임베딩 모델
    pub model: String,

    /// 每批次嵌入的文档数
    pub batch_size: usize,

    /// 批次之间的等待时间（毫秒），用于应对API速率限制
    pub api_sleep_ms: u64,

    /// 批次失败后的等待时间（毫秒）
    pub error_sleep_ms: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 设置有效性检查：API KEY 必须存在，数据目录必须预先存在
    pub fn validate(&self) -> ChatbotResult<()> {
        if self.llm.provider != LLMProvider::Ollama && self.llm.api_key.trim().is_empty() {
            return Err(ChatbotError::Config(
                "API 키가 설정되지 않았습니다. .env 파일이나 환경 변수에 GOOGLE_API_KEY를 설정하세요.".to_string(),
            ));
        }

        if !self.data_dir.exists() {
            return Err(ChatbotError::Config(format!(
                "데이터 디렉토리가 없습니다: {}",
                self.data_dir.display()
            )));
        }

        Ok(())
    }

    /// 确保索引根目录存在
    pub fn ensure_index_dir(&self) -> ChatbotResult<()> {
        std::fs::create_dir_all(&self.index_dir)?;
        Ok(())
    }

    /// 지역명으로 지역 코드 반환
    pub fn region_code(&self, region_name: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|r| r.name == region_name)
            .map(|r| r.code.as_str())
    }

    /// 지원하는 지역 목록 반환
    pub fn supported_regions(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    /// 地区的索引目录，不支持的地区返回 None
    pub fn index_path(&self, region_name: &str) -> Option<PathBuf> {
        self.region_code(region_name)
            .map(|code| self.index_dir.join(code))
    }

    /// 지역별 원본 데이터 경로
    pub fn region_data_path(&self, region_name: &str) -> PathBuf {
        self.data_dir.join(region_name)
    }

    /// 在文本中查找第一个出现的支持地区（按照地区表顺序）
    pub fn find_region_in(&self, text: &str) -> Option<&str> {
        self.regions
            .iter()
            .map(|r| r.name.as_str())
            .find(|name| text.contains(name))
    }
}

/// 加载 `.env` 文件到进程环境变量，已存在的变量不会被覆盖。
///
/// `path` 为空时从当前目录向上查找 `.env`。返回是否成功加载。
pub fn load_env_file(path: Option<&Path>) -> bool {
    let result = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    result.is_ok()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("재활용정보"),
            index_dir: PathBuf::from("faiss_index"),
            regions: vec![
                Region::new("관악구", "gwanakgu"),
                Region::new("성동구", "seongdonggu"),
            ],
            llm: LLMConfig::default(),
            embedding: EmbeddingConfig::default(),
            search_k: 3,
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("GOOGLE_API_KEY")
                .or_else(|_| std::env::var("BURRING_LLM_API_KEY"))
                .unwrap_or_default(),
            api_base_url: String::new(),
            model: String::from("gemini-2.0-flash"),
            temperature: 0.0,
            temperature_casual: 0.7,
            max_tokens: 1000,
            max_tokens_short: 200,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: String::from("models/gemini-embedding-exp-03-07"),
            batch_size: 5,
            api_sleep_ms: 5000,
            error_sleep_ms: 5000,
        }
    }
}
