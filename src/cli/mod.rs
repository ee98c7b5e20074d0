use crate::config::{Config, LLMProvider};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Burring - 재활용 도우미 버링이
#[derive(Parser, Debug)]
#[command(name = "burring")]
#[command(
    about = "Retrieval-augmented recycling assistant. Builds per-region vector indexes from recycling fact files and answers questions about municipal recycling rules."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 재활용 정보 데이터 경로
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 벡터 인덱스 저장 경로
    #[arg(long, global = true)]
    pub index_dir: Option<PathBuf>,

    /// LLM Provider (gemini, openai, ollama)
    #[arg(long, global = true)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// 对话模型
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 임베딩 모델
    #[arg(long, global = true)]
    pub embedding_model: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// 대화 시작
    Chat {
        /// 每轮结束后打印会话摘要
        #[arg(long)]
        debug: bool,
    },
    /// 지역별 벡터 인덱스 빌드
    BuildIndex {
        /// 每批次嵌入的文档数
        #[arg(long)]
        batch_size: Option<usize>,
    },
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn to_config(&self) -> anyhow::Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定的配置文件必须可读
            Config::from_file(config_path)?
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("burring.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path)?
            } else {
                Config::default()
            }
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(index_dir) = &self.index_dir {
            config.index_dir = index_dir.clone();
        }

        // 覆盖LLM配置
        if let Some(provider_str) = &self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 경고: 알 수 없는 provider: {}, 기본 provider를 사용합니다",
                    provider_str
                );
            }
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(embedding_model) = &self.embedding_model {
            config.embedding.model = embedding_model.clone();
        }
        if let Command::BuildIndex {
            batch_size: Some(batch_size),
        } = self.command
        {
            config.embedding.batch_size = batch_size;
        }

        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
