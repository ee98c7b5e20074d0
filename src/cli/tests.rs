#[cfg(test)]
mod tests {
    use crate::cli::{Args, Command};
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_chat_default_values() {
        let args = Args::try_parse_from(["burring", "chat"]).unwrap();

        assert_eq!(args.command, Command::Chat { debug: false });
        assert!(args.config.is_none());
        assert!(args.data_dir.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_chat_debug() {
        let args = Args::try_parse_from(["burring", "chat", "--debug", "-v"]).unwrap();

        assert_eq!(args.command, Command::Chat { debug: true });
        assert!(args.verbose);
    }

    #[test]
    fn test_args_build_index() {
        let args = Args::try_parse_from([
            "burring",
            "build-index",
            "--batch-size",
            "10",
            "--data-dir",
            "/data",
            "--index-dir",
            "/index",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::BuildIndex {
                batch_size: Some(10)
            }
        );
        assert_eq!(args.data_dir, Some(PathBuf::from("/data")));
        assert_eq!(args.index_dir, Some(PathBuf::from("/index")));
    }

    #[test]
    fn test_args_requires_subcommand() {
        assert!(Args::try_parse_from(["burring"]).is_err());
    }

    #[test]
    fn test_to_config_overrides() {
        let args = Args::try_parse_from([
            "burring",
            "build-index",
            "--batch-size",
            "8",
            "--data-dir",
            "/data",
            "--index-dir",
            "/index",
            "--llm-provider",
            "openai",
            "--llm-api-key",
            "test-key",
            "--llm-api-base-url",
            "https://api.openai.com/v1",
            "--model",
            "gpt-4o-mini",
            "--embedding-model",
            "text-embedding-3-small",
            "--verbose",
        ])
        .unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/data"));
        assert_eq!(config.index_dir, PathBuf::from("/index"));
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.llm.api_base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.embedding.model, "text-embedding-3-small");
        assert_eq!(config.embedding.batch_size, 8);
        assert!(config.verbose);
    }

    #[test]
    fn test_to_config_unknown_provider_keeps_default() {
        let args =
            Args::try_parse_from(["burring", "chat", "--llm-provider", "unknown"]).unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(config.llm.provider, LLMProvider::Gemini);
    }

    #[test]
    fn test_to_config_missing_explicit_file() {
        let args =
            Args::try_parse_from(["burring", "chat", "--config", "/nonexistent/burring.toml"])
                .unwrap();

        assert!(args.to_config().is_err());
    }

    #[test]
    fn test_to_config_keeps_verbose_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("burring.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let args =
            Args::try_parse_from(["burring", "chat", "--config", path.to_str().unwrap()]).unwrap();

        assert!(args.to_config().unwrap().verbose);
    }
}
