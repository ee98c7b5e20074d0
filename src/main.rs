use anyhow::Result;
use burring::cli::{self, Command};
use burring::{commands, config};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    // 从 `.env` 读取 API KEY 等环境变量
    config::load_env_file(None);

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ 설정을 읽을 수 없습니다: {:#}", e);
            std::process::exit(1);
        }
    };
    burring::logging::init(config.verbose);

    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n\n👋 프로그램을 종료합니다.");
            std::process::exit(130);
        }
    });

    let result = match args.command {
        Command::Chat { debug } => commands::chat::execute(&config, debug).await,
        Command::BuildIndex { .. } => commands::build_index::execute(&config).await.map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("❌ 오류 발생: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
