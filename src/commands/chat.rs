//! 交互式CLI：逐行读取用户输入并打印回复

use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::agent::RecyclingAgent;
use crate::config::Config;
use crate::graph::RecyclingGraph;
use crate::llm::{EmbeddingClient, LlmClients};
use crate::store::VectorStoreManager;

const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "종료"];

pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&input.as_str())
}

/// 根据配置创建会话并在标准输入输出上运行对话
pub async fn execute(config: &Config, debug: bool) -> Result<()> {
    config.validate()?;

    let clients = LlmClients::from_config(config)?;
    let embedder = EmbeddingClient::from_config(config)?;
    let store = VectorStoreManager::new(config.clone(), Arc::new(embedder))?;
    let mut agent = RecyclingAgent::new(RecyclingGraph::new(clients, store));

    run(
        &mut agent,
        &config.supported_regions(),
        std::io::stdin().lock(),
        std::io::stdout(),
        debug,
    )
    .await
}

/// 对话循环。遇到退出指令或输入结束时返回
pub async fn run<R, W>(
    agent: &mut RecyclingAgent,
    supported_regions: &[&str],
    mut input: R,
    mut output: W,
    debug: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "🌱 재활용 도우미 버링이")?;
    writeln!(output, "📍 지원 지역: {}", supported_regions.join(", "))?;
    writeln!(
        output,
        "💡 예시: '관악구에서 플라스틱 어떻게 버려요?' 또는 '성동구' 입력 후 품목 질문"
    )?;
    writeln!(output, "💬 종료: 'exit' 입력\n")?;

    let mut line = String::new();
    loop {
        write!(output, "\n👤 You: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let user_input = line.trim();
        if is_exit_command(user_input) {
            writeln!(
                output,
                "\n👋 버링이: 안녕히 가세요! 지구를 위해 함께해주셔서 감사해요!"
            )?;
            break;
        }
        if user_input.is_empty() {
            continue;
        }

        let response = agent.get_response(user_input).await;
        writeln!(output, "\n🤖 버링이: {}", response)?;

        if debug {
            let summary = agent.conversation_summary();
            writeln!(
                output,
                "\n[DEBUG] {{total_turns: {}, casual_count: {}, history_length: {}}}",
                summary.total_turns, summary.casual_count, summary.history_length
            )?;
        }
    }

    Ok(())
}
