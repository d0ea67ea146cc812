use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use ragline::chat::{self, ChatService};
use ragline::config::Config;
use ragline::logging;
use ragline::retrieval::HttpRetrievalClient;

#[derive(Parser)]
#[command(
    name = "ragline",
    about = "Run ad-hoc retrieval queries against a RAG platform through a chat-style interface"
)]
struct Cli {
    /// Dataset identifiers to scope queries to (repeatable).
    #[arg(long = "dataset", global = true)]
    datasets: Vec<String>,
    /// Maximum number of passages to retrieve per question (1-50).
    #[arg(long, global = true)]
    limit: Option<usize>,
    /// Disable server-side query rewriting.
    #[arg(long, global = true)]
    no_rewrite: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the composed answer.
    Ask {
        /// Question to submit to the retrieval pipeline.
        question: String,
    },
    /// Interactive chat loop reading questions from stdin.
    Chat,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli);

    let client =
        HttpRetrievalClient::new(&config).context("Failed to construct retrieval client")?;
    let service = ChatService::new(client, &config);

    match cli.command {
        Command::Ask { ref question } => {
            println!("{}", run_turn(&service, question).await);
        }
        Command::Chat => {
            chat_loop(&service).await?;
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if !cli.datasets.is_empty() {
        config.dataset_ids = Some(cli.datasets.clone());
    }
    if cli.limit.is_some() {
        config.result_limit = cli.limit;
    }
    if cli.no_rewrite {
        config.query_rewrite = Some(false);
    }
}

async fn run_turn<C: ragline::retrieval::RetrievalClient>(
    service: &ChatService<C>,
    question: &str,
) -> String {
    match service.run_turn(question).await {
        Ok(turn) => chat::render_turn(&turn),
        Err(error) => chat::render_failure(&error),
    }
}

async fn chat_loop<C: ragline::retrieval::RetrievalClient>(
    service: &ChatService<C>,
) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question == ":q" || question == ":quit" {
            break;
        }
        if !question.is_empty() {
            let rendered = run_turn(service, question).await;
            stdout
                .write_all(format!("{rendered}\n\n").as_bytes())
                .await?;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
