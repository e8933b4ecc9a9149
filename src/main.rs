use clap::Parser;
use newsletter_agent::{
    AgentConfig, AgentError, ContentPools, DocsClient, HistoryStore, NewsletterAgent, RunStatus,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "newsletter-agent", about = "Assemble and publish a newsletter edition")]
struct Args {
    /// Target document id
    #[arg(long, env = "DOCUMENT_ID")]
    doc_id: Option<String>,

    /// Bearer token for the document service
    #[arg(long, env = "DOCS_TOKEN")]
    token: Option<String>,

    /// Path of the content history file
    #[arg(long, default_value = "content_history.json")]
    history_file: PathBuf,

    /// Build the edition and print the request list without publishing
    /// or touching history
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = AgentConfig::default();
    let history = HistoryStore::load(&args.history_file, config.history_max_days);
    let pools = ContentPools::new(config.clone());

    if args.dry_run {
        info!("Dry run: fetching content and printing requests");
        // The publisher is never called on this path.
        let publisher = DocsClient::new("dry-run", "dry-run");
        let mut agent = NewsletterAgent::new(config, pools, history, publisher);
        let content = agent.fetch_all_content().await;
        let requests = agent.build_document(&content);
        println!("{}", serde_json::to_string_pretty(&requests)?);
        return Ok(());
    }

    let doc_id = args
        .doc_id
        .ok_or_else(|| AgentError::MissingConfig("DOCUMENT_ID".to_string()))?;
    let token = args
        .token
        .ok_or_else(|| AgentError::MissingConfig("DOCS_TOKEN".to_string()))?;

    let publisher = DocsClient::new(doc_id, token);
    let mut agent = NewsletterAgent::new(config, pools, history, publisher);
    let report = agent.run().await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    match report.status {
        RunStatus::Success => {
            info!("Run finished: {}", report.message);
            Ok(())
        }
        RunStatus::Error => {
            error!("Run failed: {}", report.message);
            std::process::exit(1);
        }
    }
}
