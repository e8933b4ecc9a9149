use async_trait::async_trait;
use chrono::Utc;
use newsletter_agent::formatter::DocRequest;
use newsletter_agent::types::{
    AgentError, EditionContent, Insight, NewsItem, PromptTip, Result, RunStatus, ToolPick,
    VideoPick,
};
use newsletter_agent::{AgentConfig, ContentPools, DocPublisher, HistoryStore, NewsletterAgent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Clone, Default)]
struct MockPublisher {
    cleared: Arc<AtomicBool>,
    applied: Arc<Mutex<Vec<DocRequest>>>,
    fail_apply: bool,
}

impl MockPublisher {
    fn failing() -> Self {
        Self { fail_apply: true, ..Default::default() }
    }

    fn applied(&self) -> Vec<DocRequest> {
        self.applied.lock().unwrap().clone()
    }

    fn was_cleared(&self) -> bool {
        self.cleared.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocPublisher for MockPublisher {
    async fn clear(&self) -> Result<()> {
        self.cleared.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn apply(&self, requests: &[DocRequest]) -> Result<()> {
        if self.fail_apply {
            return Err(AgentError::Publish("service rejected the batch".to_string()));
        }
        self.applied.lock().unwrap().extend_from_slice(requests);
        Ok(())
    }
}

fn news(title: &str, source: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        link: format!("https://example.com/{}", title.len()),
        published: Utc::now(),
        summary: format!("Summary of {}", title),
        source: source.to_string(),
    }
}

fn full_selection() -> EditionContent {
    EditionContent {
        news_items: vec![
            news("OpenAI launches GPT-5", "TechCrunch"),
            news("Anthropic publishes interpretability research", "The Verge"),
            news("Open-source models close the benchmark gap", "Wired"),
        ],
        tools: vec![
            ToolPick {
                name: "Cursor".to_string(),
                link: "https://cursor.sh".to_string(),
                description: "AI-first code editor".to_string(),
            },
            ToolPick {
                name: "Perplexity".to_string(),
                link: "https://perplexity.ai".to_string(),
                description: "AI search".to_string(),
            },
            ToolPick {
                name: "Suno".to_string(),
                link: "https://suno.com".to_string(),
                description: "AI music".to_string(),
            },
        ],
        video: Some(VideoPick {
            title: "Why Transformers Changed Everything".to_string(),
            link: "https://youtube.com/watch?v=x".to_string(),
            channel: "3Blue1Brown".to_string(),
        }),
        insights: vec![
            Insight {
                text: "Chain-of-thought prompting improves accuracy".to_string(),
                source: "MIT News".to_string(),
                link: Some("https://news.mit.edu/x".to_string()),
            },
            Insight {
                text: "Synthetic data trains most vision models".to_string(),
                source: "AI Research".to_string(),
                link: None,
            },
        ],
        prompt_tip: Some(PromptTip {
            intro: "AI Fact-Checking Mode".to_string(),
            prompt: "Please fact check each claim.".to_string(),
            explanation: "Catches errors it would otherwise miss.".to_string(),
        }),
    }
}

fn make_agent(history_path: &Path, publisher: MockPublisher) -> NewsletterAgent<MockPublisher> {
    let config = AgentConfig::default();
    let history = HistoryStore::load(history_path, config.history_max_days);
    let pools = ContentPools::new(config.clone()).with_rng(StdRng::seed_from_u64(42));
    NewsletterAgent::new(config, pools, history, publisher)
}

#[tokio::test]
async fn full_selection_publishes_and_records_history() {
    let dir = tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let publisher = MockPublisher::default();
    let mut agent = make_agent(&history_path, publisher.clone());

    let report = agent.publish_edition(full_selection()).await;

    assert_eq!(report.status, RunStatus::Success);
    let stats = report.stats.expect("success report carries stats");
    assert_eq!(stats.news_items, 3);
    assert_eq!(stats.tools, 3);
    assert_eq!(stats.insights, 2);
    assert!(stats.has_video);
    assert!(stats.has_prompt_tip);

    // Clear-then-write, insert first
    assert!(publisher.was_cleared());
    let requests = publisher.applied();
    assert!(!requests.is_empty());
    match &requests[0] {
        DocRequest::InsertText(op) => {
            assert_eq!(op.location.index, 1);
            assert!(op.text.contains("OpenAI launches GPT-5"));
            assert!(op.text.contains("That's a wrap!"));
        }
        other => panic!("first request must be the insert, got {:?}", other),
    }

    // History was durably updated with everything included
    let reloaded = HistoryStore::load(&history_path, 90);
    assert!(reloaded.was_published("OpenAI launches GPT-5"));
    assert!(reloaded.was_published("Cursor"));
    assert!(reloaded.was_published("Why Transformers Changed Everything"));
    assert!(reloaded.was_published("Chain-of-thought prompting improves accuracy"));
    assert!(reloaded.was_published("AI Fact-Checking Mode"));
}

#[tokio::test]
async fn insufficient_content_aborts_before_publish() {
    let dir = tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let publisher = MockPublisher::default();
    let mut agent = make_agent(&history_path, publisher.clone());

    let mut content = full_selection();
    content.news_items.truncate(1); // below the minimum of 3

    let report = agent.publish_edition(content).await;

    assert_eq!(report.status, RunStatus::Error);
    assert!(report.message.contains("validation failed"));
    assert!(report.stats.is_none());

    // No publish side effect, no history save
    assert!(!publisher.was_cleared());
    assert!(publisher.applied().is_empty());
    assert!(!history_path.exists());
}

#[tokio::test]
async fn publish_failure_leaves_history_untouched() {
    let dir = tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let publisher = MockPublisher::failing();
    let mut agent = make_agent(&history_path, publisher.clone());

    let report = agent.publish_edition(full_selection()).await;

    assert_eq!(report.status, RunStatus::Error);
    assert!(report.message.contains("Failed to update document"));
    assert!(!history_path.exists());
}

#[tokio::test]
async fn bullet_sections_emit_coalesced_ranges() {
    let dir = tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let publisher = MockPublisher::default();
    let mut agent = make_agent(&history_path, publisher.clone());

    let report = agent.publish_edition(full_selection()).await;
    assert_eq!(report.status, RunStatus::Success);

    // Tools, quick hits, and insights each contribute one bullet op
    let bullet_ops = publisher
        .applied()
        .iter()
        .filter(|r| matches!(r, DocRequest::CreateParagraphBullets(_)))
        .count();
    assert_eq!(bullet_ops, 3);
}

#[tokio::test]
async fn skipped_sections_do_not_appear() {
    let dir = tempdir().unwrap();
    let history_path = dir.path().join("history.json");

    // Minimums relaxed so an edition without tools or a prompt tip is
    // still publishable.
    let mut config = AgentConfig::default();
    config.min_tools = 0;
    let history = HistoryStore::load(&history_path, config.history_max_days);
    let pools = ContentPools::new(config.clone()).with_rng(StdRng::seed_from_u64(7));
    let publisher = MockPublisher::default();
    let mut agent = NewsletterAgent::new(config, pools, history, publisher.clone());

    let mut content = full_selection();
    content.tools.clear();
    content.prompt_tip = None;

    let report = agent.publish_edition(content).await;
    assert_eq!(report.status, RunStatus::Success);

    let requests = publisher.applied();
    match &requests[0] {
        DocRequest::InsertText(op) => {
            assert!(!op.text.contains("AI Toolkit"));
            assert!(!op.text.contains("Prompt Magic"));
            assert!(op.text.contains("Main Story"));
        }
        other => panic!("first request must be the insert, got {:?}", other),
    }
}
