use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry as it comes out of a parsed feed. Every field except the
/// owning feed's title may be missing; downstream code supplies defaults
/// instead of probing.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub feed_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub summary: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolPick {
    pub name: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPick {
    pub title: String,
    pub link: String,
    pub channel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub source: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTip {
    pub intro: String,
    pub prompt: String,
    pub explanation: String,
}

/// Content category, used as the history record tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    News,
    Tool,
    Video,
    Insight,
    PromptTip,
}

/// Everything one edition selects across all categories. Exists only in
/// memory; history is updated all-or-nothing after a successful publish.
#[derive(Debug, Clone, Default)]
pub struct EditionContent {
    pub news_items: Vec<NewsItem>,
    pub tools: Vec<ToolPick>,
    pub video: Option<VideoPick>,
    pub insights: Vec<Insight>,
    pub prompt_tip: Option<PromptTip>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub news_items: usize,
    pub tools: usize,
    pub insights: usize,
    pub has_video: bool,
    pub has_prompt_tip: bool,
}

/// Structured result of one run. Errors come back as data, never as a
/// process crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub status: RunStatus,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
}

impl RunReport {
    pub fn success(message: impl Into<String>, stats: RunStats) -> Self {
        Self {
            status: RunStatus::Success,
            timestamp: Utc::now(),
            message: message.into(),
            stats: Some(stats),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Error,
            timestamp: Utc::now(),
            message: message.into(),
            stats: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("Content validation failed: {0}")]
    ContentValidation(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgentError>;
