pub mod agent;
pub mod config;
pub mod dedup;
pub mod fallback;
pub mod fetcher;
pub mod formatter;
pub mod gdoc;
pub mod history;
pub mod pools;
pub mod relevance;
pub mod types;

pub use agent::NewsletterAgent;
pub use config::AgentConfig;
pub use fetcher::FeedFetcher;
pub use formatter::{DocFormatter, DocRequest, Span};
pub use gdoc::{DocPublisher, DocsClient};
pub use history::HistoryStore;
pub use pools::ContentPools;
pub use types::*;
