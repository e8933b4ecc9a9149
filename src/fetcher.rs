use crate::config::FetchConfig;
use crate::types::RawEntry;
use backoff::backoff::Backoff;
use backoff::exponential::ExponentialBackoff;
use chrono::Utc;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info, warn};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// One fetch attempt, classified so the retry loop can decide what to do
/// without inspecting error chains.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(Vec<RawEntry>),
    /// Worth retrying: transport failure, server error, a mangled payload,
    /// or an empty feed.
    Transient(String),
    /// Not worth retrying: HTTP client error.
    Permanent(String),
}

/// Fetches and parses one RSS/Atom feed at a time. Retries are bounded and
/// backed off; persistent failure degrades to `None` rather than an error,
/// because every feed has a fallback pool behind it.
pub struct FeedFetcher {
    client: Client,
    config: FetchConfig,
}

impl FeedFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch a feed with up to `max_retries` attempts. Returns `None` when
    /// every attempt fails; callers fall back to static pools.
    pub async fn fetch_feed(&self, url: &str) -> Option<Vec<RawEntry>> {
        self.fetch_feed_with_retries(url, self.config.max_retries).await
    }

    /// Same as [`fetch_feed`](Self::fetch_feed) with a per-call attempt
    /// budget (video and insight feeds use a smaller one).
    pub async fn fetch_feed_with_retries(
        &self,
        url: &str,
        max_retries: u32,
    ) -> Option<Vec<RawEntry>> {
        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 16),
            multiplier: 2.0,
            max_elapsed_time: None,
            ..Default::default()
        };

        for attempt in 1..=max_retries {
            match self.attempt_fetch(url).await {
                FetchOutcome::Success(entries) => {
                    info!("Fetched {} entries from {}", entries.len(), url);
                    return Some(entries);
                }
                FetchOutcome::Permanent(reason) => {
                    warn!("Giving up on {}: {}", url, reason);
                    return None;
                }
                FetchOutcome::Transient(reason) => {
                    warn!(
                        "Attempt {}/{} failed for {}: {}",
                        attempt, max_retries, url, reason
                    );
                    if attempt < max_retries {
                        if let Some(delay) = backoff.next_backoff() {
                            tokio::time::sleep(delay).await;
                        }
                    }
                }
            }
        }

        warn!("Failed to fetch feed after {} attempts: {}", max_retries, url);
        None
    }

    async fn attempt_fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => return FetchOutcome::Transient(format!("request failed: {}", e)),
        };

        let status = response.status();
        if status.is_client_error() {
            return FetchOutcome::Permanent(format!("HTTP {}", status));
        }
        if !status.is_success() {
            return FetchOutcome::Transient(format!("HTTP {}", status));
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return FetchOutcome::Transient(format!("body read failed: {}", e)),
        };

        let outcome = classify_body(&body);
        if let FetchOutcome::Success(_) = outcome {
            debug!("Parsed feed {}", url);
        }
        outcome
    }
}

/// Classify a fetched feed body. A mangled payload may be a truncated
/// response and an empty feed is indistinguishable from a hiccup upstream,
/// so both are worth retrying.
fn classify_body(body: &str) -> FetchOutcome {
    let feed = match feed_rs::parser::parse(body.as_bytes()) {
        Ok(f) => f,
        Err(e) => return FetchOutcome::Transient(format!("parse failed: {}", e)),
    };

    if feed.entries.is_empty() {
        return FetchOutcome::Transient("feed contained no entries".to_string());
    }

    let feed_title = feed.title.map(|t| t.content);
    let entries = feed
        .entries
        .into_iter()
        .map(|entry| RawEntry {
            title: entry.title.map(|t| t.content),
            link: entry.links.first().map(|l| l.href.clone()),
            summary: entry.summary.map(|s| s.content),
            published: entry.published.map(|dt| dt.with_timezone(&Utc)),
            feed_title: feed_title.clone(),
        })
        .collect();

    FetchOutcome::Success(entries)
}

/// Clean a raw entry summary: unescape entities, strip tags, cap length.
pub fn clean_summary(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return "No summary available.".to_string(),
    };
    let unescaped = unescape_html(raw);
    let stripped = TAG_RE.replace_all(&unescaped, "");
    let trimmed = stripped.trim();
    if trimmed.chars().count() > 300 {
        let cut: String = trimmed.chars().take(297).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}

/// Split a Google-News-style title `"Headline - Source Name"` into headline
/// and source. Titles without the separator keep a generic source label.
pub fn extract_source(title: &str) -> (String, String) {
    if let Some(idx) = title.rfind(" - ") {
        let (headline, source) = title.split_at(idx);
        let source = source.trim_start_matches(" - ");
        if !headline.is_empty() && !source.is_empty() {
            return (headline.to_string(), source.to_string());
        }
    }
    (title.to_string(), "AI News".to_string())
}

/// Minimal entity unescape covering what RSS summaries actually contain.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>AI Wire</title>
<item><title>Model update - AI Wire</title><link>https://example.com/a</link></item>
</channel></rss>"#;

    const EMPTY_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>AI Wire</title></channel></rss>"#;

    #[test]
    fn valid_body_yields_entries() {
        match classify_body(VALID_FEED) {
            FetchOutcome::Success(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].feed_title.as_deref(), Some("AI Wire"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn mangled_body_is_retried() {
        // A truncated or non-XML payload must stay in the retry budget
        // instead of abandoning the feed on the first attempt.
        for body in ["not a feed at all", "<html><body>oops</body></html>"] {
            match classify_body(body) {
                FetchOutcome::Transient(_) => {}
                other => panic!("expected transient for {:?}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn empty_feed_is_retried() {
        match classify_body(EMPTY_FEED) {
            FetchOutcome::Transient(reason) => assert!(reason.contains("no entries")),
            other => panic!("expected transient, got {:?}", other),
        }
    }
}
