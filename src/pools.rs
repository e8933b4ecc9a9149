//! Per-category content retrieval: live feeds first, relevance and novelty
//! filtered, topped up from static pools when the live side comes up short.

use crate::config::AgentConfig;
use crate::dedup::{deduplicate_by_title, DEFAULT_THRESHOLD};
use crate::fallback;
use crate::fetcher::{clean_summary, extract_source, unescape_html, FeedFetcher};
use crate::history::HistoryStore;
use crate::relevance::is_ai_relevant;
use crate::types::{Insight, NewsItem, PromptTip, ToolPick, VideoPick};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

pub struct ContentPools {
    fetcher: FeedFetcher,
    config: AgentConfig,
    rng: StdRng,
}

impl ContentPools {
    pub fn new(config: AgentConfig) -> Self {
        let fetcher = FeedFetcher::new(config.fetch.clone());
        Self {
            fetcher,
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source, so tests get deterministic shuffles and
    /// picks.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// News: every feed in priority order, relevance filtered, fuzzy
    /// deduplicated within the run, novelty filtered, newest first.
    pub async fn fetch_news(&mut self, history: &HistoryStore) -> Vec<NewsItem> {
        info!("Fetching AI news");
        let mut items = Vec::new();

        for feed_url in &self.config.news_feeds {
            let Some(entries) = self.fetcher.fetch_feed(feed_url).await else {
                warn!("Failed to fetch news feed: {}", feed_url);
                continue;
            };

            for entry in entries.into_iter().take(5) {
                let raw_title = entry
                    .title
                    .as_deref()
                    .map(unescape_html)
                    .unwrap_or_else(|| "Untitled".to_string());
                let raw_summary = entry.summary.as_deref().unwrap_or("");

                if !is_ai_relevant(&raw_title, raw_summary) {
                    continue;
                }

                let (title, source) = extract_source(&raw_title);
                items.push(NewsItem {
                    title,
                    link: entry.link.unwrap_or_else(|| "#".to_string()),
                    published: entry.published.unwrap_or_else(Utc::now),
                    summary: clean_summary(entry.summary.as_deref()),
                    source,
                });
            }
        }

        let mut items = deduplicate_by_title(items, |i| i.title.as_str(), DEFAULT_THRESHOLD);
        items.retain(|item| !history.was_published(&item.title));
        items.sort_by(|a, b| b.published.cmp(&a.published));

        info!("Collected {} unique news items", items.len());
        items
    }

    /// Tools: live feed picks first; static pool (shuffled, novelty
    /// filtered) tops up to the cap.
    pub async fn fetch_tools(&mut self, history: &HistoryStore) -> Vec<ToolPick> {
        info!("Fetching AI tools");
        let mut tools = Vec::new();

        for feed_url in &self.config.tool_feeds {
            let Some(entries) = self.fetcher.fetch_feed(feed_url).await else {
                continue;
            };
            for entry in entries.into_iter().take(15) {
                let Some(name) = entry.title.as_deref().map(unescape_html).filter(|t| !t.is_empty())
                else {
                    continue;
                };
                if history.was_published(&name) {
                    continue;
                }
                tools.push(ToolPick {
                    name,
                    link: entry.link.unwrap_or_else(|| "#".to_string()),
                    description: clean_summary(entry.summary.as_deref()),
                });
            }
        }

        if tools.len() >= self.config.max_tools {
            info!("Found {} tools from live feeds", tools.len());
            tools.truncate(self.config.max_tools);
            return tools;
        }

        info!("Supplementing tools from fallback pool");
        let mut pool: Vec<ToolPick> = fallback::fallback_tools()
            .into_iter()
            .filter(|t| !history.was_published(&t.name))
            .collect();
        pool.shuffle(&mut self.rng);
        tools.extend(pool);
        tools.truncate(self.config.max_tools);
        tools
    }

    /// Video: first unpublished live candidate, else a random unpublished
    /// fallback, else any fallback. Never empty once the pool exists.
    pub async fn fetch_video(&mut self, history: &HistoryStore) -> Option<VideoPick> {
        info!("Fetching video pick");

        for feed_url in &self.config.video_feeds {
            let Some(entries) = self.fetcher.fetch_feed_with_retries(feed_url, 2).await else {
                continue;
            };
            for entry in entries.into_iter().take(3) {
                let Some(title) = entry.title.as_deref().map(unescape_html).filter(|t| !t.is_empty())
                else {
                    continue;
                };
                if history.was_published(&title) {
                    continue;
                }
                info!("Selected video from live feed: {}", title);
                return Some(VideoPick {
                    title,
                    link: entry.link.unwrap_or_else(|| "#".to_string()),
                    channel: entry.feed_title.unwrap_or_else(|| "Unknown".to_string()),
                });
            }
        }

        info!("Using fallback video pool");
        let pool = fallback::fallback_videos();
        let fresh: Vec<&VideoPick> =
            pool.iter().filter(|v| !history.was_published(&v.title)).collect();
        if let Some(video) = fresh.choose(&mut self.rng) {
            return Some((*video).clone());
        }
        // Every fallback has been published within the window; reuse one.
        pool.choose(&mut self.rng).cloned()
    }

    /// Insights: live research-blog headlines, topped up from the fallback
    /// pool, shuffled for variety.
    pub async fn fetch_insights(&mut self, history: &HistoryStore) -> Vec<Insight> {
        info!("Fetching insights");
        let mut insights = Vec::new();

        for feed_url in &self.config.insight_feeds {
            let Some(entries) = self.fetcher.fetch_feed_with_retries(feed_url, 2).await else {
                continue;
            };
            for entry in entries.into_iter().take(5) {
                let Some(text) = entry.title.as_deref().map(unescape_html).filter(|t| !t.is_empty())
                else {
                    continue;
                };
                if history.was_published(&text) {
                    continue;
                }
                insights.push(Insight {
                    text,
                    source: entry.feed_title.unwrap_or_else(|| "AI Research".to_string()),
                    link: entry.link,
                });
            }
        }

        if insights.len() >= self.config.max_insights {
            info!("Found {} insights from live feeds", insights.len());
            insights.shuffle(&mut self.rng);
            insights.truncate(self.config.max_insights);
            return insights;
        }

        info!("Supplementing insights from fallback pool");
        let mut pool: Vec<Insight> = fallback::fallback_insights()
            .into_iter()
            .filter(|i| !history.was_published(&i.text))
            .collect();
        pool.shuffle(&mut self.rng);
        insights.extend(pool);
        insights.truncate(self.config.max_insights);
        insights
    }

    /// First prompt tip not shown within the retention window, else a
    /// random one.
    pub fn prompt_tip(&mut self, history: &HistoryStore) -> Option<PromptTip> {
        info!("Selecting prompt tip");
        let tips = fallback::prompt_tips();
        if let Some(tip) = tips.iter().find(|t| !history.was_published(&t.intro)) {
            return Some(tip.clone());
        }
        tips.choose(&mut self.rng).cloned()
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Contextual "Why it matters" commentary for the main story, keyed off
/// the article's wording.
pub fn why_it_matters<R: Rng + ?Sized>(
    title: &str,
    summary: &str,
    source: &str,
    rng: &mut R,
) -> String {
    let text = format!("{} {} {}", title, summary, source).to_lowercase();

    let contains_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    let templates: &[&str] = if contains_any(&[
        "funding", "raises", "valuation", "investment", "series", "billion", "million",
    ]) {
        &[
            "This funding signals growing investor confidence in this AI segment, which could accelerate product development and competition.",
            "Major investment rounds like this reshape the competitive landscape, often leading to faster releases across the industry.",
            "Capital flows reveal where the smart money sees AI's next big opportunities, and this bet is telling.",
        ]
    } else if contains_any(&["open source", "open-source", "release", "launches", "free", "available"]) {
        &[
            "Open releases democratize access to advanced AI, enabling smaller teams and indie developers to build on cutting-edge tech.",
            "When major players release tools freely, it lowers barriers to entry and sparks community-driven innovation.",
            "Accessibility moves like this accelerate the entire ecosystem: what was enterprise-only yesterday becomes everyone's tool tomorrow.",
        ]
    } else if contains_any(&["safety", "regulation", "policy", "government", "law", "ban", "rules", "compliance"]) {
        &[
            "As AI governance frameworks take shape, early regulatory decisions set precedents that define what's permissible for years.",
            "Policy developments directly affect which AI tools reach consumers and how companies deploy models at scale.",
            "The regulatory landscape is the invisible hand shaping AI's future; these decisions matter more than most technical breakthroughs.",
        ]
    } else if contains_any(&["research", "paper", "study", "breakthrough", "discover", "benchmark", "state-of-the-art"]) {
        &[
            "Research breakthroughs like this typically take 12-18 months to reach products, but they define the next generation of AI tools.",
            "Fundamental research shapes the capabilities that eventually appear in the tools millions of people use daily.",
            "Today's research paper is tomorrow's product feature; keeping an eye on the cutting edge reveals where AI is heading.",
        ]
    } else if contains_any(&["partner", "integrat", "collaborat", "acqui", "merger", "deal"]) {
        &[
            "Strategic partnerships reshape the ecosystem, determining which AI capabilities become mainstream and accessible.",
            "Integration moves signal a maturing market where reach and interoperability matter as much as raw model performance.",
            "These alliances redraw the competitive map: what matters isn't just who has the best model, but who has the best distribution.",
        ]
    } else {
        &[
            "This reflects AI's rapid evolution, where each week brings shifts that would have seemed impossible a year ago.",
            "For professionals and enthusiasts alike, developments like this are crucial for understanding where the industry is heading.",
            "AI is moving from research labs into everyday workflows at unprecedented speed; this is another proof point.",
            "The pace of change in AI means today's headline becomes tomorrow's baseline. Staying informed is a competitive advantage.",
        ]
    };

    templates
        .choose(rng)
        .copied()
        .unwrap_or(templates[0])
        .to_string()
}
