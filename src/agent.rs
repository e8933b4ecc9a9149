//! Run orchestration: fetch, validate minimums, build, publish, record.
//! Every failure comes back as a [`RunReport`], never a panic.

use crate::config::{random_emoji, AgentConfig, Section};
use crate::formatter::{DocFormatter, DocRequest};
use crate::gdoc::DocPublisher;
use crate::history::HistoryStore;
use crate::pools::{why_it_matters, ContentPools};
use crate::types::{ContentCategory, EditionContent, RunReport, RunStats};
use chrono::Local;
use tracing::{error, info, warn};

pub struct NewsletterAgent<P: DocPublisher> {
    config: AgentConfig,
    pools: ContentPools,
    history: HistoryStore,
    publisher: P,
    today: String,
}

impl<P: DocPublisher> NewsletterAgent<P> {
    pub fn new(config: AgentConfig, pools: ContentPools, history: HistoryStore, publisher: P) -> Self {
        let today = Local::now().format("%A, %B %d, %Y").to_string();
        Self { config, pools, history, publisher, today }
    }

    /// Run the complete generation process: fetch all categories, then
    /// publish the edition.
    pub async fn run(&mut self) -> RunReport {
        info!("Starting newsletter agent run");
        let content = self.fetch_all_content().await;
        self.publish_edition(content).await
    }

    /// Fetch every category sequentially. Categories are independent; a
    /// failed feed only thins its own candidate list.
    pub async fn fetch_all_content(&mut self) -> EditionContent {
        let news_items = self.pools.fetch_news(&self.history).await;
        let tools = self.pools.fetch_tools(&self.history).await;
        let video = self.pools.fetch_video(&self.history).await;
        let insights = self.pools.fetch_insights(&self.history).await;
        let prompt_tip = self.pools.prompt_tip(&self.history);

        EditionContent { news_items, tools, video, insights, prompt_tip }
    }

    /// Validate minimums, build, publish, and record history. Separated
    /// from [`run`](Self::run) so tests can inject a selection directly.
    pub async fn publish_edition(&mut self, content: EditionContent) -> RunReport {
        let issues = self.validate(&content);
        if !issues.is_empty() {
            let message = format!("Content validation failed: {}", issues.join("; "));
            warn!("{}", message);
            return RunReport::error(message);
        }

        let requests = self.build_document(&content);

        if let Err(e) = self.publisher.clear().await {
            error!("Failed to clear document: {}", e);
            return RunReport::error(format!("Failed to clear document: {}", e));
        }
        if let Err(e) = self.publisher.apply(&requests).await {
            error!("Failed to update document: {}", e);
            return RunReport::error(format!("Failed to update document: {}", e));
        }

        self.record_all_published(&content);
        if let Err(e) = self.history.save() {
            // Publish already succeeded; the next run may re-offer this
            // edition's content. Reported as success regardless.
            error!("History save failed after publish: {}", e);
        }

        info!("Newsletter generation and update completed");
        RunReport::success(
            "Newsletter updated successfully",
            RunStats {
                news_items: content.news_items.len(),
                tools: content.tools.len(),
                insights: content.insights.len(),
                has_video: content.video.is_some(),
                has_prompt_tip: content.prompt_tip.is_some(),
            },
        )
    }

    /// Minimum-content gate. Returns human-readable issues; empty means
    /// the edition is publishable.
    pub fn validate(&self, content: &EditionContent) -> Vec<String> {
        let mut issues = Vec::new();
        if content.news_items.len() < self.config.min_news_items {
            issues.push(format!(
                "only {} news items (need {})",
                content.news_items.len(),
                self.config.min_news_items
            ));
        }
        if content.tools.len() < self.config.min_tools {
            issues.push(format!(
                "only {} tools (need {})",
                content.tools.len(),
                self.config.min_tools
            ));
        }
        if content.video.is_none() {
            issues.push("no video selected".to_string());
        }
        if content.insights.len() < self.config.min_insights {
            issues.push(format!(
                "only {} insights (need {})",
                content.insights.len(),
                self.config.min_insights
            ));
        }
        issues
    }

    /// Build the full edition document in fixed section order, skipping
    /// sections with no content.
    pub fn build_document(&mut self, content: &EditionContent) -> Vec<DocRequest> {
        info!("Building formatted newsletter");
        let mut fmt = DocFormatter::new();
        let rng = self.pools.rng_mut();

        // Title
        fmt.add_heading(&format!("Return of the Jed(AI) - {}", self.today), 1);
        fmt.add_newline();

        // Headline from the top story
        let headline_emoji = random_emoji(Section::Headline, rng);
        if let Some(main) = content.news_items.first() {
            fmt.add_heading(&format!("{} {}", headline_emoji, main.title), 2);
            fmt.add_italic_text("PLUS: The AI tools reshaping how we work & create");
            fmt.add_newline();
        } else {
            fmt.add_heading(
                &format!("{} AI's Wild Week: Breakthroughs & Innovations", headline_emoji),
                2,
            );
        }

        fmt.add_newline();
        fmt.add_horizontal_rule();
        fmt.add_newline();

        // Welcome
        let welcome_emoji = random_emoji(Section::Welcome, rng);
        fmt.add_heading(&format!("{} Welcome, fellow humans!", welcome_emoji), 2);
        fmt.add_text("Hope your algorithms are optimized and your neural nets are firing on all nodes today. ");
        fmt.add_text("Let's dive into the latest from the AI universe.");
        fmt.add_newline();
        fmt.add_newline();
        fmt.add_horizontal_rule();
        fmt.add_newline();

        // Main story
        if let Some(main) = content.news_items.first() {
            fmt.add_heading("Main Story", 2);
            fmt.add_newline();
            fmt.add_heading(&main.title, 3);
            fmt.add_text(&main.summary);
            fmt.add_newline();
            fmt.add_newline();
            let why = why_it_matters(&main.title, &main.summary, &main.source, rng);
            fmt.add_bold_text("Why it matters: ");
            fmt.add_text(&why);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_link("Read the full story →", &main.link);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Prompt tip
        if let Some(tip) = &content.prompt_tip {
            let prompt_emoji = random_emoji(Section::PromptTip, rng);
            fmt.add_heading(&format!("{} Prompt Magic of the Day", prompt_emoji), 2);
            fmt.add_newline();
            fmt.add_bold_text(&tip.intro);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_text("Try this prompt:");
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_italic_text(&tip.prompt);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_text(&tip.explanation);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Tools
        if !content.tools.is_empty() {
            let tools_emoji = random_emoji(Section::Tools, rng);
            fmt.add_heading(&format!("{} AI Toolkit: New & Noteworthy", tools_emoji), 2);
            fmt.add_newline();
            let bullet_start = fmt.cursor();
            for tool in &content.tools {
                fmt.add_bold_text(&tool.name);
                fmt.add_text(&format!(" — {}", tool.description));
                fmt.add_newline();
            }
            let bullet_end = fmt.cursor();
            fmt.add_bullets_to_range(bullet_start, bullet_end);
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Quick hits
        if content.news_items.len() > 1 {
            let news_emoji = random_emoji(Section::News, rng);
            fmt.add_heading(&format!("{} Around the Horn (Quick Hits)", news_emoji), 2);
            fmt.add_newline();
            let bullet_start = fmt.cursor();
            for news in content.news_items.iter().skip(1).take(4) {
                fmt.add_bold_text(&format!("{}: ", news.source));
                fmt.add_text(&news.title);
                fmt.add_newline();
            }
            let bullet_end = fmt.cursor();
            fmt.add_bullets_to_range(bullet_start, bullet_end);
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Video pick
        if let Some(video) = &content.video {
            let video_emoji = random_emoji(Section::Video, rng);
            fmt.add_heading(&format!("{} This Week in AI (Video Pick)", video_emoji), 2);
            fmt.add_newline();
            fmt.add_bold_text(&video.title);
            fmt.add_text(&format!(" from {}", video.channel));
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_link("Watch Now →", &video.link);
            fmt.add_newline();
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Insights
        if !content.insights.is_empty() {
            let insights_emoji = random_emoji(Section::Insights, rng);
            fmt.add_heading(&format!("{} Intelligent Insights", insights_emoji), 2);
            fmt.add_newline();
            let bullet_start = fmt.cursor();
            for insight in &content.insights {
                if insight.source != "AI Research" {
                    fmt.add_bold_text(&format!("{}: ", insight.source));
                }
                fmt.add_text(&insight.text);
                if let Some(link) = &insight.link {
                    fmt.add_text(" ");
                    fmt.add_link("[source]", link);
                }
                fmt.add_newline();
            }
            let bullet_end = fmt.cursor();
            fmt.add_bullets_to_range(bullet_start, bullet_end);
            fmt.add_newline();
            fmt.add_horizontal_rule();
            fmt.add_newline();
        }

        // Footer
        fmt.add_heading("That's a wrap!", 2);
        fmt.add_newline();
        fmt.add_text("Thanks for reading! The best way to support us is by sharing this newsletter with a friend.");
        fmt.add_newline();

        fmt.build()
    }

    /// Record everything the built document actually included.
    fn record_all_published(&mut self, content: &EditionContent) {
        for item in content.news_items.iter().take(5) {
            self.history.record(&item.title, ContentCategory::News);
        }
        for tool in &content.tools {
            self.history.record(&tool.name, ContentCategory::Tool);
        }
        if let Some(video) = &content.video {
            self.history.record(&video.title, ContentCategory::Video);
        }
        for insight in &content.insights {
            self.history.record(&insight.text, ContentCategory::Insight);
        }
        if let Some(tip) = &content.prompt_tip {
            self.history.record(&tip.intro, ContentCategory::PromptTip);
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}
