use rand::seq::IndexedRandom;
use rand::Rng;

/// Google News RSS queries for the news section, highest priority first.
pub const NEWS_FEEDS: &[&str] = &[
    "https://news.google.com/rss/search?q=artificial+intelligence+when:1d&hl=en-US&gl=US&ceid=US:en",
    "https://news.google.com/rss/search?q=machine+learning+when:1d&hl=en-US&gl=US&ceid=US:en",
    "https://news.google.com/rss/search?q=openai+when:1d&hl=en-US&gl=US&ceid=US:en",
    "https://news.google.com/rss/search?q=anthropic+claude+when:1d&hl=en-US&gl=US&ceid=US:en",
    "https://news.google.com/rss/search?q=generative+ai+when:1d&hl=en-US&gl=US&ceid=US:en",
];

/// Product Hunt AI category feed for live tool picks.
pub const TOOL_FEEDS: &[&str] =
    &["https://www.producthunt.com/feed?category=artificial-intelligence"];

/// YouTube channel feeds for the video pick (no API key required).
pub const VIDEO_FEEDS: &[&str] = &[
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCbfYPyITQ-7l4upoX8nvctg", // Two Minute Papers
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCUyeluBRhGPCW4acMjc9U8w", // AI Explained
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCZHmQk67mSJgfCCTn7xBfew", // Yannic Kilcher
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCSHZKyawb77ixDdsGog4iWA", // Lex Fridman
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCWN3xxRkmTPphYpZKE1hdWg", // Matt Wolfe
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCLXo7UDZvByw2ixzpQCufnA", // Fireship
    "https://www.youtube.com/feeds/videos.xml?channel_id=UCsBjURrPoezykLs9EqgamOA", // Fireship (second channel)
];

/// AI research blog feeds for the insights section.
pub const INSIGHT_FEEDS: &[&str] = &[
    "https://blog.google/technology/ai/rss/",
    "https://openai.com/blog/rss/",
    "https://news.mit.edu/rss/topic/artificial-intelligence2",
    "https://techcrunch.com/category/artificial-intelligence/feed/",
];

/// Terms that mark an article as AI-relevant.
pub const AI_TERMS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "openai",
    "anthropic",
    "claude",
    "chatgpt",
    "gpt-4",
    "gpt-5",
    "llm",
    "deep learning",
    "neural network",
    "generative ai",
    "large language model",
    "midjourney",
    "stable diffusion",
    "gemini",
    "copilot ai",
    "transformer model",
    "deepseek",
    "mistral",
    "llama",
    "diffusion model",
    "text-to-image",
    "text-to-video",
    "ai agent",
    "ai model",
    "ai",
];

/// Short or ambiguous terms that need word-boundary matching to avoid
/// false positives (e.g. "claude" inside a person's surname, "ai" inside
/// "maintain").
pub const AMBIGUOUS_TERMS: &[&str] = &["ai", "claude"];

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Newsletter-Agent/1.0".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            retry_delay_seconds: 2,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub news_feeds: Vec<String>,
    pub tool_feeds: Vec<String>,
    pub video_feeds: Vec<String>,
    pub insight_feeds: Vec<String>,
    pub min_news_items: usize,
    pub min_tools: usize,
    pub min_insights: usize,
    pub max_tools: usize,
    pub max_insights: usize,
    pub history_max_days: i64,
    pub fetch: FetchConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            news_feeds: NEWS_FEEDS.iter().map(|s| s.to_string()).collect(),
            tool_feeds: TOOL_FEEDS.iter().map(|s| s.to_string()).collect(),
            video_feeds: VIDEO_FEEDS.iter().map(|s| s.to_string()).collect(),
            insight_feeds: INSIGHT_FEEDS.iter().map(|s| s.to_string()).collect(),
            min_news_items: 3,
            min_tools: 3,
            min_insights: 2,
            max_tools: 5,
            max_insights: 4,
            history_max_days: 90,
            fetch: FetchConfig::default(),
        }
    }
}

/// Emoji rotation for section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Headline,
    Welcome,
    PromptTip,
    Tools,
    News,
    Video,
    Insights,
}

fn emoji_pool(section: Section) -> &'static [&'static str] {
    match section {
        Section::Headline => &["🤖", "🚀", "🔥", "✨", "💡", "🌟", "💻", "🧠", "🔮", "🌐"],
        Section::Welcome => &["👋", "✌️", "🙌", "👏", "🤝", "🎯", "🏆", "🌈"],
        Section::PromptTip => &["💬", "💭", "💡", "✍️", "📝", "⌨️", "🧮", "🧩"],
        Section::Tools => &["🧰", "🔧", "🛠️", "⚙️", "🔨", "🎨", "🔌", "💾"],
        Section::News => &["🌀", "📰", "📢", "📣", "📡", "📺", "📌", "🔔"],
        Section::Video => &["🎬", "📹", "🎥", "📽️", "🎞️", "📀", "🎤", "📺"],
        Section::Insights => &["🧠", "💭", "🔍", "💡", "⚡", "🤔", "📊", "📈"],
    }
}

/// Pick a section emoji from an injected random source, so tests can be
/// deterministic.
pub fn random_emoji<R: Rng + ?Sized>(section: Section, rng: &mut R) -> &'static str {
    emoji_pool(section).choose(rng).copied().unwrap_or("🤖")
}
