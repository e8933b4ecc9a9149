use newsletter_agent::dedup::{deduplicate_by_title, similarity, DEFAULT_THRESHOLD};
use newsletter_agent::history::{fingerprint, HistoryStore};
use newsletter_agent::relevance::is_ai_relevant;
use newsletter_agent::types::ContentCategory;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    title: String,
}

fn item(title: &str) -> Item {
    Item { title: title.to_string() }
}

#[test]
fn near_duplicate_news_titles_collapse() {
    let items = vec![
        item("OpenAI launches GPT-5"),
        item("OpenAI Launches GPT 5"),
        item("Anthropic publishes interpretability research"),
    ];

    let unique = deduplicate_by_title(items, |i| i.title.as_str(), DEFAULT_THRESHOLD);
    assert_eq!(unique.len(), 2);
    assert_eq!(unique[0].title, "OpenAI launches GPT-5");
}

#[test]
fn dedup_preserves_first_seen_order_and_is_idempotent() {
    let items = vec![
        item("Story one about robotics"),
        item("A completely different headline"),
        item("Third topic entirely"),
    ];

    let once = deduplicate_by_title(items.clone(), |i| i.title.as_str(), DEFAULT_THRESHOLD);
    assert_eq!(once, items);
    let twice = deduplicate_by_title(once.clone(), |i| i.title.as_str(), DEFAULT_THRESHOLD);
    assert_eq!(twice, once);
}

#[test]
fn similarity_is_case_insensitive() {
    assert_eq!(similarity("Hello World", "hello world"), 1.0);
}

#[test]
fn relevance_filter_blocks_substring_false_positives() {
    assert!(is_ai_relevant("Anthropic announces new Claude model", ""));
    assert!(is_ai_relevant("The rise of generative AI in medicine", ""));
    // "ai" inside other words must not match
    assert!(!is_ai_relevant("Mountain air quality improves", "rainfall statistics"));
}

#[test]
fn history_membership_works_before_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut history = HistoryStore::load(&path, 90);
    assert!(!history.was_published("Some headline"));

    history.record("Some headline", ContentCategory::News);
    assert!(history.was_published("Some headline"));
    // Normalization: case and surrounding whitespace are ignored
    assert!(history.was_published("  SOME HEADLINE  "));

    // Nothing durable until save
    assert!(!path.exists());
}

#[test]
fn history_round_trips_through_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut history = HistoryStore::load(&path, 90);
    history.record("A tool", ContentCategory::Tool);
    history.record("A video", ContentCategory::Video);
    history.save().unwrap();

    let reloaded = HistoryStore::load(&path, 90);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.was_published("A tool"));
    assert!(reloaded.was_published("a video"));
    assert!(reloaded.last_updated().is_some());
}

#[test]
fn corrupt_history_file_is_a_cold_start() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let history = HistoryStore::load(&path, 90);
    assert!(history.is_empty());
    assert!(!history.was_published("anything"));
}

#[test]
fn missing_history_file_is_a_cold_start() {
    let history = HistoryStore::load("/definitely/not/a/real/path.json", 90);
    assert!(history.is_empty());
}

#[test]
fn save_prunes_records_outside_retention_window() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    // Handcraft a file with one stale and one fresh record
    let stale_date = chrono::Utc::now() - chrono::Duration::days(120);
    let fresh_date = chrono::Utc::now() - chrono::Duration::days(5);
    let json = serde_json::json!({
        "published_titles": {
            fingerprint("Old story"): {
                "title": "Old story",
                "category": "news",
                "date": stale_date,
            },
            fingerprint("Recent story"): {
                "title": "Recent story",
                "category": "news",
                "date": fresh_date,
            },
        },
        "last_updated": null,
    });
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let mut history = HistoryStore::load(&path, 90);
    // Still suppressing until a save happens
    assert!(history.was_published("Old story"));

    history.save().unwrap();
    let reloaded = HistoryStore::load(&path, 90);
    assert!(!reloaded.was_published("Old story"));
    assert!(reloaded.was_published("Recent story"));
}

#[test]
fn fingerprint_is_stable_across_runs() {
    assert_eq!(fingerprint("Hello"), fingerprint("hello "));
    assert_eq!(fingerprint("x").len(), 64);
}
