//! Near-duplicate collapsing within one fetch cycle.
//!
//! Title similarity uses the Ratcliff/Obershelp matching-blocks ratio
//! (`2 * matches / (len(a) + len(b))`), which tolerates small wording
//! differences between outlets covering the same story.

pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// Case-insensitive similarity ratio between two strings in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b);
    2.0 * matches as f64 / total as f64
}

/// Total length of all matching blocks, found by locating the longest
/// common substring and recursing on the pieces either side of it.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, len) = longest_match(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // prev[j] holds the match length ending at (i-1, j-1).
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Drop items whose title is too similar to an already-accepted one.
/// First-seen order wins, so earlier (higher-priority) feeds keep their
/// version of a story. Quadratic, fine for double-digit candidate lists.
pub fn deduplicate_by_title<T>(
    items: Vec<T>,
    title: impl Fn(&T) -> &str,
    threshold: f64,
) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let is_dup = unique
            .iter()
            .any(|existing| similarity(title(&item), title(existing)) > threshold);
        if !is_dup {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_fully_similar() {
        assert_eq!(similarity("OpenAI launches GPT-5", "openai launches gpt-5"), 1.0);
    }

    #[test]
    fn near_duplicates_score_above_threshold() {
        let s = similarity("OpenAI launches GPT-5", "OpenAI Launches GPT 5");
        assert!(s > DEFAULT_THRESHOLD, "got {}", s);
    }

    #[test]
    fn unrelated_titles_score_low() {
        let s = similarity("OpenAI launches GPT-5", "Local team wins championship");
        assert!(s < DEFAULT_THRESHOLD, "got {}", s);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![
            "OpenAI launches GPT-5".to_string(),
            "OpenAI Launches GPT 5".to_string(),
            "Anthropic ships a new model".to_string(),
        ];
        let unique = deduplicate_by_title(items, |s| s.as_str(), DEFAULT_THRESHOLD);
        assert_eq!(
            unique,
            vec![
                "OpenAI launches GPT-5".to_string(),
                "Anthropic ships a new model".to_string()
            ]
        );
    }

    #[test]
    fn dedup_is_idempotent() {
        let items = vec![
            "First story about robots".to_string(),
            "Completely different headline".to_string(),
        ];
        let once = deduplicate_by_title(items, |s| s.as_str(), DEFAULT_THRESHOLD);
        let twice = deduplicate_by_title(once.clone(), |s| s.as_str(), DEFAULT_THRESHOLD);
        assert_eq!(once, twice);
    }
}
