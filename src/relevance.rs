use crate::config::{AI_TERMS, AMBIGUOUS_TERMS};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Word-boundary guards compiled once for the short terms that substring
// matching gets wrong ("ai" inside "maintain", "claude" inside a surname).
static BOUNDARY_RES: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    AMBIGUOUS_TERMS
        .iter()
        .map(|term| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(term))).expect("valid regex");
            (*term, re)
        })
        .collect()
});

/// Decide whether an article genuinely concerns AI. Longer terms match as
/// substrings; ambiguous short terms must match on word boundaries.
pub fn is_ai_relevant(title: &str, summary: &str) -> bool {
    let text = format!("{} {}", title, summary).to_lowercase();

    for term in AI_TERMS {
        if !text.contains(term) {
            continue;
        }
        match BOUNDARY_RES.get(term) {
            Some(re) => {
                if re.is_match(&text) {
                    return true;
                }
            }
            None => return true,
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_long_terms_as_substrings() {
        assert!(is_ai_relevant("OpenAI ships a new model", ""));
        assert!(is_ai_relevant("Advances in machine learning", "benchmarks"));
    }

    #[test]
    fn short_terms_need_word_boundaries() {
        assert!(!is_ai_relevant("How to maintain your garden", "pruning tips"));
        assert!(is_ai_relevant("What AI means for artists", ""));
    }

    #[test]
    fn irrelevant_articles_rejected() {
        assert!(!is_ai_relevant("Local team wins championship", "final score 3-1"));
    }
}
