//! Keyword-frequency tallies over arbitrary text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords;

/// Maximum number of keyword pairs returned per text span.
pub const MAX_KEYWORDS: usize = 20;

pub(crate) static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Return the most frequent qualifying tokens of `text` with their counts.
///
/// Tokens are lowercased word-boundary matches; stopwords and tokens of
/// two characters or fewer are dropped. At most [`MAX_KEYWORDS`] pairs are
/// returned, counts descending, ties in first-encountered order.
pub fn extract_keywords(text: &str) -> Vec<(String, usize)> {
    let lower = text.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for m in WORD_RE.find_iter(&lower) {
        let token = m.as_str();
        if token.chars().count() <= 2 || stopwords::is_stopword(token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| (t.to_string(), counts[t]))
        .collect();
    // Stable sort: equal counts keep first-encountered order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_KEYWORDS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranking() {
        let ranked = extract_keywords("pasta pasta pasta sauce sauce basil");
        assert_eq!(
            ranked,
            vec![
                ("pasta".to_string(), 3),
                ("sauce".to_string(), 2),
                ("basil".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let ranked = extract_keywords("alpha beta alpha beta gamma");
        assert_eq!(
            ranked,
            vec![
                ("alpha".to_string(), 2),
                ("beta".to_string(), 2),
                ("gamma".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_filters_stopwords_and_short_tokens() {
        let ranked = extract_keywords("The vegetarian menu is on a laminated card, ok?");
        let tokens: Vec<&str> = ranked.iter().map(|(t, _)| t.as_str()).collect();
        assert!(tokens.contains(&"vegetarian"));
        assert!(tokens.contains(&"menu"));
        assert!(tokens.contains(&"laminated"));
        assert!(!tokens.contains(&"the"));
        assert!(!tokens.contains(&"is"));
        assert!(!tokens.contains(&"ok"));
    }

    #[test]
    fn test_lowercases_tokens() {
        let ranked = extract_keywords("Pasta PASTA pasta");
        assert_eq!(ranked, vec![("pasta".to_string(), 3)]);
    }

    #[test]
    fn test_caps_at_twenty_pairs() {
        let text: String = (0..30).map(|i| format!("word{} ", i)).collect();
        let ranked = extract_keywords(&text);
        assert_eq!(ranked.len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_counts_never_ascend() {
        let ranked = extract_keywords(
            "carrot carrot carrot onion onion leek leek leek leek celery",
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
