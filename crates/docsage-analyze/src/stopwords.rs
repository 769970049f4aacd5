//! Stopword corpus, loaded once per process.
//!
//! English stopwords come from the `stop-words` crate, extended with a
//! small fixed set of generic words that carry no ranking signal.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// Generic words excluded beyond the standard English list.
const EXTRA_STOPWORDS: &[&str] = &[
    "may", "also", "many", "would", "could", "one", "two", "three", "four",
];

static STOPWORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut set: HashSet<String> = get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
    for word in EXTRA_STOPWORDS {
        set.insert((*word).to_string());
    }
    set
});

/// Check whether a lowercased token is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
