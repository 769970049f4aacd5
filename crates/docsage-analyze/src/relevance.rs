//! Section relevance against a persona/job query.

use std::collections::{HashMap, HashSet};

use docsage_core::Section;

use crate::keywords::{extract_keywords, WORD_RE};
use crate::stopwords;

/// Per-word cap on content matches, so a single repeated term cannot
/// dominate the score.
const CONTENT_MATCH_CAP: usize = 5;

/// Score a section's relevance to the persona/job query, in [0, 1].
///
/// Title keyword matches weigh heaviest, content matches are capped per
/// word, and bounded length and diversity terms reward substantial,
/// varied sections over stubs.
pub fn relevance_score(section: &Section, query: &str) -> f64 {
    let query_keywords: HashMap<String, usize> = extract_keywords(query).into_iter().collect();
    let title_keywords: HashMap<String, usize> =
        extract_keywords(&section.title).into_iter().collect();
    let content_keywords: HashMap<String, usize> =
        extract_keywords(&section.content).into_iter().collect();

    let title_overlap: usize = query_keywords
        .keys()
        .filter_map(|word| title_keywords.get(word))
        .sum();
    let content_overlap: usize = query_keywords
        .keys()
        .filter_map(|word| content_keywords.get(word).map(|&c| c.min(CONTENT_MATCH_CAP)))
        .sum();

    let word_count = section.content.split_whitespace().count();
    let content_length = word_count.min(1000) as f64 / 1000.0;

    let lower = section.content.to_lowercase();
    let distinct: HashSet<&str> = WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 3 && !stopwords::is_stopword(w))
        .collect();
    let content_diversity = distinct.len().min(200) as f64 / 200.0;

    let raw = title_overlap as f64 * 3.0
        + content_overlap as f64 * 1.5
        + content_length
        + content_diversity;

    (raw / 20.0).min(1.0)
}
