//! Excerpt refinement — sentence importance scoring and selection.

use crate::keywords::extract_keywords;
use crate::sentences::split_sentences;

/// Sentences kept in a refined excerpt.
const MAX_SENTENCES: usize = 5;

/// Words that flag an emphasized, information-dense sentence.
const INFO_INDICATORS: &[&str] = &[
    "important",
    "key",
    "significant",
    "essential",
    "must",
    "should",
    "recommend",
    "popular",
    "best",
    "top",
    "famous",
];

/// Compress section content into its most informative sentences.
///
/// Content with five or fewer sentences is returned unchanged. Otherwise
/// each sentence is scored on keyword density, lead/trail position,
/// length, and emphasis indicators; the five best are re-joined in their
/// original order.
pub fn refine_text(content: &str) -> String {
    let sentences = split_sentences(content);
    if sentences.len() <= MAX_SENTENCES {
        return content.to_string();
    }

    let total = sentences.len();
    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| (i, sentence_score(sentence, i, total)))
        .collect();

    // Stable sort: equal scores keep original sentence order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut selected: Vec<usize> = scored
        .iter()
        .take(MAX_SENTENCES)
        .map(|(i, _)| *i)
        .collect();
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence_score(sentence: &str, index: usize, total: usize) -> f64 {
    let keyword_count: usize = extract_keywords(sentence).iter().map(|(_, c)| c).sum();

    // Lead sentences first, then the trailing window; the lead branch wins
    // when the two overlap in short texts.
    let position_score = if index < 3 {
        1.0 - index as f64 * 0.2
    } else if index >= total - 3 {
        0.6 + (index - (total - 3)) as f64 * 0.2
    } else {
        0.0
    };

    // Peaks around 20 words, flat to 49, declining past 50.
    let words = sentence.split_whitespace().count();
    let length_score = if words < 50 {
        (words as f64 / 20.0).min(1.0)
    } else {
        2.0 - words as f64 / 50.0
    };
    let length_score = length_score.clamp(0.0, 1.0);

    let lower = sentence.to_lowercase();
    let indicator_score = if INFO_INDICATORS.iter().any(|w| lower.contains(w)) {
        0.5
    } else {
        0.0
    };

    keyword_count as f64 * 0.4
        + position_score * 0.3
        + length_score * 0.2
        + indicator_score * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_returned_unchanged() {
        let content = "First point here. Second point there. Third point anywhere. \
                       Fourth point somewhere. Fifth point nowhere.";
        assert_eq!(refine_text(content), content);
    }

    #[test]
    fn test_single_sentence_unchanged() {
        let content = "Only one sentence without much to refine.";
        assert_eq!(refine_text(content), content);
    }

    #[test]
    fn test_long_content_keeps_five_sentences() {
        let content = "The valley trail opens at dawn for hikers. Local guides recommend \
                       the eastern approach in spring. Wildflowers cover the lower meadows \
                       by late April. The ranger station stocks trail maps and permits. \
                       Afternoon storms build quickly over the ridge. Campsites near the \
                       river require a reservation. The summit viewpoint is the most \
                       popular photo stop.";
        let refined = refine_text(content);
        assert_ne!(refined, content);
        assert_eq!(split_sentences(&refined).len(), 5);
    }

    #[test]
    fn test_selection_preserves_original_order() {
        let content = "Alpha ridge rises first. Bravo creek follows second. Charlie \
                       meadow spreads third. Delta grove stands fourth. Echo cliff \
                       looms fifth. Foxtrot lake rests sixth. Golf summit ends seventh.";
        let refined = refine_text(content);
        let original: Vec<&str> = split_sentences(content);
        let kept: Vec<&str> = split_sentences(&refined);

        // Kept sentences appear in the same relative order as the source.
        let mut positions = Vec::new();
        for sentence in &kept {
            positions.push(original.iter().position(|s| s == sentence).unwrap());
        }
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_indicator_raises_score() {
        // Same keyword count, position, and length; only the emphasis
        // word differs.
        let plain = "The granite overlook shadows the waterfall canyon sunrise.";
        let flagged = "The famous overlook shadows the waterfall canyon sunrise.";
        assert!(sentence_score(flagged, 4, 10) > sentence_score(plain, 4, 10));
    }

    #[test]
    fn test_position_favors_lead_and_tail() {
        let s = "The granite overlook shadows the waterfall canyon sunrise.";
        let lead = sentence_score(s, 0, 10);
        let middle = sentence_score(s, 5, 10);
        let tail = sentence_score(s, 9, 10);
        assert!(lead > middle);
        assert!(tail > middle);
    }

    #[test]
    fn test_length_score_tapers() {
        // Stopword-only sentences keep keyword count at zero, so only the
        // length term moves.
        let short = "the ".repeat(3);
        let ideal = "the ".repeat(20);
        let overlong = "the ".repeat(120);
        assert!(sentence_score(&ideal, 5, 20) > sentence_score(&short, 5, 20));
        assert!(sentence_score(&ideal, 5, 20) > sentence_score(&overlong, 5, 20));
    }
}
