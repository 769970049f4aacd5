//! Title-candidate detection over page text lines.

/// A line flagged as a plausible section title, with the page it occurs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCandidate {
    /// Trimmed line text.
    pub line: String,
    /// 0-based page index the line was found on.
    pub page_index: usize,
}

/// True when every cased character is uppercase and at least one exists.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// True when every word starts with an uppercase character.
///
/// A digit-initial word fails this check, so "2024 Report" is not
/// title-case.
fn is_title_case(line: &str) -> bool {
    line.split_whitespace()
        .all(|w| w.chars().next().map(|c| c.is_uppercase()).unwrap_or(false))
}

/// Decide whether a trimmed, non-empty line reads as a section title.
///
/// `prev` and `next` are the neighboring raw lines, `None` at document
/// boundaries. The line must start uppercase, have at most 8 words, not
/// end with a period, and be isolated, all-uppercase, or title-case.
/// A heading that meets the shape rules but none of the latter three is
/// rejected; that is a known limitation of the line-shape heuristic, not
/// a case to special-case away.
pub fn is_title_line(line: &str, prev: Option<&str>, next: Option<&str>) -> bool {
    if line.is_empty() {
        return false;
    }
    let starts_upper = line
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false);
    if !starts_upper || line.split_whitespace().count() > 8 || line.ends_with('.') {
        return false;
    }

    let is_isolated = prev.map(|l| l.trim().is_empty()).unwrap_or(true)
        && next.map(|l| l.trim().is_empty()).unwrap_or(true);

    is_isolated || is_all_uppercase(line) || is_title_case(line)
}

/// Scan one page of text and return its title candidates in line order.
pub fn detect_titles(page_index: usize, text: &str) -> Vec<TitleCandidate> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut candidates = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let prev = if i == 0 { None } else { Some(lines[i - 1]) };
        let next = lines.get(i + 1).copied();
        if is_title_line(line, prev, next) {
            candidates.push(TitleCandidate {
                line: line.to_string(),
                page_index,
            });
        }
    }
    candidates
}
