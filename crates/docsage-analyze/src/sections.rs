//! Section assembly from detected titles and per-page text.

use docsage_core::Section;

use crate::titles::TitleCandidate;

/// Assemble one section per title candidate.
///
/// Content starts after the first line on the starting page whose trimmed
/// text equals the title, and runs to the next candidate's title line,
/// crossing page boundaries when the next candidate sits on a later page.
/// The final candidate collects only to the end of its own starting page;
/// trailing pages without a following title are never scanned. Sections
/// whose collected lines are all empty are dropped.
pub fn extract_sections(pages: &[String], titles: &[TitleCandidate]) -> Vec<Section> {
    let mut sections = Vec::new();

    for (i, candidate) in titles.iter().enumerate() {
        let next = titles.get(i + 1);
        let start_page = candidate.page_index;
        let mut content: Vec<String> = Vec::new();

        // Lines on the title's own page, from just past the title line.
        // Any later line equal to the title text is skipped, not collected.
        let mut title_found = false;
        for line in pages[start_page].split('\n') {
            let trimmed = line.trim();
            if trimmed == candidate.line {
                title_found = true;
                continue;
            }
            if title_found {
                if let Some(next) = next {
                    if next.page_index == start_page && trimmed == next.line {
                        break;
                    }
                }
                content.push(trimmed.to_string());
            }
        }

        // Intervening pages up to and including the next title's page.
        if let Some(next) = next {
            if next.page_index > start_page {
                for p in start_page + 1..=next.page_index {
                    for line in pages[p].split('\n') {
                        let trimmed = line.trim();
                        if p == next.page_index && trimmed == next.line {
                            break;
                        }
                        content.push(trimmed.to_string());
                    }
                }
            }
        }

        let joined = content
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            continue;
        }

        sections.push(Section {
            title: candidate.line.clone(),
            content: joined,
            page_number: (start_page + 1) as u32,
            document: String::new(),
            relevance: 0.0,
        });
    }

    sections
}
