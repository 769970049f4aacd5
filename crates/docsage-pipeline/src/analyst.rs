//! Document analyst — coordinates sourcing, section analysis, and ranking.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use docsage_analyze::{detect_titles, extract_sections, refine_text, relevance_score};
use docsage_core::{
    AnalysisInput, AnalysisOutput, ExtractedSection, Metadata, Section, SubsectionAnalysis,
};
use docsage_source::PageSource;

/// Number of top-ranked sections retained in the output.
pub const TOP_SECTIONS: usize = 5;

/// Coordinates the full analysis run over all input documents.
pub struct DocumentAnalyst<S> {
    source: S,
}

impl<S: PageSource> DocumentAnalyst<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Analyze all listed documents and rank their sections against the
    /// persona/job query.
    ///
    /// Documents whose text cannot be resolved are skipped with a
    /// diagnostic; their filenames still appear in the output metadata.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisOutput {
        let started = Instant::now();

        let persona = input.persona.role.as_str();
        let job = input.job_to_be_done.task.as_str();
        let query = format!("{} {}", persona, job);

        let mut all_sections: Vec<Section> = Vec::new();

        for doc in &input.documents {
            let pages = match self.source.pages(&doc.filename) {
                Ok(pages) => pages,
                Err(e) => {
                    warn!("Skipping {}: {}", doc.filename, e);
                    continue;
                }
            };

            info!("Processing document: {}", doc.filename);
            let mut sections = extract_document_sections(&pages);
            debug!("{}: {} sections detected", doc.filename, sections.len());

            for section in &mut sections {
                section.document = doc.filename.clone();
                section.relevance = relevance_score(section, &query);
            }
            all_sections.extend(sections);
        }

        // Stable sort keeps discovery order among equal scores.
        all_sections.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        all_sections.truncate(TOP_SECTIONS);

        let mut extracted_sections = Vec::with_capacity(all_sections.len());
        let mut subsection_analysis = Vec::with_capacity(all_sections.len());
        for (rank, section) in all_sections.iter().enumerate() {
            extracted_sections.push(ExtractedSection {
                document: section.document.clone(),
                section_title: section.title.clone(),
                importance_rank: (rank + 1) as u32,
                page_number: section.page_number,
            });
            subsection_analysis.push(SubsectionAnalysis {
                document: section.document.clone(),
                refined_text: refine_text(&section.content),
                page_number: section.page_number,
            });
        }

        info!(
            "Analysis completed in {:.2}s",
            started.elapsed().as_secs_f64()
        );

        AnalysisOutput {
            metadata: Metadata {
                input_documents: input
                    .documents
                    .iter()
                    .map(|d| d.filename.clone())
                    .collect(),
                persona: persona.to_string(),
                job_to_be_done: job.to_string(),
                processing_timestamp: Utc::now().to_rfc3339(),
            },
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// Detect titles per page, then assemble sections for one document.
fn extract_document_sections(pages: &[String]) -> Vec<Section> {
    let mut titles = Vec::new();
    for (page_index, text) in pages.iter().enumerate() {
        titles.extend(detect_titles(page_index, text));
    }
    extract_sections(pages, &titles)
}
