//! Input and output models for an analysis run.
//!
//! Field names follow the JSON contract: the input lists documents plus a
//! persona and job-to-be-done; the output carries ranked sections and their
//! refined excerpts in matching index order.

use serde::{Deserialize, Serialize};

/// One document listed in the input file.
///
/// Extra fields (e.g. a display title) are tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub filename: String,
}

/// The persona the analysis is performed for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub role: String,
}

/// The task the persona needs the documents for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobToBeDone {
    #[serde(default)]
    pub task: String,
}

/// The full input description: documents, persona, job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
    #[serde(default)]
    pub persona: Persona,
    #[serde(default)]
    pub job_to_be_done: JobToBeDone,
}

/// A titled span of document content.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    /// Non-empty whitespace-joined content lines.
    pub content: String,
    /// 1-based page where the title line was found.
    pub page_number: u32,
    /// Source document filename; filled by the pipeline.
    pub document: String,
    /// Normalized relevance in [0, 1]; filled by the pipeline.
    pub relevance: f64,
}

/// Run metadata echoed into the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
}

/// One ranked section in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: u32,
    pub page_number: u32,
}

/// The refined excerpt for the section at the same rank index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

/// The full analysis result.
///
/// `extracted_sections[i]` and `subsection_analysis[i]` describe the same
/// underlying section, in relevance-descending rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults() {
        // Missing persona/job blocks fall back to empty strings.
        let input: AnalysisInput =
            serde_json::from_str(r#"{"documents": [{"filename": "a.pdf"}]}"#).unwrap();
        assert_eq!(input.documents.len(), 1);
        assert_eq!(input.documents[0].filename, "a.pdf");
        assert_eq!(input.persona.role, "");
        assert_eq!(input.job_to_be_done.task, "");
    }

    #[test]
    fn test_input_ignores_extra_fields() {
        let raw = r#"{
            "challenge_info": {"challenge_id": "round_1b"},
            "documents": [{"filename": "menu.pdf", "title": "Menu"}],
            "persona": {"role": "Nutritionist"},
            "job_to_be_done": {"task": "plan a vegetarian menu"}
        }"#;
        let input: AnalysisInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.persona.role, "Nutritionist");
        assert_eq!(input.job_to_be_done.task, "plan a vegetarian menu");
    }
}
