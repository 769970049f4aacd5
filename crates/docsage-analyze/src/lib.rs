//! DocSage Analyze — heuristic section detection, keyword relevance
//! scoring, and sentence-level excerpt refinement.
//!
//! All heuristics operate on plain line text; no font, size, or position
//! metadata is consulted.

pub mod keywords;
pub mod refine;
pub mod relevance;
pub mod sections;
pub mod sentences;
pub mod stopwords;
pub mod titles;

pub use keywords::extract_keywords;
pub use refine::refine_text;
pub use relevance::relevance_score;
pub use sections::extract_sections;
pub use titles::{detect_titles, TitleCandidate};
