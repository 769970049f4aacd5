//! DocSage Core — shared models, error taxonomy, configuration.

pub mod config;
pub mod error;
pub mod model;

pub use config::DocsageConfig;
pub use error::{Error, Result};
pub use model::{
    AnalysisInput, AnalysisOutput, DocumentRef, ExtractedSection, JobToBeDone, Metadata, Persona,
    Section, SubsectionAnalysis,
};
