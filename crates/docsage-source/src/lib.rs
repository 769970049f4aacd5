//! DocSage Source — page-text resolution for listed documents.
//!
//! The analysis core consumes plain text per page; producing that text from
//! raw document formats is this crate's concern. The filesystem
//! implementation reads pre-extracted text from a documents directory.

pub mod fs;

pub use fs::TextDirSource;

use docsage_core::Result;

/// Resolves a document identifier to its plain text, one entry per page,
/// in page order.
pub trait PageSource {
    fn pages(&self, filename: &str) -> Result<Vec<String>>;
}
