//! Filesystem page source backed by a documents directory.

use std::path::{Path, PathBuf};

use docsage_core::{Error, Result};
use tracing::debug;

use crate::PageSource;

/// Page separator in extracted text files (the form feed `pdftotext` and
/// similar extractors emit between pages).
const PAGE_BREAK: char = '\u{0C}';

/// Reads per-page document text from a directory of extracted text files.
///
/// A listed filename resolves to `<root>/<filename>`; when that path does
/// not exist, the same stem with a `.txt` extension is tried, so an input
/// listing `guide.pdf` finds the extracted `guide.txt` next to it.
#[derive(Debug, Clone)]
pub struct TextDirSource {
    root: PathBuf,
}

impl TextDirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let direct = self.root.join(filename);
        if direct.is_file() {
            return Ok(direct);
        }
        let extracted = direct.with_extension("txt");
        if extracted.is_file() {
            debug!(
                "{} not found, using extracted text {}",
                direct.display(),
                extracted.display()
            );
            return Ok(extracted);
        }
        Err(Error::MissingSource(direct.display().to_string()))
    }
}

impl PageSource for TextDirSource {
    fn pages(&self, filename: &str) -> Result<Vec<String>> {
        let path = self.resolve(filename)?;
        let text = std::fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;

        // Reject content that reads as binary rather than extracted text.
        let control_chars = text
            .chars()
            .filter(|c| c.is_control() && !matches!(*c, '\n' | '\r' | '\t' | PAGE_BREAK))
            .count();
        if !text.is_empty() && control_chars > text.len() / 10 {
            return Err(Error::Parse(format!(
                "{}: binary content",
                path.display()
            )));
        }

        Ok(text.split(PAGE_BREAK).map(|p| p.to_string()).collect())
    }
}
