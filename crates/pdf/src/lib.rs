//! # relaxgo-pdf: Tour Package Text Extraction
//!
//! Pulls the readable text out of an uploaded tour-package PDF, one page at a
//! time, so it can be handed to the recommendation table. Glyph codes are
//! decoded through each font's encoding, so accented letters and typographic
//! dashes survive extraction.

use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::{debug, instrument, warn};

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum PdfExtractError {
    #[error("Failed to parse PDF content: {0}")]
    Parse(String),
}

// --- Data Structures ---

/// The text found on each page of a document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPages {
    pub pages: Vec<String>,
}

impl ExtractedPages {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages that produced any text at all.
    pub fn pages_with_text(&self) -> usize {
        self.pages.iter().filter(|p| !p.is_empty()).count()
    }

    /// Joins the non-empty pages with a newline.
    pub fn joined(&self) -> String {
        self.pages
            .iter()
            .filter(|page| !page.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// --- Extraction ---

/// Extracts the text of every page of a PDF, keeping empty pages as empty strings.
///
/// Layout whitespace around each page's text is trimmed. `pdf_extract` panics on
/// some malformed documents, so panics are reported as parse errors.
#[instrument(skip(pdf_data), fields(bytes = pdf_data.len()))]
pub fn extract_pages(pdf_data: &[u8]) -> Result<ExtractedPages, PdfExtractError> {
    let raw_pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(pdf_data)
    }))
    .map_err(|_| {
        warn!("PDF extraction panicked on a malformed document");
        PdfExtractError::Parse("malformed document".to_string())
    })?
    .map_err(|e| PdfExtractError::Parse(e.to_string()))?;

    let pages = raw_pages
        .into_iter()
        .enumerate()
        .map(|(page_num, raw)| {
            let page_text = raw.trim().to_string();
            debug!(page = page_num, chars = page_text.len(), "Extracted page text");
            page_text
        })
        .collect();

    Ok(ExtractedPages { pages })
}

/// Extracts the readable text of a PDF as one string.
///
/// Pages are joined with `\n` in document order; a page without text adds
/// nothing. An empty result is not an error here: callers decide whether a
/// document without text is acceptable.
pub fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, PdfExtractError> {
    extract_pages(pdf_data).map(|pages| pages.joined())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_skips_empty_pages() {
        let pages = ExtractedPages {
            pages: vec![
                "Day 1".to_string(),
                String::new(),
                "Day 2".to_string(),
            ],
        };
        assert_eq!(pages.joined(), "Day 1\nDay 2");
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.pages_with_text(), 2);
    }

    #[test]
    fn test_joined_of_no_text_is_empty() {
        let pages = ExtractedPages {
            pages: vec![String::new(), String::new()],
        };
        assert!(pages.joined().is_empty());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let result = extract_text_from_pdf(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfExtractError::Parse(_))));
    }
}
