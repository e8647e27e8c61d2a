//! # relaxgo-report: Downloadable Recommendation Report
//!
//! Renders a [`RecommendationResult`] as a Word document held entirely in
//! memory: one title heading, then a heading and a paragraph per field.

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use relaxgo::{
    filename::{generate_report_filename, REPORT_EXTENSION},
    RecommendationResult,
};
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, instrument};

/// MIME type of the generated document.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Top-level heading of every report.
pub const REPORT_TITLE: &str = "Ratings";

const TITLE_STYLE: &str = "Heading1";
const SECTION_STYLE: &str = "Heading2";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to pack DOCX report: {0}")]
    Pack(String),
}

/// A rendered report ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl GeneratedReport {
    pub fn mime_type(&self) -> &'static str {
        DOCX_MIME_TYPE
    }
}

fn heading(text: &str, style: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text)).style(style)
}

/// Renders the report document and returns its bytes.
pub fn render_docx(result: &RecommendationResult) -> Result<Vec<u8>, ReportError> {
    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_style(
            Style::new(SECTION_STYLE, StyleType::Paragraph)
                .name("Heading 2")
                .size(26)
                .bold(),
        )
        .add_paragraph(heading(REPORT_TITLE, TITLE_STYLE));

    for (field, value) in result.sections() {
        docx = docx
            .add_paragraph(heading(field.heading(), SECTION_STYLE))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(value)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ReportError::Pack(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Renders the report and pairs it with a fresh random filename.
#[instrument(skip(result))]
pub fn build_report(result: &RecommendationResult) -> Result<GeneratedReport, ReportError> {
    let content = render_docx(result)?;
    let file_name = generate_report_filename(REPORT_EXTENSION);
    debug!(%file_name, bytes = content.len(), "Report rendered");
    Ok(GeneratedReport { file_name, content })
}
