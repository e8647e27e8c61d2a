use relaxgo::errors::RecommendError;
use relaxgo::providers::table::{
    ColumnCompletion, CompletionChoice, CompletionMessage, CompletionRow, RowAddRequest,
    RowAddResponse, TableProvider,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock Table Provider ---

/// What the mock answers with on every call.
#[derive(Clone, Debug)]
enum MockReply {
    Rows(Vec<CompletionRow>),
    ServiceError { status: u16, body: String },
}

#[derive(Clone, Debug)]
pub struct MockTableProvider {
    reply: Arc<Mutex<MockReply>>,
    calls: Arc<Mutex<Vec<(String, RowAddRequest)>>>,
}

impl MockTableProvider {
    /// A provider that returns zero rows until programmed otherwise.
    pub fn new() -> Self {
        Self {
            reply: Arc::new(Mutex::new(MockReply::Rows(Vec::new()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a single generated row with the given `(column, text)` pairs.
    pub fn with_row(columns: &[(&str, &str)]) -> Self {
        let provider = Self::new();
        provider.set_row(columns);
        provider
    }

    pub fn set_row(&self, columns: &[(&str, &str)]) {
        *self.reply.lock().unwrap() = MockReply::Rows(vec![completion_row(columns)]);
    }

    pub fn set_no_rows(&self) {
        *self.reply.lock().unwrap() = MockReply::Rows(Vec::new());
    }

    /// Makes every following call fail as if the service answered `status`.
    pub fn set_service_error(&self, status: u16, body: &str) {
        *self.reply.lock().unwrap() = MockReply::ServiceError {
            status,
            body: body.to_string(),
        };
    }

    /// Retrieves the recorded `(table_type, request)` calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, RowAddRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockTableProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableProvider for MockTableProvider {
    async fn add_rows(
        &self,
        table_type: &str,
        request: &RowAddRequest,
    ) -> Result<RowAddResponse, RecommendError> {
        self.calls
            .lock()
            .unwrap()
            .push((table_type.to_string(), request.clone()));

        match self.reply.lock().unwrap().clone() {
            MockReply::Rows(rows) => Ok(RowAddResponse { rows }),
            MockReply::ServiceError { status, body } => {
                Err(RecommendError::ServiceApi { status, body })
            }
        }
    }
}

/// Builds one generated row from `(column, text)` pairs.
pub fn completion_row(columns: &[(&str, &str)]) -> CompletionRow {
    let columns: HashMap<String, ColumnCompletion> = columns
        .iter()
        .map(|(name, text)| {
            (
                name.to_string(),
                ColumnCompletion {
                    choices: vec![CompletionChoice {
                        message: Some(CompletionMessage {
                            role: Some("assistant".to_string()),
                            content: text.to_string(),
                        }),
                    }],
                },
            )
        })
        .collect();
    CompletionRow {
        row_id: Some("mock-row".to_string()),
        columns,
    }
}

/// All seven recommendation columns, filled with recognisable values.
pub const FULL_ROW: [(&str, &str); 7] = [
    ("summary", "A five day Tokyo loop."),
    ("attraction", "Senso-ji and Shibuya Crossing"),
    ("food", "Sushi, ramen; avoid satay (peanuts)"),
    ("season", "Crisp winter, little rain"),
    ("budget", "Around MYR 1,900"),
    ("logistics", "7-day JR Pass and Suica card"),
    ("recommendation", "Book it"),
];

// --- Test-Specific Helpers ---
pub mod helpers {
    use anyhow::Result;
    use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

    /// Generates a simple, single-page PDF with the given text content.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        generate_test_pdf_pages(&[text])
    }

    /// Generates a PDF with one page per entry. An empty entry yields a page
    /// with no content stream at all. Text is shown in Helvetica with
    /// `WinAnsiEncoding`, so Latin-1 letters and typographic dashes are allowed.
    pub fn generate_test_pdf_pages(pages: &[&str]) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let font_name = Name(b"F1");

        // Page objects and their content streams follow the fixed objects.
        let page_ids: Vec<Ref> = (0..pages.len())
            .map(|i| Ref::new(4 + 2 * i as i32))
            .collect();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(pages.len() as i32);
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (text, page_id) in pages.iter().zip(&page_ids) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
            page.parent(page_tree_id);
            if !text.is_empty() {
                page.contents(content_id);
            }
            page.resources().fonts().pair(font_name, font_id);
            page.finish();

            if !text.is_empty() {
                let mut content = Content::new();
                content.begin_text();
                content.set_font(font_name, 14.0);
                content.next_line(108.0, 734.0);
                content.show(Str(&win_ansi_bytes(text)));
                content.end_text();
                pdf.stream(content_id, &content.finish());
            }
        }

        Ok(pdf.finish())
    }

    /// Encodes `text` as WinAnsi glyph codes. Characters outside the encoding become `?`.
    fn win_ansi_bytes(text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| match c {
                '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
                '\u{20AC}' => 0x80,
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201C}' => 0x93,
                '\u{201D}' => 0x94,
                '\u{2022}' => 0x95,
                '\u{2013}' => 0x96,
                '\u{2014}' => 0x97,
                _ => b'?',
            })
            .collect()
    }
}
