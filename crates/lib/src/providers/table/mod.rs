pub mod jamai;

use crate::errors::RecommendError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

// --- Wire structures shared by all table providers ---

/// A request to append rows to a generative table and run its generation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RowAddRequest {
    pub table_id: String,
    pub data: Vec<HashMap<String, String>>,
    pub stream: bool,
}

/// The generated rows returned for a [`RowAddRequest`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RowAddResponse {
    #[serde(default)]
    pub rows: Vec<CompletionRow>,
}

/// One generated row: a map from output column name to its completion.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CompletionRow {
    #[serde(default)]
    pub row_id: Option<String>,
    #[serde(default)]
    pub columns: HashMap<String, ColumnCompletion>,
}

impl CompletionRow {
    /// The text generated for `column`, if the column is present and has a choice.
    pub fn column_text(&self, column: &str) -> Option<String> {
        self.columns.get(column).and_then(ColumnCompletion::text)
    }
}

/// The chat completion that produced one column's value.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ColumnCompletion {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

impl ColumnCompletion {
    pub fn text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .map(|message| message.content.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CompletionMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// A trait for interacting with a generative-table service.
///
/// Implementations perform exactly one request per call. An empty `rows`
/// list is a valid response; deciding what it means is left to the caller.
#[async_trait]
pub trait TableProvider: Send + Sync + Debug + DynClone {
    /// Appends rows to the table of kind `table_type` and returns the generated rows.
    async fn add_rows(
        &self,
        table_type: &str,
        request: &RowAddRequest,
    ) -> Result<RowAddResponse, RecommendError>;
}

dyn_clone::clone_trait_object!(TableProvider);
