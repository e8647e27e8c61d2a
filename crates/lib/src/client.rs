//! # Recommendation Client
//!
//! Sends one tour package and one serialized preference string to the
//! recommendation table and maps the first generated row onto a
//! [`RecommendationResult`]. The call is made once; failures are returned to
//! the caller without retrying.

use crate::{
    errors::RecommendError,
    providers::table::{RowAddRequest, TableProvider},
    types::RecommendationResult,
};
use std::collections::HashMap;
use std::fmt;
use tracing::{info, instrument, warn};

/// Input column holding the extracted tour package text.
pub const TOUR_PACKAGE_COLUMN: &str = "tour_package";
/// Input column holding the serialized preferences.
pub const PREFERENCES_COLUMN: &str = "preferences";
pub const DEFAULT_TABLE_TYPE: &str = "action";
pub const DEFAULT_TABLE_ID: &str = "RelaxingGO";

/// A client that asks the recommendation table for travel advice.
pub struct RecommendationClient {
    provider: Box<dyn TableProvider>,
    table_type: String,
    table_id: String,
}

impl fmt::Debug for RecommendationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationClient")
            .field("provider", &self.provider)
            .field("table_type", &self.table_type)
            .field("table_id", &self.table_id)
            .finish()
    }
}

impl RecommendationClient {
    /// Requests a recommendation for one tour package.
    ///
    /// Returns [`RecommendError::EmptyResponse`] when the service answers
    /// successfully but generates no row.
    #[instrument(skip(self, tour_package, preferences), fields(table_id = %self.table_id))]
    pub async fn recommend(
        &self,
        tour_package: &str,
        preferences: &str,
    ) -> Result<RecommendationResult, RecommendError> {
        let request = RowAddRequest {
            table_id: self.table_id.clone(),
            data: vec![HashMap::from([
                (TOUR_PACKAGE_COLUMN.to_string(), tour_package.to_string()),
                (PREFERENCES_COLUMN.to_string(), preferences.to_string()),
            ])],
            stream: false,
        };

        info!(
            tour_package_chars = tour_package.len(),
            "Requesting recommendation from table '{}'", self.table_id
        );
        let response = self.provider.add_rows(&self.table_type, &request).await?;

        let Some(row) = response.rows.first() else {
            warn!("Recommendation table returned no rows.");
            return Err(RecommendError::EmptyResponse);
        };

        let result = RecommendationResult::from_columns(|column| row.column_text(column));
        info!(row_id = ?row.row_id, "Recommendation received.");
        Ok(result)
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn table_type(&self) -> &str {
        &self.table_type
    }
}

/// A builder for creating `RecommendationClient` instances.
#[derive(Default)]
pub struct RecommendationClientBuilder {
    provider: Option<Box<dyn TableProvider>>,
    table_type: Option<String>,
    table_id: Option<String>,
}

impl RecommendationClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table provider that performs the actual request.
    pub fn provider(mut self, provider: Box<dyn TableProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the table kind (defaults to `action`).
    pub fn table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = Some(table_type.into());
        self
    }

    /// Sets the table id (defaults to `RelaxingGO`).
    pub fn table_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }

    pub fn build(self) -> Result<RecommendationClient, RecommendError> {
        let provider = self.provider.ok_or(RecommendError::MissingProvider)?;
        Ok(RecommendationClient {
            provider,
            table_type: self
                .table_type
                .unwrap_or_else(|| DEFAULT_TABLE_TYPE.to_string()),
            table_id: self.table_id.unwrap_or_else(|| DEFAULT_TABLE_ID.to_string()),
        })
    }
}
