use crate::{
    errors::RecommendError,
    providers::table::{RowAddRequest, RowAddResponse, TableProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::fmt::{self, Debug};
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the hosted generative-table service.
pub const DEFAULT_API_URL: &str = "https://api.jamaibase.com";

/// A provider for the JamAI Base generative-table REST API.
#[derive(Clone)]
pub struct JamAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    project_id: Option<String>,
}

impl Debug for JamAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JamAiProvider")
            .field("api_url", &self.api_url)
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl JamAiProvider {
    /// Creates a new `JamAiProvider`.
    ///
    /// Missing credentials are not rejected here; the service answers such
    /// requests with an authentication error, which is reported to the caller.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        project_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RecommendError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(RecommendError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            project_id: project_id.filter(|p| !p.is_empty()),
        })
    }

    fn rows_add_url(&self, table_type: &str) -> String {
        format!("{}/api/v1/gen_tables/{table_type}/rows/add", self.api_url)
    }
}

#[async_trait]
impl TableProvider for JamAiProvider {
    async fn add_rows(
        &self,
        table_type: &str,
        request: &RowAddRequest,
    ) -> Result<RowAddResponse, RecommendError> {
        let url = self.rows_add_url(table_type);
        debug!(%url, table_id = %request.table_id, rows = request.data.len(), "Adding rows");

        let mut request_builder = self.client.post(&url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }
        if let Some(project_id) = &self.project_id {
            request_builder = request_builder.header("X-PROJECT-ID", project_id);
        }

        let response = request_builder
            .json(request)
            .send()
            .await
            .map_err(RecommendError::ServiceRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(RecommendError::ServiceApi {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(RecommendError::ServiceRequest)?;
        serde_json::from_str(&body).map_err(|e| RecommendError::ServiceDeserialization(e.to_string()))
    }
}

/// The body of a failed response, or a note saying why it could not be read.
fn error_body<E: fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to read the error response body");
        format!("<unreadable response body: {e}>")
    })
}
