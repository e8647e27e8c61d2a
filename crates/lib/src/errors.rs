use thiserror::Error;

/// Errors returned by the recommendation client and its table providers.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("No table provider configured")]
    MissingProvider,
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the generative table service: {0}")]
    ServiceRequest(reqwest::Error),
    #[error("Generative table service returned {status}: {body}")]
    ServiceApi { status: u16, body: String },
    #[error("Failed to deserialize generative table response: {0}")]
    ServiceDeserialization(String),
    #[error("The generative table service returned no rows")]
    EmptyResponse,
}

impl RecommendError {
    /// Whether the call itself succeeded but produced nothing to display.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, RecommendError::EmptyResponse)
    }
}

/// Errors raised while turning raw form values into a `PreferenceSet`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Budget must be a whole number of MYR, got '{0}'")]
    InvalidBudget(String),
    #[error("Budget must be between {min} and {max} MYR, got {value}")]
    BudgetOutOfRange { value: i64, min: u32, max: u32 },
    #[error("Unknown activity '{0}'")]
    UnknownActivity(String),
}
