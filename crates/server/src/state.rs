//! # Application State
//!
//! The shared, read-only state handed to every request handler: the loaded
//! configuration, the recommendation client and the compiled HTML views.
//! Nothing in here is mutated after startup, so requests share no state.

use crate::{config::AppConfig, views::Views};
use relaxgo::{
    providers::table::{jamai::JamAiProvider, TableProvider},
    RecommendationClient, RecommendationClientBuilder,
};
use std::{sync::Arc, time::Duration};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The client used for the single generation call of each submission.
    pub recommender: Arc<RecommendationClient>,
    /// Compiled page templates.
    pub views: Arc<Views>,
}

/// Builds the shared application state from the configuration.
///
/// The generative-table provider is created once here and injected into the
/// recommendation client.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = JamAiProvider::new(
        config.service.api_url.clone(),
        config.api_key.clone(),
        config.project_id.clone(),
        Duration::from_secs(config.service.timeout_secs),
    )?;
    info!(
        api_url = %config.service.api_url,
        table_id = %config.service.table_id,
        "Initialized generative-table provider."
    );

    build_app_state_with_provider(config, Box::new(provider))
}

/// Builds the application state around an already constructed table provider.
pub fn build_app_state_with_provider(
    config: AppConfig,
    provider: Box<dyn TableProvider>,
) -> anyhow::Result<AppState> {
    let recommender = RecommendationClientBuilder::new()
        .provider(provider)
        .table_type(config.service.table_type.clone())
        .table_id(config.service.table_id.clone())
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        recommender: Arc::new(recommender),
        views: Arc::new(Views::new()?),
    })
}
