//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `relaxgo-server`
//! integration tests. It includes:
//!
//! - `TestApp`: A full application harness that spawns a real server on a random port.
//!   It comes in two flavours: `spawn()` wires the real HTTP table provider to an
//!   `httpmock::MockServer`, and `spawn_with_provider()` injects a `MockTableProvider`.
//! - `TourForm`: The preference form as a browser would submit it.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use relaxgo_server::{
    config::{self, AppConfig},
    router,
    state::{build_app_state, build_app_state_with_provider, AppState},
};
use relaxgo_test_utils::{helpers::generate_test_pdf, MockTableProvider};
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_PROJECT_ID: &str = "test-project";
pub const TEST_TABLE_ID: &str = "RelaxingGO";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// Writes a config file pointing the table service at `mock_server` and loads it.
fn load_test_config(mock_server: &MockServer) -> Result<(TempDir, AppConfig)> {
    let config_dir = tempdir()?;
    let config_path = config_dir.path().join("config.yml");
    let config_content = format!(
        r#"
port: 0
upload_limit_bytes: 1048576
api_key: "{TEST_API_KEY}"
project_id: "{TEST_PROJECT_ID}"
service:
  api_url: "{}"
  table_type: "action"
  table_id: "{TEST_TABLE_ID}"
  timeout_secs: 5
"#,
        mock_server.base_url()
    );
    let mut file = File::create(&config_path)?;
    file.write_all(config_content.as_bytes())?;

    let path = config_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("temp path is not UTF-8"))?;
    let config = config::get_config(Some(path))?;
    Ok((config_dir, config))
}

impl TestApp {
    /// Spawns the server with the real table provider, talking to an `httpmock` server.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();
        let (config_dir, config) = load_test_config(&mock_server)?;
        let app_state = build_app_state(config).await?;
        Self::spawn_with_state(app_state, mock_server, config_dir).await
    }

    /// Spawns the server with an injected in-memory table provider.
    pub async fn spawn_with_provider(provider: MockTableProvider) -> Result<Self> {
        let mock_server = MockServer::start();
        let (config_dir, config) = load_test_config(&mock_server)?;
        let app_state = build_app_state_with_provider(config, Box::new(provider))?;
        Self::spawn_with_state(app_state, mock_server, config_dir).await
    }

    async fn spawn_with_state(
        app_state: AppState,
        mock_server: MockServer,
        config_dir: TempDir,
    ) -> Result<Self> {
        // No `.env` here: its API_KEY would override the test config.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Form Helpers ---

/// The preference form as a browser submits it.
#[derive(Clone, Debug)]
pub struct TourForm {
    /// `(file name, bytes)` of the uploaded tour package, if any.
    pub tour_package: Option<(String, Vec<u8>)>,
    pub destination: String,
    pub travel_dates: String,
    pub budget: Option<String>,
    pub activities: Vec<String>,
    pub allergies: String,
    pub notes: String,
}

impl TourForm {
    /// The Tokyo trip, with a one-page tour package containing `pdf_text`.
    pub fn tokyo(pdf_text: &str) -> Result<Self> {
        Ok(Self {
            tour_package: Some(("tokyo_package.pdf".to_string(), generate_test_pdf(pdf_text)?)),
            destination: "Tokyo".to_string(),
            travel_dates: "Dec 20-25, 2024".to_string(),
            budget: Some("2000".to_string()),
            activities: vec!["Sightseeing".to_string(), "Food & Dining".to_string()],
            allergies: "peanuts".to_string(),
            notes: String::new(),
        })
    }

    /// Builds the multipart body, one part per field as a browser sends it.
    pub fn to_multipart(&self) -> Result<Form> {
        let mut form = Form::new()
            .text("destination", self.destination.clone())
            .text("travel_dates", self.travel_dates.clone())
            .text("allergies", self.allergies.clone())
            .text("notes", self.notes.clone());
        if let Some(budget) = &self.budget {
            form = form.text("budget", budget.clone());
        }
        for activity in &self.activities {
            form = form.text("activities", activity.clone());
        }
        if let Some((file_name, bytes)) = &self.tour_package {
            let part = Part::bytes(bytes.clone())
                .file_name(file_name.clone())
                .mime_str("application/pdf")?;
            form = form.part("tour_package", part);
        }
        Ok(form)
    }
}

/// The text the Tokyo tour package fixture carries.
pub const TOKYO_PACKAGE_TEXT: &str = "Tokyo Winter Escape: 5 days, 4 nights, MYR 1,899";

/// The exact preference blob the Tokyo form serializes to.
pub const TOKYO_PREFERENCES: &str = "Desired Destination: Tokyo, Travel Dates: Dec 20-25, 2024, Budget in MYR: 2000, Activities: Sightseeing, Food & Dining, Food Allergies: peanuts, Additional notes: ";
