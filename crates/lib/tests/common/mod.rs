#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the `relaxgo` integration tests: tracing setup and
//! canned generative-table payloads.

use dotenvy::dotenv;
use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// Wraps `text` the way the service wraps one generated column.
pub fn column(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
    })
}

/// A successful row-add response with one row holding `columns`.
pub fn rows_response(columns: &[(&str, &str)]) -> Value {
    let columns: serde_json::Map<String, Value> = columns
        .iter()
        .map(|(name, text)| (name.to_string(), column(text)))
        .collect();
    json!({
        "object": "gen_table.completion.rows",
        "rows": [{"object": "gen_table.completion.chunks", "row_id": "row-1", "columns": columns}]
    })
}
