//! # RelaxGO Core
//!
//! This crate holds the domain model of the travel recommendation form and the
//! client that turns a tour package plus a set of preferences into a
//! structured recommendation, using a hosted generative-table service.
//!
//! PDF extraction and report rendering live in their own crates
//! (`relaxgo-pdf` and `relaxgo-report`); the HTTP surface lives in
//! `relaxgo-server`.

pub mod client;
pub mod errors;
pub mod filename;
pub mod preferences;
pub mod providers;
pub mod types;

pub use client::{RecommendationClient, RecommendationClientBuilder};
pub use errors::{PreferenceError, RecommendError};
pub use filename::generate_report_filename;
pub use preferences::{serialize_preferences, Activity, PreferenceSet, RequestedBudget};
pub use types::{RecommendationField, RecommendationResult, NOT_AVAILABLE};
