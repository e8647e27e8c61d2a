//! # Generation Pipeline
//!
//! Runs one form submission through the stages of the form:
//!
//! ```text
//! AwaitingInput -> Validating -> Generating -> Displaying -> DisplaySuccess
//!                       \             \
//!                        +-------------+--> DisplayError
//! ```
//!
//! Validation happens before anything touches the uploaded document, so a
//! missing field never costs a PDF parse or a service call. Every failure is
//! returned as a [`FormError`] for the caller to render; nothing here panics
//! or retries.

use relaxgo::{
    serialize_preferences, PreferenceError, PreferenceSet, RecommendError, RecommendationClient,
    RecommendationResult, RequestedBudget,
};
use relaxgo_pdf::extract_text_from_pdf;
use relaxgo_report::{build_report, GeneratedReport, ReportError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

// --- Inputs ---

/// A file uploaded through the form. Lives only for the current request.
#[derive(Debug, Clone, Default)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// The raw values of one form submission, before validation.
#[derive(Debug, Clone, Default)]
pub struct SubmittedForm {
    pub tour_package: Option<UploadedDocument>,
    pub destination: String,
    pub travel_dates: String,
    /// The budget slider value as submitted; `None` means the default.
    pub budget: Option<String>,
    /// Activity labels in selection order.
    pub activities: Vec<String>,
    pub allergies: String,
    pub notes: String,
}

impl SubmittedForm {
    /// A copy of the submitted values for re-rendering the form. The uploaded
    /// document keeps its name but not its bytes.
    pub fn sticky_values(&self) -> SubmittedForm {
        SubmittedForm {
            tour_package: self.tour_package.as_ref().map(|doc| UploadedDocument {
                file_name: doc.file_name.clone(),
                content: Vec::new(),
            }),
            destination: self.destination.clone(),
            travel_dates: self.travel_dates.clone(),
            budget: self.budget.clone(),
            activities: self.activities.clone(),
            allergies: self.allergies.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Inputs the form refuses to generate without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    TourPackage,
    Destination,
    TravelDates,
    Activities,
    Allergies,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::TourPackage => "Tour package (PDF)",
            RequiredField::Destination => "Desired destination",
            RequiredField::TravelDates => "Travel dates",
            RequiredField::Activities => "Activities",
            RequiredField::Allergies => "Food allergies",
        }
    }
}

// --- Stages & Errors ---

/// The stages a submission moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    AwaitingInput,
    Validating,
    Generating,
    Displaying,
    DisplayError,
    DisplaySuccess,
}

/// Why a submission ended in `DisplayError`.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please fill in all the required information.")]
    MissingInput { missing: Vec<RequiredField> },
    #[error("{0}")]
    InvalidInput(#[from] PreferenceError),
    #[error("An error occurred: {0}")]
    UnparseableDocument(String),
    #[error("The uploaded PDF contains no readable text. Please upload a valid PDF file.")]
    UnreadableDocument,
    #[error("An error occurred: {0}")]
    ServiceCall(RecommendError),
    #[error("Failed to get a response. Please try again.")]
    EmptyResponse,
    #[error("An error occurred: {0}")]
    Report(#[from] ReportError),
}

impl From<RecommendError> for FormError {
    fn from(err: RecommendError) -> Self {
        if err.is_empty_response() {
            FormError::EmptyResponse
        } else {
            FormError::ServiceCall(err)
        }
    }
}

impl FormError {
    /// Missing inputs are a nudge; everything else is a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, FormError::MissingInput { .. })
    }

    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            FormError::MissingInput { missing } => missing,
            _ => &[],
        }
    }
}

// --- Outputs ---

/// A submission that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub document: UploadedDocument,
    pub preferences: PreferenceSet,
}

/// Everything the success page and the API responses need.
#[derive(Debug, Clone)]
pub struct GenerationSuccess {
    pub source_file_name: String,
    pub preferences: PreferenceSet,
    pub recommendation: RecommendationResult,
    pub report: GeneratedReport,
}

impl GenerationSuccess {
    /// The budget the user asked for; the recommended one is in `recommendation`.
    pub fn requested_budget(&self) -> RequestedBudget {
        self.preferences.requested_budget
    }
}

// --- Stage bookkeeping ---

struct StageLog {
    current: FormStage,
}

impl StageLog {
    fn new() -> Self {
        Self {
            current: FormStage::AwaitingInput,
        }
    }

    fn advance(&mut self, next: FormStage) {
        debug!(from = ?self.current, to = ?next, "Form stage transition");
        self.current = next;
    }

    fn halt(&mut self, err: FormError) -> FormError {
        warn!(stage = ?self.current, error = %err, "Form submission halted");
        self.advance(FormStage::DisplayError);
        err
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// --- Core Pipeline Logic ---

/// Checks presence and validity of every input. Touches no document bytes.
pub fn validate(form: SubmittedForm) -> Result<ValidatedSubmission, FormError> {
    let document = form.tour_package.filter(|doc| !doc.content.is_empty());

    let mut missing = Vec::new();
    if document.is_none() {
        missing.push(RequiredField::TourPackage);
    }
    if is_blank(&form.destination) {
        missing.push(RequiredField::Destination);
    }
    if is_blank(&form.travel_dates) {
        missing.push(RequiredField::TravelDates);
    }
    if form.activities.iter().all(|a| is_blank(a)) {
        missing.push(RequiredField::Activities);
    }
    if is_blank(&form.allergies) {
        missing.push(RequiredField::Allergies);
    }

    let Some(document) = document else {
        return Err(FormError::MissingInput { missing });
    };
    if !missing.is_empty() {
        return Err(FormError::MissingInput { missing });
    }

    let requested_budget = match form.budget.as_deref() {
        Some(raw) if !is_blank(raw) => raw.parse::<RequestedBudget>()?,
        _ => RequestedBudget::default(),
    };
    let activities =
        PreferenceSet::parse_activities(form.activities.iter().filter(|a| !is_blank(a)))?;

    Ok(ValidatedSubmission {
        document,
        preferences: PreferenceSet {
            destination: form.destination,
            travel_dates: form.travel_dates,
            requested_budget,
            activities,
            allergies: form.allergies,
            notes: form.notes,
        },
    })
}

/// Runs one submission from validation to a rendered report.
#[instrument(skip_all)]
pub async fn run_generation(
    recommender: &RecommendationClient,
    form: SubmittedForm,
) -> Result<GenerationSuccess, FormError> {
    let mut stage = StageLog::new();

    // --- 1. Validating ---
    stage.advance(FormStage::Validating);
    let ValidatedSubmission {
        document,
        preferences,
    } = validate(form).map_err(|e| stage.halt(e))?;

    let tour_package = extract_text_from_pdf(&document.content)
        .map_err(|e| stage.halt(FormError::UnparseableDocument(e.to_string())))?;
    if is_blank(&tour_package) {
        return Err(stage.halt(FormError::UnreadableDocument));
    }
    info!(
        file_name = %document.file_name,
        chars = tour_package.len(),
        "Tour package text extracted."
    );

    // --- 2. Generating ---
    stage.advance(FormStage::Generating);
    let serialized = serialize_preferences(&preferences);
    let recommendation = recommender
        .recommend(&tour_package, &serialized)
        .await
        .map_err(|e| stage.halt(e.into()))?;

    // --- 3. Displaying ---
    stage.advance(FormStage::Displaying);
    let report = build_report(&recommendation).map_err(|e| stage.halt(e.into()))?;

    stage.advance(FormStage::DisplaySuccess);
    info!(report = %report.file_name, "Recommendation ready.");

    Ok(GenerationSuccess {
        source_file_name: document.file_name,
        preferences,
        recommendation,
        report,
    })
}
