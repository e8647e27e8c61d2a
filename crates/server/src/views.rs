//! # HTML Views
//!
//! The single page of the application: the preference form, an alert banner
//! for warnings and errors, and the results with the report download link.
//! Rendered with `handlebars`, which escapes every interpolated value.

use crate::pipeline::{FormError, GenerationSuccess, SubmittedForm};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use handlebars::{Handlebars, RenderError};
use relaxgo::{Activity, RequestedBudget};
use serde::Serialize;

const PAGE_TEMPLATE: &str = "page";

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>RelaxGO - Travel Package Recommendation</title>
  <style>
    body { font-family: sans-serif; background: #f0f2f6; margin: 0; }
    main { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
    h1 { text-align: center; }
    form label { display: block; margin-top: 1rem; font-weight: bold; }
    input[type=text], textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
    .activities label { display: inline-block; font-weight: normal; margin-right: 1rem; }
    .alert { padding: 1rem; border-radius: 8px; margin: 1rem 0; }
    .alert.warning { background: #fff3cd; color: #664d03; }
    .alert.error { background: #f8d7da; color: #842029; }
    .section { background: #fff; border-radius: 10px; padding: 1rem 1.25rem; margin: 1rem 0; box-shadow: 0 2px 4px rgba(0,0,0,.08); }
    .section h3 { margin: 0 0 .5rem 0; }
    .section p { white-space: pre-wrap; margin: 0; }
    .download { display: inline-block; margin-top: 1rem; padding: .6rem 1.2rem; background: #4a7bd0; color: #fff; border-radius: 6px; text-decoration: none; }
  </style>
</head>
<body>
<main>
  <h1>RelaxGO</h1>
  <p>Upload a tour package and tell us about your trip. We will rate the package against your preferences.</p>

  {{#if alert}}
  <div class="alert {{alert.level}}" role="alert">
    <strong>{{alert.message}}</strong>
    {{#if alert.details}}
    <ul>{{#each alert.details}}<li>{{this}}</li>{{/each}}</ul>
    {{/if}}
  </div>
  {{/if}}

  <form method="post" action="/generate" enctype="multipart/form-data">
    <label for="tour_package">Tour package (PDF)</label>
    <input type="file" id="tour_package" name="tour_package" accept="application/pdf,.pdf">
    {{#if uploaded_file}}<small>Previously uploaded: {{uploaded_file}} (please attach it again)</small>{{/if}}

    <label for="destination">Desired destination</label>
    <input type="text" id="destination" name="destination" value="{{values.destination}}">

    <label for="travel_dates">Travel dates</label>
    <input type="text" id="travel_dates" name="travel_dates" value="{{values.travel_dates}}">

    <label for="budget">Budget (MYR)</label>
    <input type="range" id="budget" name="budget" min="{{budget_min}}" max="{{budget_max}}" step="100"
           value="{{values.budget}}" oninput="this.nextElementSibling.value = this.value">
    <output>{{values.budget}}</output>

    <label>Activities</label>
    <div class="activities">
      {{#each activities}}
      <label><input type="checkbox" name="activities" value="{{this.label}}"{{#if this.selected}} checked{{/if}}> {{this.label}}</label>
      {{/each}}
    </div>

    <label for="allergies">Food allergies</label>
    <input type="text" id="allergies" name="allergies" value="{{values.allergies}}">

    <label for="notes">Additional notes</label>
    <textarea id="notes" name="notes" rows="3">{{values.notes}}</textarea>

    <p><button type="submit">Get Recommendation</button></p>
  </form>

  {{#if result}}
  <h2>Your Recommendation</h2>
  <p>Requested budget: MYR {{result.requested_budget}}</p>
  {{#each result.sections}}
  <div class="section">
    <h3>{{this.icon}} {{this.heading}}</h3>
    <p>{{this.value}}</p>
  </div>
  {{/each}}
  <a class="download" href="{{{result.download.data_uri}}}" download="{{result.download.file_name}}">Download Report</a>
  {{/if}}
</main>
</body>
</html>
"##;

// --- Page Model ---

#[derive(Serialize)]
struct FormValues {
    destination: String,
    travel_dates: String,
    budget: String,
    allergies: String,
    notes: String,
}

#[derive(Serialize)]
struct ActivityOption {
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
    details: Vec<&'static str>,
}

#[derive(Serialize)]
struct SectionView {
    icon: &'static str,
    heading: &'static str,
    value: String,
}

#[derive(Serialize)]
struct DownloadView {
    file_name: String,
    data_uri: String,
}

#[derive(Serialize)]
struct ResultView {
    requested_budget: u32,
    sections: Vec<SectionView>,
    download: DownloadView,
}

#[derive(Serialize)]
struct PageModel {
    values: FormValues,
    activities: Vec<ActivityOption>,
    budget_min: u32,
    budget_max: u32,
    uploaded_file: Option<String>,
    alert: Option<Alert>,
    result: Option<ResultView>,
}

impl PageModel {
    /// The form pre-filled with what the user submitted.
    fn from_submission(form: &SubmittedForm) -> Self {
        let budget = form
            .budget
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| RequestedBudget::DEFAULT.to_string());

        Self {
            values: FormValues {
                destination: form.destination.clone(),
                travel_dates: form.travel_dates.clone(),
                budget,
                allergies: form.allergies.clone(),
                notes: form.notes.clone(),
            },
            activities: Activity::ALL
                .into_iter()
                .map(|activity| ActivityOption {
                    label: activity.label(),
                    selected: form
                        .activities
                        .iter()
                        .any(|a| a.trim() == activity.label()),
                })
                .collect(),
            budget_min: RequestedBudget::MIN,
            budget_max: RequestedBudget::MAX,
            uploaded_file: form
                .tour_package
                .as_ref()
                .map(|doc| doc.file_name.clone())
                .filter(|name| !name.is_empty()),
            alert: None,
            result: None,
        }
    }
}

fn result_view(success: &GenerationSuccess) -> ResultView {
    let report = &success.report;
    ResultView {
        requested_budget: success.requested_budget().value(),
        sections: success
            .recommendation
            .sections()
            .map(|(field, value)| SectionView {
                icon: field.icon(),
                heading: field.heading(),
                value: value.to_string(),
            })
            .collect(),
        download: DownloadView {
            file_name: report.file_name.clone(),
            data_uri: format!(
                "data:{};base64,{}",
                report.mime_type(),
                STANDARD.encode(&report.content)
            ),
        },
    }
}

// --- Views ---

/// Compiled page templates.
pub struct Views {
    handlebars: Handlebars<'static>,
}

impl Views {
    pub fn new() -> anyhow::Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PAGE_TEMPLATE, PAGE)?;
        Ok(Self { handlebars })
    }

    fn render(&self, model: &PageModel) -> Result<String, RenderError> {
        self.handlebars.render(PAGE_TEMPLATE, model)
    }

    /// The empty form, as first shown.
    pub fn render_form(&self) -> Result<String, RenderError> {
        self.render(&PageModel::from_submission(&SubmittedForm::default()))
    }

    /// The form with its values kept and the error shown above it.
    pub fn render_error(
        &self,
        form: &SubmittedForm,
        error: &FormError,
    ) -> Result<String, RenderError> {
        let mut model = PageModel::from_submission(form);
        model.alert = Some(Alert {
            level: if error.is_warning() { "warning" } else { "error" },
            message: error.to_string(),
            details: error.missing_fields().iter().map(|f| f.label()).collect(),
        });
        self.render(&model)
    }

    /// The form with its values kept and the recommendation below it.
    pub fn render_success(
        &self,
        form: &SubmittedForm,
        success: &GenerationSuccess,
    ) -> Result<String, RenderError> {
        let mut model = PageModel::from_submission(form);
        model.result = Some(result_view(success));
        self.render(&model)
    }
}
