//! # Recommendation Types
//!
//! The fixed-shape result returned by the generative table. Every column is
//! optional; rendering code goes through [`RecommendationResult::display_value`]
//! so the `N/A` substitution happens in exactly one place.

use serde::{Deserialize, Serialize};

/// Text rendered for any column the service did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// One of the seven output columns of the recommendation table, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationField {
    Summary,
    Attraction,
    Food,
    Season,
    Budget,
    Logistics,
    Recommendation,
}

impl RecommendationField {
    pub const ALL: [RecommendationField; 7] = [
        RecommendationField::Summary,
        RecommendationField::Attraction,
        RecommendationField::Food,
        RecommendationField::Season,
        RecommendationField::Budget,
        RecommendationField::Logistics,
        RecommendationField::Recommendation,
    ];

    /// The column name used by the generative table.
    pub fn column_name(self) -> &'static str {
        match self {
            RecommendationField::Summary => "summary",
            RecommendationField::Attraction => "attraction",
            RecommendationField::Food => "food",
            RecommendationField::Season => "season",
            RecommendationField::Budget => "budget",
            RecommendationField::Logistics => "logistics",
            RecommendationField::Recommendation => "recommendation",
        }
    }

    /// The section heading shown on screen and in the report.
    pub fn heading(self) -> &'static str {
        match self {
            RecommendationField::Summary => "Summary",
            RecommendationField::Attraction => "Attraction",
            RecommendationField::Food => "Food",
            RecommendationField::Season => "Season",
            RecommendationField::Budget => "Budget",
            RecommendationField::Logistics => "Logistics",
            RecommendationField::Recommendation => "Recommendation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RecommendationField::Summary => "📝",
            RecommendationField::Attraction => "🏞️",
            RecommendationField::Food => "🍴",
            RecommendationField::Season => "🌦️",
            RecommendationField::Budget => "💰",
            RecommendationField::Logistics => "🚗",
            RecommendationField::Recommendation => "🧳",
        }
    }
}

/// A structured recommendation built from one row of the generative table.
///
/// `recommended_budget` is the service's `budget` column. It is unrelated to
/// the budget the user asked for, which stays on the `PreferenceSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub summary: Option<String>,
    pub attraction: Option<String>,
    pub food: Option<String>,
    pub season: Option<String>,
    pub recommended_budget: Option<String>,
    pub logistics: Option<String>,
    pub recommendation: Option<String>,
}

impl RecommendationResult {
    /// Builds a result by looking up each column through `lookup`.
    pub fn from_columns<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut result = Self::default();
        for field in RecommendationField::ALL {
            *result.slot_mut(field) = lookup(field.column_name());
        }
        result
    }

    pub fn get(&self, field: RecommendationField) -> Option<&str> {
        match field {
            RecommendationField::Summary => self.summary.as_deref(),
            RecommendationField::Attraction => self.attraction.as_deref(),
            RecommendationField::Food => self.food.as_deref(),
            RecommendationField::Season => self.season.as_deref(),
            RecommendationField::Budget => self.recommended_budget.as_deref(),
            RecommendationField::Logistics => self.logistics.as_deref(),
            RecommendationField::Recommendation => self.recommendation.as_deref(),
        }
    }

    /// The value to show for `field`, or [`NOT_AVAILABLE`] when absent.
    pub fn display_value(&self, field: RecommendationField) -> &str {
        self.get(field).unwrap_or(NOT_AVAILABLE)
    }

    /// All seven fields with their display values, in report order.
    pub fn sections(&self) -> impl Iterator<Item = (RecommendationField, &str)> + '_ {
        RecommendationField::ALL
            .into_iter()
            .map(move |field| (field, self.display_value(field)))
    }

    fn slot_mut(&mut self, field: RecommendationField) -> &mut Option<String> {
        match field {
            RecommendationField::Summary => &mut self.summary,
            RecommendationField::Attraction => &mut self.attraction,
            RecommendationField::Food => &mut self.food,
            RecommendationField::Season => &mut self.season,
            RecommendationField::Budget => &mut self.recommended_budget,
            RecommendationField::Logistics => &mut self.logistics,
            RecommendationField::Recommendation => &mut self.recommendation,
        }
    }
}
