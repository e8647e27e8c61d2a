//! # Travel Preferences
//!
//! The preference fields collected by the form and their serialization into
//! the single text blob the recommendation table expects as input.

use crate::errors::PreferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed catalog of activities a traveller can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Sightseeing")]
    Sightseeing,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Adventure Sports")]
    AdventureSports,
    #[serde(rename = "Relaxation")]
    Relaxation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Cultural Experiences")]
    CulturalExperiences,
    #[serde(rename = "Hiking")]
    Hiking,
    #[serde(rename = "Nightlife")]
    Nightlife,
    #[serde(rename = "Photography")]
    Photography,
    #[serde(rename = "Wellness Retreats")]
    WellnessRetreats,
    #[serde(rename = "Historical Tours")]
    HistoricalTours,
}

impl Activity {
    /// Every activity, in the order the form lists them.
    pub const ALL: [Activity; 11] = [
        Activity::Sightseeing,
        Activity::FoodAndDining,
        Activity::AdventureSports,
        Activity::Relaxation,
        Activity::Shopping,
        Activity::CulturalExperiences,
        Activity::Hiking,
        Activity::Nightlife,
        Activity::Photography,
        Activity::WellnessRetreats,
        Activity::HistoricalTours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::Sightseeing => "Sightseeing",
            Activity::FoodAndDining => "Food & Dining",
            Activity::AdventureSports => "Adventure Sports",
            Activity::Relaxation => "Relaxation",
            Activity::Shopping => "Shopping",
            Activity::CulturalExperiences => "Cultural Experiences",
            Activity::Hiking => "Hiking",
            Activity::Nightlife => "Nightlife",
            Activity::Photography => "Photography",
            Activity::WellnessRetreats => "Wellness Retreats",
            Activity::HistoricalTours => "Historical Tours",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Activity {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Activity::ALL
            .into_iter()
            .find(|activity| activity.label() == wanted)
            .ok_or_else(|| PreferenceError::UnknownActivity(s.to_string()))
    }
}

/// The budget the user asked for, in MYR, within the range the form allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct RequestedBudget(u32);

impl RequestedBudget {
    pub const MIN: u32 = 500;
    pub const MAX: u32 = 10_000;
    pub const DEFAULT: u32 = 2_000;

    pub fn new(value: i64) -> Result<Self, PreferenceError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(PreferenceError::BudgetOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for RequestedBudget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for RequestedBudget {
    type Error = PreferenceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequestedBudget> for u32 {
    fn from(budget: RequestedBudget) -> Self {
        budget.0
    }
}

impl FromStr for RequestedBudget {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| PreferenceError::InvalidBudget(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for RequestedBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The traveller's preferences as captured by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub destination: String,
    pub travel_dates: String,
    pub requested_budget: RequestedBudget,
    /// Selected activities, in selection order and without repeats.
    pub activities: Vec<Activity>,
    pub allergies: String,
    pub notes: String,
}

impl PreferenceSet {
    /// Parses activity labels, keeping the first occurrence of each.
    pub fn parse_activities<I, S>(labels: I) -> Result<Vec<Activity>, PreferenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut activities = Vec::new();
        for label in labels {
            let activity: Activity = label.as_ref().parse()?;
            if !activities.contains(&activity) {
                activities.push(activity);
            }
        }
        Ok(activities)
    }
}

/// Flattens the preferences into the labelled, comma-separated text sent to
/// the recommendation table. Delimiters inside values are not escaped.
pub fn serialize_preferences(preferences: &PreferenceSet) -> String {
    let activities = preferences
        .activities
        .iter()
        .map(|activity| activity.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Desired Destination: {}, Travel Dates: {}, Budget in MYR: {}, Activities: {}, Food Allergies: {}, Additional notes: {}",
        preferences.destination,
        preferences.travel_dates,
        preferences.requested_budget,
        activities,
        preferences.allergies,
        preferences.notes
    )
}

impl fmt::Display for PreferenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_preferences(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> PreferenceSet {
        PreferenceSet {
            destination: "Tokyo".to_string(),
            travel_dates: "Dec 20-25, 2024".to_string(),
            requested_budget: RequestedBudget::new(2000).unwrap(),
            activities: vec![Activity::Sightseeing, Activity::FoodAndDining],
            allergies: "peanuts".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_serialize_tokyo_preferences() {
        assert_eq!(
            serialize_preferences(&tokyo()),
            "Desired Destination: Tokyo, Travel Dates: Dec 20-25, 2024, Budget in MYR: 2000, Activities: Sightseeing, Food & Dining, Food Allergies: peanuts, Additional notes: "
        );
    }

    #[test]
    fn test_serialization_is_deterministic_and_keeps_selection_order() {
        let mut prefs = tokyo();
        prefs.activities = vec![
            Activity::Hiking,
            Activity::Sightseeing,
            Activity::Nightlife,
        ];

        let first = serialize_preferences(&prefs);
        let second = serialize_preferences(&prefs.clone());
        assert_eq!(first, second);
        assert!(first.contains("Activities: Hiking, Sightseeing, Nightlife, Food Allergies"));
    }

    #[test]
    fn test_parse_activities_dedupes_and_rejects_unknown() {
        let parsed =
            PreferenceSet::parse_activities(["Shopping", "Food & Dining", "Shopping"]).unwrap();
        assert_eq!(parsed, vec![Activity::Shopping, Activity::FoodAndDining]);

        let err = PreferenceSet::parse_activities(["Skydiving"]).unwrap_err();
        assert_eq!(err, PreferenceError::UnknownActivity("Skydiving".to_string()));
    }

    #[test]
    fn test_requested_budget_bounds() {
        assert_eq!("500".parse::<RequestedBudget>().unwrap().value(), 500);
        assert_eq!(" 10000 ".parse::<RequestedBudget>().unwrap().value(), 10_000);
        assert!(matches!(
            "499".parse::<RequestedBudget>(),
            Err(PreferenceError::BudgetOutOfRange { value: 499, .. })
        ));
        assert!(matches!(
            "lots".parse::<RequestedBudget>(),
            Err(PreferenceError::InvalidBudget(_))
        ));
        assert_eq!(RequestedBudget::default().value(), 2000);
    }

    #[test]
    fn test_activity_serde_uses_labels() {
        let json = serde_json::to_string(&Activity::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");
    }
}
