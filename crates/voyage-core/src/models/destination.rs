//! Destination model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::DestinationUpdate;
use crate::error::{ItineraryError, Result};

/// One planned trip segment.
///
/// The persisted form is a JSON object with exactly these six fields. Extra
/// keys in a file are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// City name, compared case-insensitively when used as a lookup key
    pub city: String,

    /// Country the city belongs to
    pub country: String,

    /// First day of the stay (`YYYY-MM-DD`)
    pub start_date: String,

    /// Last day of the stay (`YYYY-MM-DD`)
    pub end_date: String,

    /// Budget for the stay, currency-agnostic
    pub budget: f64,

    /// Planned activities in the order given
    pub activities: Vec<String>,
}

impl Destination {
    /// Creates a destination storing every field verbatim.
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        budget: f64,
        activities: Vec<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            budget,
            activities,
        }
    }

    /// Applies a partial update in place.
    ///
    /// Each field is overwritten only when the update carries a value for it.
    /// Empty strings and empty activity lists count as "keep the current
    /// value".
    pub fn apply_update(&mut self, update: DestinationUpdate) {
        let DestinationUpdate {
            city,
            country,
            start_date,
            end_date,
            budget,
            activities,
        } = update;

        replace_text(&mut self.city, city);
        replace_text(&mut self.country, country);
        replace_text(&mut self.start_date, start_date);
        replace_text(&mut self.end_date, end_date);
        if let Some(budget) = budget {
            self.budget = budget;
        }
        if let Some(activities) = activities.filter(|a| !a.is_empty()) {
            self.activities = activities;
        }
    }

    /// Case-insensitive comparison against the city key.
    pub fn matches_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.to_lowercase()
    }

    /// Case-insensitive substring match over city, country and activities.
    ///
    /// The empty keyword matches every destination.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.city.to_lowercase().contains(&needle)
            || self.country.to_lowercase().contains(&needle)
            || self
                .activities
                .iter()
                .any(|activity| activity.to_lowercase().contains(&needle))
    }

    /// Number of days covered by the stay, counting both ends.
    ///
    /// Returns `None` when either date does not parse or the end precedes the
    /// start.
    pub fn duration_days(&self) -> Option<i32> {
        let start: Date = self.start_date.parse().ok()?;
        let end: Date = self.end_date.parse().ok()?;
        let days = start.until(end).ok()?.get_days();
        (days >= 0).then_some(days + 1)
    }

    /// Budget as shown to users, see [`format_budget`].
    pub fn budget_text(&self) -> String {
        format_budget(self.budget)
    }

    /// Activities joined the way they are shown to users.
    pub fn activities_text(&self) -> String {
        self.activities.join(", ")
    }

    /// Serializes the destination into its six-field JSON object.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decodes a destination from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::MalformedRecord` when a field is missing or
    /// has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ItineraryError::MalformedRecord {
            message: e.to_string(),
        })
    }
}

/// Formats a budget with at least one fractional digit.
///
/// Whole amounts keep a trailing `.0` (`1500.0`), everything else uses the
/// shortest representation that reads back to the same value (`1250.5`).
pub fn format_budget(budget: f64) -> String {
    if budget.is_finite() && budget.fract() == 0.0 && budget.abs() < 1e16 {
        format!("{budget:.1}")
    } else {
        budget.to_string()
    }
}

fn replace_text(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}
