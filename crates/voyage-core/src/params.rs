//! Parameter structures for itinerary operations
//!
//! Interface-agnostic request types. The CLI defines its own clap argument
//! structs and converts them into these with `From`, keeping argument
//! parsing concerns out of the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Itinerary
//! ```
//!
//! Validation of user-supplied values (non-empty city, non-negative budget,
//! `YYYY-MM-DD` dates) happens here, at the boundary. The [`Itinerary`]
//! itself stores whatever it is given.
//!
//! [`Itinerary`]: crate::Itinerary

use jiff::civil::Date;

use crate::{
    error::{ItineraryError, Result},
    models::{Destination, DestinationUpdate},
};

/// Parameters for adding a new destination.
#[derive(Debug, Clone, Default)]
pub struct AddDestination {
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub activities: Vec<String>,
}

impl AddDestination {
    /// Validates the supplied values.
    ///
    /// Dates are checked for format only; an end date before the start date
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<()> {
        if self.city.trim().is_empty() {
            return Err(ItineraryError::invalid_input("city").with_reason("City cannot be empty"));
        }
        validate_date("start_date", &self.start_date)?;
        validate_date("end_date", &self.end_date)?;
        validate_budget(self.budget)
    }
}

impl TryFrom<AddDestination> for Destination {
    type Error = ItineraryError;

    fn try_from(params: AddDestination) -> Result<Self> {
        params.validate()?;
        Ok(Destination::new(
            params.city,
            params.country,
            params.start_date,
            params.end_date,
            params.budget,
            params.activities,
        ))
    }
}

/// Parameters for a partial update of the first destination matching `city`.
#[derive(Debug, Clone, Default)]
pub struct UpdateDestination {
    /// City used to locate the destination (case-insensitive)
    pub city: String,
    /// Replacement city name
    pub new_city: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub activities: Option<Vec<String>>,
}

impl UpdateDestination {
    /// Validates the supplied replacement values.
    ///
    /// Empty strings are allowed here because they mean "keep the current
    /// value".
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("start_date", &self.start_date), ("end_date", &self.end_date)] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                validate_date(field, value)?;
            }
        }
        if let Some(budget) = self.budget {
            validate_budget(budget)?;
        }
        Ok(())
    }
}

impl TryFrom<&UpdateDestination> for DestinationUpdate {
    type Error = ItineraryError;

    fn try_from(params: &UpdateDestination) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            city: params.new_city.clone(),
            country: params.country.clone(),
            start_date: params.start_date.clone(),
            end_date: params.end_date.clone(),
            budget: params.budget,
            activities: params.activities.clone(),
        })
    }
}

/// Parameters for operations addressing a destination by city.
///
/// Used for remove, show and assistance requests.
#[derive(Debug, Clone, Default)]
pub struct CityRef {
    pub city: String,
}

/// Parameters for keyword search.
#[derive(Debug, Clone, Default)]
pub struct SearchDestinations {
    /// Case-insensitive substring; empty matches everything
    pub keyword: String,
}

/// Splits a comma-separated activity list, trimming each entry and dropping
/// empty ones.
///
/// ```rust
/// use voyage_core::params::parse_activities;
///
/// assert_eq!(
///     parse_activities(" hiking, museums ,, food tour"),
///     vec!["hiking", "museums", "food tour"]
/// );
/// assert!(parse_activities("").is_empty());
/// ```
pub fn parse_activities(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|activity| !activity.is_empty())
        .map(String::from)
        .collect()
}

fn validate_date(field: &str, value: &str) -> Result<()> {
    let well_formed = value.len() == 10 && value.parse::<Date>().is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(ItineraryError::invalid_input(field)
            .with_reason(format!("'{value}' is not a date in YYYY-MM-DD format")))
    }
}

fn validate_budget(budget: f64) -> Result<()> {
    if budget.is_finite() && budget >= 0.0 {
        Ok(())
    } else {
        Err(ItineraryError::invalid_input("budget")
            .with_reason("Budget must be a non-negative number"))
    }
}
