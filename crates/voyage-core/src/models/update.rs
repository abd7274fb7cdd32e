//! Partial update requests for destinations.

use super::format_budget;

/// Fields to overwrite on an existing destination.
///
/// `None` leaves the stored value untouched. See
/// [`Destination::apply_update`](super::Destination::apply_update) for how
/// empty values are treated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationUpdate {
    pub city: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<f64>,
    pub activities: Option<Vec<String>>,
}

impl DestinationUpdate {
    /// Returns true when the update would not change any field.
    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// Human-readable list of the fields this update carries.
    ///
    /// Used by update results to report what was modified.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        let text_fields = [
            ("city", &self.city),
            ("country", &self.country),
            ("start date", &self.start_date),
            ("end date", &self.end_date),
        ];
        for (label, value) in text_fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                changes.push(format!("Set {label} to {value}"));
            }
        }
        if let Some(budget) = self.budget {
            changes.push(format!("Set budget to ${}", format_budget(budget)));
        }
        if let Some(activities) = self.activities.as_ref().filter(|a| !a.is_empty()) {
            changes.push(format!("Set activities to {}", activities.join(", ")));
        }
        changes
    }
}
