//! Display implementations for domain models.
//!
//! `Destination`'s own Display is the fixed one-line summary shared by every
//! listing. [`DestinationDetail`] renders the longer markdown view used when a
//! single destination is shown.

use std::fmt;

use crate::models::Destination;

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} | {} to {} | Budget: ${} | Activities: {}",
            self.city,
            self.country,
            self.start_date,
            self.end_date,
            self.budget_text(),
            self.activities_text()
        )
    }
}

/// Markdown detail view of a single destination.
pub struct DestinationDetail<'a>(pub &'a Destination);

impl fmt::Display for DestinationDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = self.0;
        writeln!(f, "# {}, {}", destination.city, destination.country)?;
        writeln!(f)?;
        write!(
            f,
            "- Dates: {} to {}",
            destination.start_date, destination.end_date
        )?;
        match destination.duration_days() {
            Some(1) => writeln!(f, " (1 day)")?,
            Some(days) => writeln!(f, " ({days} days)")?,
            None => writeln!(f)?,
        }
        writeln!(f, "- Budget: ${}", destination.budget_text())?;

        if destination.activities.is_empty() {
            writeln!(f, "\nNo activities planned.")?;
        } else {
            writeln!(f, "\n## Activities")?;
            writeln!(f)?;
            for activity in &destination.activities {
                writeln!(f, "- {activity}")?;
            }
        }
        Ok(())
    }
}
