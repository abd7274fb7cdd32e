//! Prompt text for travel assistance requests.

use voyage_core::Destination;

/// Prompt for [`crate::TravelAssistant::generate_itinerary`].
pub fn itinerary_prompt(destination: &Destination) -> String {
    format!(
        "Create a detailed daily travel itinerary for {city}, {country}\n\
         from {start} to {end}.\n\
         Budget: {budget} USD.\n\
         Planned activities: {activities}.\n",
        city = destination.city,
        country = destination.country,
        start = destination.start_date,
        end = destination.end_date,
        budget = destination.budget_text(),
        activities = destination.activities_text(),
    )
}

/// Prompt for [`crate::TravelAssistant::generate_budget_tips`].
pub fn budget_tips_prompt(destination: &Destination) -> String {
    format!(
        "Give me budget-saving travel tips for a trip to {city}, {country}\n\
         with a budget of {budget} USD and the following activities: {activities}.\n",
        city = destination.city,
        country = destination.country,
        budget = destination.budget_text(),
        activities = destination.activities_text(),
    )
}
