//! Parameter-driven operations that return display wrappers for the
//! Itinerary.
//!
//! These are what interfaces call. Unlike the raw operations in
//! [`super::ops`], a failed city lookup here is an
//! [`ItineraryError::NotFound`] so it can travel through `?` to the
//! command-dispatch boundary.

use log::debug;

use super::Itinerary;
use crate::{
    display::{CreateResult, DeleteResult, Destinations, UpdateResult},
    error::{ItineraryError, Result},
    models::{Destination, DestinationUpdate},
    params::{AddDestination, CityRef, SearchDestinations, UpdateDestination},
};

impl Itinerary {
    /// Handle adding a destination.
    ///
    /// Validates the parameters, appends the destination and returns it for
    /// confirmation.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` when validation fails; the
    /// itinerary is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use voyage_core::{params::AddDestination, ItineraryBuilder};
    ///
    /// let mut itinerary = ItineraryBuilder::new().build_empty();
    /// let result = itinerary.add_destination(&AddDestination {
    ///     city: "Seoul".to_string(),
    ///     country: "South Korea".to_string(),
    ///     start_date: "2025-11-02".to_string(),
    ///     end_date: "2025-11-06".to_string(),
    ///     budget: 1300.0,
    ///     activities: vec!["Gyeongbokgung".to_string()],
    /// })?;
    /// assert_eq!(result.resource.city, "Seoul");
    /// assert_eq!(itinerary.len(), 1);
    /// # voyage_core::Result::<()>::Ok(())
    /// ```
    pub fn add_destination(&mut self, params: &AddDestination) -> Result<CreateResult<Destination>> {
        let destination = Destination::try_from(params.clone())?;
        self.add(destination.clone());
        Ok(CreateResult::new(destination))
    }

    /// Handle a partial update of the first destination matching
    /// `params.city`.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` for malformed replacement
    /// values and `ItineraryError::NotFound` when no city matches.
    pub fn update_destination(
        &mut self,
        params: &UpdateDestination,
    ) -> Result<UpdateResult<Destination>> {
        let update = DestinationUpdate::try_from(params)?;
        let changes = update.changes();
        let updated = self
            .update_first(&params.city, update)
            .cloned()
            .ok_or_else(|| ItineraryError::not_found(&params.city))?;
        debug!("Applied {} changes to {}", changes.len(), updated.city);
        Ok(UpdateResult::with_changes(updated, changes))
    }

    /// Handle removing the first destination matching `params.city`.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::NotFound` when no city matches.
    pub fn remove_destination(&mut self, params: &CityRef) -> Result<DeleteResult<Destination>> {
        self.take(&params.city)
            .map(DeleteResult::new)
            .ok_or_else(|| ItineraryError::not_found(&params.city))
    }

    /// Handle looking up the first destination matching `params.city`.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::NotFound` when no city matches.
    pub fn show_destination(&self, params: &CityRef) -> Result<&Destination> {
        self.find(&params.city)
            .ok_or_else(|| ItineraryError::not_found(&params.city))
    }

    /// Handle keyword search.
    pub fn search_destinations(&self, params: &SearchDestinations) -> Destinations {
        Destinations(self.search(&params.keyword))
    }

    /// Handle listing every destination.
    pub fn list_destinations(&self) -> Destinations {
        Destinations(self.destinations.clone())
    }
}
