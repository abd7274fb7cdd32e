//! Display formatting wrappers for destinations and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly for their compact
//! form; the wrappers here add context (lists, detail views, operation
//! outcomes). All wrappers produce markdown, which the CLI renders with
//! termimad or prints verbatim when color is disabled.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │  (Destination)  │───▶│ & Result Types  │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Destinations`] list wrapper
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`models`]: `Display` for [`crate::models::Destination`] and
//!   [`DestinationDetail`]

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Destinations;
pub use models::DestinationDetail;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
