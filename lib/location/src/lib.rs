//! Location resolution for the samaritan platform.
//!
//! This crate provides:
//!
//! - **Geocoder**: Free-text location to coordinate, via Nominatim
//! - **Facility directory**: Deterministic simulated nearby facilities
//! - **Facility Locator**: The resolve-then-search capability the
//!   orchestrator calls; pluggable so a real directory can be substituted

pub mod error;
pub mod facility;
pub mod geocode;
pub mod resolver;

pub use error::LocationError;
pub use facility::{FacilityRecord, nearby_facilities};
pub use geocode::{Coordinate, Geocoder, GeocoderConfig, NominatimClient};
pub use resolver::{FacilityLocator, LocationResolver};
