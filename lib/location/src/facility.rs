//! Simulated facility directory.
//!
//! Facilities are synthesized at small fixed offsets from the resolved
//! coordinate so they plot nearby on a map. This is an explicit
//! simulation, not a directory lookup; real-world accuracy is a
//! documented non-goal.

use crate::geocode::Coordinate;
use serde::{Deserialize, Serialize};

/// A synthetic nearby-facility entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Facility name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Display address.
    pub address: String,
}

/// Fixed (name, latitude offset, longitude offset, address) tuples the
/// simulation derives facilities from.
const FACILITY_OFFSETS: [(&str, f64, f64, &str); 3] = [
    ("City General Hospital", 0.002, 0.002, "Main Road, Near Chowk"),
    ("LifeCare Emergency Clinic", -0.002, -0.001, "Sector 4, Green Park"),
    ("Community Health Centre (Govt)", 0.001, -0.003, "Station Road"),
];

/// Synthesizes the facility list for a resolved coordinate.
///
/// Deterministic: the same coordinate always yields the same records.
#[must_use]
pub fn nearby_facilities(origin: Coordinate) -> Vec<FacilityRecord> {
    FACILITY_OFFSETS
        .iter()
        .map(|(name, lat_offset, lon_offset, address)| FacilityRecord {
            name: (*name).to_string(),
            latitude: origin.latitude + lat_offset,
            longitude: origin.longitude + lon_offset,
            address: (*address).to_string(),
        })
        .collect()
}
