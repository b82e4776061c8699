//! Resolve-then-search: the capability the orchestrator calls.

use crate::error::LocationError;
use crate::facility::{FacilityRecord, nearby_facilities};
use crate::geocode::Geocoder;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for facility lookup around a free-text location.
///
/// The orchestrator only sees this trait, so the simulated directory can
/// be swapped for a real one without touching the triage flow.
#[async_trait]
pub trait FacilityLocator: Send + Sync {
    /// Resolves free text to a coordinate and returns nearby facilities.
    ///
    /// # Errors
    ///
    /// Returns an error when geocoding fails or matches nothing; the
    /// caller skips the facilities stage for that turn.
    async fn resolve_and_search(&self, query: &str) -> Result<Vec<FacilityRecord>, LocationError>;
}

/// Geocode-then-synthesize locator over the simulated directory.
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
}

impl LocationResolver {
    /// Creates a resolver over the given geocoder.
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }
}

#[async_trait]
impl FacilityLocator for LocationResolver {
    async fn resolve_and_search(&self, query: &str) -> Result<Vec<FacilityRecord>, LocationError> {
        let origin = self.geocoder.geocode(query).await?;
        Ok(nearby_facilities(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::Coordinate;

    struct FixedGeocoder {
        coordinate: Coordinate,
    }

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn geocode(&self, _query: &str) -> Result<Coordinate, LocationError> {
            Ok(self.coordinate)
        }
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn geocode(&self, query: &str) -> Result<Coordinate, LocationError> {
            Err(LocationError::NotFound {
                query: query.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn resolving_twice_yields_identical_records() {
        let resolver = LocationResolver::new(Arc::new(FixedGeocoder {
            coordinate: Coordinate {
                latitude: 19.076,
                longitude: 72.8777,
            },
        }));

        let first = resolver.resolve_and_search("Mumbai").await.expect("search");
        let second = resolver.resolve_and_search("Mumbai").await.expect("search");
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[tokio::test]
    async fn geocode_failure_propagates() {
        let resolver = LocationResolver::new(Arc::new(FailingGeocoder));
        let result = resolver.resolve_and_search("Atlantis").await;
        assert!(matches!(result, Err(LocationError::NotFound { .. })));
    }
}
