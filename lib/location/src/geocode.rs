//! Free-text geocoding via Nominatim.

use crate::error::LocationError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// A resolved coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Trait for geocoding backends.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves free text to a coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, or when the query
    /// matches nothing. Results are never cached; every call re-geocodes.
    async fn geocode(&self, query: &str) -> Result<Coordinate, LocationError>;
}

/// Configuration for the Nominatim client.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim instance.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with every request. Nominatim's usage policy
    /// requires an identifying agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "samaritan-triage".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Nominatim-backed geocoder.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

/// One place in a Nominatim search response. Coordinates arrive as
/// strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: GeocoderConfig) -> Result<Self, LocationError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LocationError::ClientInit {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    fn place_to_coordinate(place: &NominatimPlace) -> Result<Coordinate, LocationError> {
        let latitude = place
            .lat
            .parse::<f64>()
            .map_err(|e| LocationError::InvalidResponse {
                reason: format!("bad latitude '{}': {e}", place.lat),
            })?;
        let longitude = place
            .lon
            .parse::<f64>()
            .map_err(|e| LocationError::InvalidResponse {
                reason: format!("bad longitude '{}': {e}", place.lon),
            })?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Coordinate, LocationError> {
        let response = self
            .http
            .get(self.search_url())
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationError::Timeout
                } else {
                    LocationError::RequestFailed {
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let places: Vec<NominatimPlace> =
            response
                .json()
                .await
                .map_err(|e| LocationError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        match places.first() {
            Some(place) => Self::place_to_coordinate(place),
            None => Err(LocationError::NotFound {
                query: query.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_joins_cleanly() {
        let config = GeocoderConfig {
            base_url: "https://nominatim.openstreetmap.org/".to_string(),
            ..GeocoderConfig::default()
        };
        let client = NominatimClient::new(config).expect("client");
        assert_eq!(
            client.search_url(),
            "https://nominatim.openstreetmap.org/search"
        );
    }

    #[test]
    fn place_coordinates_parse_from_strings() {
        let place: NominatimPlace = serde_json::from_value(serde_json::json!({
            "lat": "19.0759899",
            "lon": "72.8773928"
        }))
        .expect("deserialize");
        let coordinate = NominatimClient::place_to_coordinate(&place).expect("coordinate");
        assert!((coordinate.latitude - 19.0759899).abs() < 1e-9);
        assert!((coordinate.longitude - 72.8773928).abs() < 1e-9);
    }

    #[test]
    fn malformed_latitude_is_an_error() {
        let place = NominatimPlace {
            lat: "north-ish".to_string(),
            lon: "72.0".to_string(),
        };
        let result = NominatimClient::place_to_coordinate(&place);
        assert!(matches!(
            result,
            Err(LocationError::InvalidResponse { .. })
        ));
    }
}
