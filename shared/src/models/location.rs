use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reference location used when every resolution strategy is exhausted
/// or when the caller omits coordinates: Jakarta, Indonesia.
pub const DEFAULT_LATITUDE: f64 = -6.2088;
pub const DEFAULT_LONGITUDE: f64 = 106.8456;
pub const DEFAULT_CITY: &str = "Jakarta";
pub const DEFAULT_COUNTRY: &str = "Indonesia";

/// Which step of the resolution chain produced a location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationStrategy {
    /// Native device geolocation
    Device,
    /// IP-based geolocation lookup
    IpLookup,
    /// Hardcoded reference location
    Default,
    /// Explicit user entry
    Manual,
}

/// Result of the location-resolution chain.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ResolvedLocation {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Reported accuracy in meters, device strategy only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,

    pub strategy: LocationStrategy,
}

impl ResolvedLocation {
    /// The guaranteed terminal step of the chain.
    pub fn fallback_default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            city: Some(DEFAULT_CITY.to_string()),
            country: Some(DEFAULT_COUNTRY.to_string()),
            accuracy: None,
            strategy: LocationStrategy::Default,
        }
    }

    /// A coordinate pair is usable when both components are finite and
    /// not the 0,0 null-island placeholder some IP services return.
    pub fn plausible(latitude: f64, longitude: f64) -> bool {
        latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
            && !(latitude == 0.0 && longitude == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_fallback_default_is_jakarta() {
        let loc = ResolvedLocation::fallback_default();
        assert_eq!(loc.latitude, DEFAULT_LATITUDE);
        assert_eq!(loc.longitude, DEFAULT_LONGITUDE);
        assert_eq!(loc.strategy, LocationStrategy::Default);
    }

    #[test_case(0.0, 0.0, false; "null island")]
    #[test_case(f64::NAN, 106.8, false; "nan latitude")]
    #[test_case(91.0, 0.0, false; "latitude out of range")]
    #[test_case(-6.2088, 106.8456, true; "jakarta")]
    #[test_case(0.0, 106.8456, true; "zero latitude only")]
    fn test_plausible(lat: f64, lng: f64, expected: bool) {
        assert_eq!(ResolvedLocation::plausible(lat, lng), expected);
    }

    #[test]
    fn test_strategy_serializes_snake_case() {
        let json = serde_json::to_value(LocationStrategy::IpLookup).unwrap();
        assert_eq!(json, "ip_lookup");
    }
}
