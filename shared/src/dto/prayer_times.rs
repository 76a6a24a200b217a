use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};

/// Country assumed when a city query omits one.
pub const DEFAULT_QUERY_COUNTRY: &str = "Indonesia";

/// Query parameters for `/api/prayer-times/city`.
#[derive(Debug, Clone, Deserialize)]
pub struct CityTimingsQuery {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Query parameters for `/api/prayer-times/coordinates`.
///
/// Coordinates arrive as raw strings so that malformed values surface
/// through the shared error envelope instead of the framework's
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesTimingsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Optional coordinate overrides for `/api/calendar/hijri/{year}/{month}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A validated prayer-times query target: exactly one of a city or a
/// coordinate pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum LocationSelector {
    City { city: String, country: String },
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationSelector {
    /// Builds a selector from loose request parts, rejecting every
    /// inconsistent combination.
    pub fn from_parts(
        city: Option<String>,
        country: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self> {
        if latitude.is_some() != longitude.is_some() {
            return Err(SharedError::BadRequest(
                "Latitude and longitude parameters are required".to_string(),
            ));
        }

        let city = city.filter(|c| !c.trim().is_empty());

        match (city, latitude, longitude) {
            (Some(_), Some(_), Some(_)) => Err(SharedError::BadRequest(
                "Provide either a city or a coordinate pair, not both".to_string(),
            )),
            (Some(city), None, None) => Ok(LocationSelector::City {
                city,
                country: country
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_QUERY_COUNTRY.to_string()),
            }),
            (None, Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(SharedError::BadRequest(
                        "Latitude and longitude must be valid coordinates".to_string(),
                    ));
                }
                Ok(LocationSelector::Coordinates {
                    latitude,
                    longitude,
                })
            }
            (None, None, None) => Err(SharedError::BadRequest(
                "City parameter is required".to_string(),
            )),
            // Unreachable: the xor check above rejected half-pairs
            _ => Err(SharedError::BadRequest(
                "Latitude and longitude parameters are required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_city_with_default_country() {
        let selector =
            LocationSelector::from_parts(Some("Bandung".to_string()), None, None, None).unwrap();
        assert_eq!(
            selector,
            LocationSelector::City {
                city: "Bandung".to_string(),
                country: "Indonesia".to_string()
            }
        );
    }

    #[test]
    fn test_coordinates() {
        let selector =
            LocationSelector::from_parts(None, None, Some(-6.2088), Some(106.8456)).unwrap();
        assert!(matches!(selector, LocationSelector::Coordinates { .. }));
    }

    #[test]
    fn test_nothing_supplied_is_rejected() {
        let err = LocationSelector::from_parts(None, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: City parameter is required");
    }

    #[test]
    fn test_latitude_without_longitude_is_rejected() {
        // Even with a city present, a half coordinate pair is inconsistent
        let err = LocationSelector::from_parts(
            Some("Jakarta".to_string()),
            None,
            Some(-6.2088),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SharedError::BadRequest(_)));
        assert!(err.to_string().contains("Latitude and longitude"));
    }

    #[test]
    fn test_city_and_full_pair_is_rejected() {
        let err = LocationSelector::from_parts(
            Some("Jakarta".to_string()),
            None,
            Some(-6.2088),
            Some(106.8456),
        )
        .unwrap_err();
        assert!(matches!(err, SharedError::BadRequest(_)));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let err = LocationSelector::from_parts(None, None, Some(120.0), Some(200.0)).unwrap_err();
        assert!(matches!(err, SharedError::BadRequest(_)));
    }

    #[test]
    fn test_blank_city_counts_as_missing() {
        let err =
            LocationSelector::from_parts(Some("   ".to_string()), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: City parameter is required");
    }
}
