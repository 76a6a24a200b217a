use crate::error::ApiError;
use crate::prayer_times::provider::PrayerTimesProvider;
use serde_json::Value;
use shared::models::location::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use std::sync::Arc;

#[async_trait::async_trait]
pub trait CalendarUseCase: Send + Sync {
    async fn hijri_calendar(
        &self,
        year: i32,
        month: u32,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vec<Value>, ApiError>;
}

pub struct CalendarUseCaseImpl {
    pub provider: Arc<dyn PrayerTimesProvider>,
}

impl CalendarUseCaseImpl {
    pub fn new(provider: Arc<dyn PrayerTimesProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl CalendarUseCase for CalendarUseCaseImpl {
    async fn hijri_calendar(
        &self,
        year: i32,
        month: u32,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vec<Value>, ApiError> {
        // Omitted coordinates fall back to the fixed reference location
        let latitude = latitude.unwrap_or(DEFAULT_LATITUDE);
        let longitude = longitude.unwrap_or(DEFAULT_LONGITUDE);

        self.provider
            .hijri_calendar(year, month, latitude, longitude)
            .await
            .map_err(|e| ApiError::from_upstream(e, "Failed to fetch Hijri calendar"))
    }
}
