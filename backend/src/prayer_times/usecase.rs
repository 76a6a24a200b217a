use crate::error::ApiError;
use crate::prayer_times::provider::PrayerTimesProvider;
use shared::{LocationSelector, PrayerTimesSnapshot};
use std::sync::Arc;

#[async_trait::async_trait]
pub trait PrayerTimesUseCase: Send + Sync {
    async fn get_prayer_times(
        &self,
        selector: LocationSelector,
    ) -> Result<PrayerTimesSnapshot, ApiError>;
}

pub struct PrayerTimesUseCaseImpl {
    pub provider: Arc<dyn PrayerTimesProvider>,
}

impl PrayerTimesUseCaseImpl {
    pub fn new(provider: Arc<dyn PrayerTimesProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl PrayerTimesUseCase for PrayerTimesUseCaseImpl {
    async fn get_prayer_times(
        &self,
        selector: LocationSelector,
    ) -> Result<PrayerTimesSnapshot, ApiError> {
        let result = match selector {
            LocationSelector::City { city, country } => {
                self.provider.timings_by_city(&city, &country).await
            }
            LocationSelector::Coordinates {
                latitude,
                longitude,
            } => {
                self.provider
                    .timings_by_coordinates(latitude, longitude)
                    .await
            }
        };

        result.map_err(|e| ApiError::from_upstream(e, "Failed to fetch prayer times"))
    }
}
