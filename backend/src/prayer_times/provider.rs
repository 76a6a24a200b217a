use crate::third_party::client::UpstreamError;
use async_trait::async_trait;
use serde_json::Value;
use shared::PrayerTimesSnapshot;

/// Interface for prayer-times and Hijri-calendar providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrayerTimesProvider: Send + Sync {
    async fn timings_by_city(
        &self,
        city: &str,
        country: &str,
    ) -> Result<PrayerTimesSnapshot, UpstreamError>;

    async fn timings_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PrayerTimesSnapshot, UpstreamError>;

    /// Per-day calendar entries, envelope-stripped but otherwise
    /// unmodified.
    async fn hijri_calendar(
        &self,
        year: i32,
        month: u32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Value>, UpstreamError>;
}
