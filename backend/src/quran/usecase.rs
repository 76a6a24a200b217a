use crate::error::ApiError;
use crate::quran::provider::QuranProvider;
use crate::third_party::client::UpstreamError;
use shared::{Surah, SurahDetail};
use std::sync::Arc;

#[async_trait::async_trait]
pub trait QuranUseCase: Send + Sync {
    async fn list_surahs(&self) -> Result<Vec<Surah>, ApiError>;
    async fn get_surah(&self, number: i64) -> Result<SurahDetail, ApiError>;
}

pub struct QuranUseCaseImpl {
    pub provider: Arc<dyn QuranProvider>,
}

impl QuranUseCaseImpl {
    pub fn new(provider: Arc<dyn QuranProvider>) -> Self {
        Self { provider }
    }

    fn map_detail_error(err: UpstreamError) -> ApiError {
        // An upstream-reported 404 is a missing entity, not an outage
        if let UpstreamError::Reported(reason) = &err {
            if reason.starts_with("code 404") {
                return ApiError::not_found("Surah not found");
            }
        }
        ApiError::from_upstream(err, "Failed to fetch surah")
    }
}

#[async_trait::async_trait]
impl QuranUseCase for QuranUseCaseImpl {
    async fn list_surahs(&self) -> Result<Vec<Surah>, ApiError> {
        self.provider
            .list_surahs()
            .await
            .map_err(|e| ApiError::from_upstream(e, "Failed to fetch surahs"))
    }

    async fn get_surah(&self, number: i64) -> Result<SurahDetail, ApiError> {
        let number = Surah::validate_number(number)?;

        self.provider
            .get_surah(number)
            .await
            .map_err(Self::map_detail_error)
    }
}
