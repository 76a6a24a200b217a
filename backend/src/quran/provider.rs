use crate::third_party::client::UpstreamError;
use async_trait::async_trait;
use shared::{Surah, SurahDetail};

/// The internal interface every Quran text provider is normalized
/// behind. Variant implementations are selected by configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuranProvider: Send + Sync {
    async fn list_surahs(&self) -> Result<Vec<Surah>, UpstreamError>;
    async fn get_surah(&self, number: u16) -> Result<SurahDetail, UpstreamError>;
}
