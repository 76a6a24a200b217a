use crate::error::ApiError;
use crate::prayer::provider::DuaProvider;
use shared::Prayer;
use std::sync::Arc;

#[async_trait::async_trait]
pub trait PrayerUseCase: Send + Sync {
    async fn list_prayers(&self) -> Result<Vec<Prayer>, ApiError>;
    async fn search_prayers(&self, query: &str) -> Result<Vec<Prayer>, ApiError>;
    async fn get_prayer(&self, id: &str) -> Result<Prayer, ApiError>;
}

pub struct PrayerUseCaseImpl {
    pub provider: Arc<dyn DuaProvider>,
}

impl PrayerUseCaseImpl {
    pub fn new(provider: Arc<dyn DuaProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl PrayerUseCase for PrayerUseCaseImpl {
    async fn list_prayers(&self) -> Result<Vec<Prayer>, ApiError> {
        self.provider
            .list_prayers()
            .await
            .map_err(|e| ApiError::from_upstream(e, "Failed to fetch prayers"))
    }

    /// Filters locally: the upstream title filter cannot match against
    /// translations, and the result must stay a subset of the full list.
    async fn search_prayers(&self, query: &str) -> Result<Vec<Prayer>, ApiError> {
        let prayers = self
            .provider
            .list_prayers()
            .await
            .map_err(|e| ApiError::from_upstream(e, "Failed to search prayers"))?;

        if query.trim().is_empty() {
            return Ok(prayers);
        }

        Ok(prayers.into_iter().filter(|p| p.matches(query)).collect())
    }

    async fn get_prayer(&self, id: &str) -> Result<Prayer, ApiError> {
        self.provider
            .get_prayer(id)
            .await
            .map_err(|e| ApiError::from_upstream(e, "Failed to fetch prayer"))?
            .ok_or_else(|| ApiError::not_found("Prayer not found"))
    }
}
