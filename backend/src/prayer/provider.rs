use crate::third_party::client::UpstreamError;
use async_trait::async_trait;
use shared::Prayer;

/// Interface for dua (supplication) content providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DuaProvider: Send + Sync {
    async fn list_prayers(&self) -> Result<Vec<Prayer>, UpstreamError>;

    /// Point lookup; `Ok(None)` when the upstream has no such record.
    async fn get_prayer(&self, id: &str) -> Result<Option<Prayer>, UpstreamError>;
}
