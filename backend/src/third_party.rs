pub mod client;

pub mod equran;
pub mod alquran_cloud;
pub mod doa;
pub mod aladhan;

// Re-export commonly used services for convenience
pub use aladhan::timings::AladhanService;
pub use alquran_cloud::surahs::AlquranCloudService;
pub use client::{UpstreamClient, UpstreamError};
pub use doa::prayers::DoaApiService;
pub use equran::surahs::EquranService;
