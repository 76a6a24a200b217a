pub mod islamic;
pub mod location;
pub mod state;
pub mod storage;

// Re-export the pieces the UI shell wires together
pub use location::{
    default_ip_providers, DeviceLocation, DeviceLocationError, DevicePosition, IpGeoProvider,
    LocationResolver,
};
pub use state::{AppState, AppStore, Theme};
pub use storage::{JsonFileStore, StateStore, StorageError};
