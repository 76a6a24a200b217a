use async_trait::async_trait;
use serde_json::Value;
use shared::models::location::{LocationStrategy, ResolvedLocation};
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Per-step budget of the resolution chain. The chain as a whole is
/// bounded by the sum of these.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(10);

/// Why the device step failed, kept for user messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceLocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location information unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

impl DeviceLocationError {
    /// Localized message shown next to the manual-entry fallback.
    pub fn user_message(&self) -> &'static str {
        match self {
            DeviceLocationError::PermissionDenied => {
                "Izin akses lokasi ditolak. Silakan aktifkan izin lokasi atau masukkan kota secara manual."
            }
            DeviceLocationError::Unavailable => {
                "Informasi lokasi tidak tersedia. Silakan masukkan kota secara manual."
            }
            DeviceLocationError::Timeout => {
                "Waktu permintaan lokasi habis. Silakan coba lagi atau masukkan kota secara manual."
            }
            DeviceLocationError::Unsupported => {
                "Geolocation tidak didukung oleh perangkat ini."
            }
        }
    }
}

/// A fix from the device positioning hardware.
#[derive(Debug, Clone, PartialEq)]
pub struct DevicePosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy in meters
    pub accuracy: Option<f64>,
}

/// Native positioning source. The UI shell supplies the real
/// implementation; this crate only defines the seam.
#[async_trait]
pub trait DeviceLocation: Send + Sync {
    async fn current_position(&self) -> Result<DevicePosition, DeviceLocationError>;
}

/// One IP-geolocation service with its own response parser.
pub struct IpGeoProvider {
    pub name: &'static str,
    pub url: String,
    parser: fn(&Value) -> Option<IpLocation>,
}

#[derive(Debug, Clone, PartialEq)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
    city: Option<String>,
    country: Option<String>,
}

fn parse_ipapi_co(data: &Value) -> Option<IpLocation> {
    Some(IpLocation {
        latitude: data.get("latitude")?.as_f64()?,
        longitude: data.get("longitude")?.as_f64()?,
        city: data.get("city").and_then(Value::as_str).map(String::from),
        country: data
            .get("country_name")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

fn parse_ip_api_com(data: &Value) -> Option<IpLocation> {
    Some(IpLocation {
        latitude: data.get("lat")?.as_f64()?,
        longitude: data.get("lon")?.as_f64()?,
        city: data.get("city").and_then(Value::as_str).map(String::from),
        country: data
            .get("country")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

fn parse_ipinfo_io(data: &Value) -> Option<IpLocation> {
    // Coordinates arrive as a single "lat,lon" string
    let loc = data.get("loc")?.as_str()?;
    let (lat, lon) = loc.split_once(',')?;
    Some(IpLocation {
        latitude: lat.trim().parse().ok()?,
        longitude: lon.trim().parse().ok()?,
        city: data.get("city").and_then(Value::as_str).map(String::from),
        country: data
            .get("country")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

/// The ordered provider list tried after the device step.
pub fn default_ip_providers() -> Vec<IpGeoProvider> {
    vec![
        IpGeoProvider {
            name: "ipapi.co",
            url: "https://ipapi.co/json/".to_string(),
            parser: parse_ipapi_co,
        },
        IpGeoProvider {
            name: "ip-api.com",
            url: "http://ip-api.com/json/".to_string(),
            parser: parse_ip_api_com,
        },
        IpGeoProvider {
            name: "ipinfo.io",
            url: "https://ipinfo.io/json".to_string(),
            parser: parse_ipinfo_io,
        },
    ]
}

#[derive(Default)]
struct ResolverState {
    /// Explicit user entry; takes precedence until refresh
    manual: Option<ResolvedLocation>,
    /// Result of the last chain run this session
    cached: Option<ResolvedLocation>,
    /// Why the device step failed last time, for user messaging
    last_device_error: Option<DeviceLocationError>,
}

/// The location-resolution fallback chain.
///
/// Strategies run sequentially: device positioning, then each IP
/// provider in order, then the fixed Jakarta default. The chain always
/// terminates within the sum of the per-step timeouts and always yields
/// a usable location.
pub struct LocationResolver {
    device: Option<Box<dyn DeviceLocation>>,
    providers: Vec<IpGeoProvider>,
    http: reqwest::Client,
    step_timeout: Duration,
    state: Mutex<ResolverState>,
}

impl LocationResolver {
    pub fn new(device: Option<Box<dyn DeviceLocation>>) -> Self {
        Self::with_providers(device, default_ip_providers())
    }

    pub fn with_providers(
        device: Option<Box<dyn DeviceLocation>>,
        providers: Vec<IpGeoProvider>,
    ) -> Self {
        let step_timeout = DEFAULT_STEP_TIMEOUT;
        let http = reqwest::Client::builder()
            .timeout(step_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            device,
            providers,
            http,
            step_timeout,
            state: Mutex::new(ResolverState::default()),
        }
    }

    pub fn with_step_timeout(mut self, step_timeout: Duration) -> Self {
        self.step_timeout = step_timeout;
        self
    }

    /// Records an explicit user entry. Manual entry wins over every
    /// automatic strategy until `refresh` is called.
    pub fn set_manual(&self, city: &str, latitude: f64, longitude: f64) {
        let mut state = self.state.lock().expect("resolver state poisoned");
        state.manual = Some(ResolvedLocation {
            latitude,
            longitude,
            city: Some(city.to_string()),
            country: None,
            accuracy: None,
            strategy: LocationStrategy::Manual,
        });
    }

    /// The device-step failure from the last chain run, if any.
    pub fn last_device_error(&self) -> Option<DeviceLocationError> {
        self.state.lock().expect("resolver state poisoned").last_device_error
    }

    /// Resolves a location, reusing the manual entry or the session
    /// cache when present.
    pub async fn resolve(&self) -> ResolvedLocation {
        {
            let state = self.state.lock().expect("resolver state poisoned");
            if let Some(manual) = &state.manual {
                return manual.clone();
            }
            if let Some(cached) = &state.cached {
                return cached.clone();
            }
        }

        let resolved = self.run_chain().await;
        self.state.lock().expect("resolver state poisoned").cached = Some(resolved.clone());
        resolved
    }

    /// Drops the manual entry and the session cache, then re-runs the
    /// chain.
    pub async fn refresh(&self) -> ResolvedLocation {
        {
            let mut state = self.state.lock().expect("resolver state poisoned");
            state.manual = None;
            state.cached = None;
        }
        self.resolve().await
    }

    async fn run_chain(&self) -> ResolvedLocation {
        match self.try_device().await {
            Ok(location) => return location,
            Err(reason) => {
                log::warn!("device geolocation failed: {}", reason);
                self.state
                    .lock()
                    .expect("resolver state poisoned")
                    .last_device_error = Some(reason);
            }
        }

        if let Some(location) = self.try_ip_providers().await {
            return location;
        }

        log::warn!("every location strategy failed, using the fixed default");
        ResolvedLocation::fallback_default()
    }

    async fn try_device(&self) -> Result<ResolvedLocation, DeviceLocationError> {
        let device = self
            .device
            .as_ref()
            .ok_or(DeviceLocationError::Unsupported)?;

        let position = tokio::time::timeout(self.step_timeout, device.current_position())
            .await
            .map_err(|_| DeviceLocationError::Timeout)??;

        Ok(ResolvedLocation {
            latitude: position.latitude,
            longitude: position.longitude,
            city: None,
            country: None,
            accuracy: position.accuracy,
            strategy: LocationStrategy::Device,
        })
    }

    async fn try_ip_providers(&self) -> Option<ResolvedLocation> {
        for provider in &self.providers {
            match self.try_ip_provider(provider).await {
                Some(location) => return Some(location),
                None => {
                    log::warn!("failed to get location from {}", provider.name);
                    continue;
                }
            }
        }
        None
    }

    async fn try_ip_provider(&self, provider: &IpGeoProvider) -> Option<ResolvedLocation> {
        let request = self.http.get(&provider.url).send();
        let response = tokio::time::timeout(self.step_timeout, request)
            .await
            .ok()?
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let data: Value = response.json().await.ok()?;
        let parsed = (provider.parser)(&data)?;

        if !ResolvedLocation::plausible(parsed.latitude, parsed.longitude) {
            return None;
        }

        Some(ResolvedLocation {
            latitude: parsed.latitude,
            longitude: parsed.longitude,
            city: parsed.city,
            country: parsed.country,
            accuracy: None,
            strategy: LocationStrategy::IpLookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    struct FixedDevice {
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl DeviceLocation for FixedDevice {
        async fn current_position(&self) -> Result<DevicePosition, DeviceLocationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DevicePosition {
                latitude: -6.9175,
                longitude: 107.6191,
                accuracy: Some(12.5),
            })
        }
    }

    struct FailingDevice {
        reason: DeviceLocationError,
    }

    #[async_trait]
    impl DeviceLocation for FailingDevice {
        async fn current_position(&self) -> Result<DevicePosition, DeviceLocationError> {
            Err(self.reason)
        }
    }

    struct HangingDevice;

    #[async_trait]
    impl DeviceLocation for HangingDevice {
        async fn current_position(&self) -> Result<DevicePosition, DeviceLocationError> {
            futures_pending().await
        }
    }

    async fn futures_pending() -> Result<DevicePosition, DeviceLocationError> {
        std::future::pending().await
    }

    fn unreachable_provider() -> IpGeoProvider {
        IpGeoProvider {
            name: "unreachable",
            // Discard port; connection fails immediately
            url: "http://127.0.0.1:9/json".to_string(),
            parser: parse_ip_api_com,
        }
    }

    #[tokio::test]
    async fn test_device_success_wins() {
        let calls = Arc::new(AtomicU32::new(0));
        let resolver = LocationResolver::with_providers(
            Some(Box::new(FixedDevice {
                calls: calls.clone(),
            })),
            vec![],
        );

        let location = resolver.resolve().await;
        assert_eq!(location.strategy, LocationStrategy::Device);
        assert_eq!(location.accuracy, Some(12.5));
    }

    #[tokio::test]
    async fn test_resolution_is_cached_per_session() {
        let calls = Arc::new(AtomicU32::new(0));
        let resolver = LocationResolver::with_providers(
            Some(Box::new(FixedDevice {
                calls: calls.clone(),
            })),
            vec![],
        );

        resolver.resolve().await;
        resolver.resolve().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_permission_denied_falls_through_to_default() {
        // No reachable IP provider either, so the chain must terminate
        // at the fixed default and still yield usable coordinates.
        let resolver = LocationResolver::with_providers(
            Some(Box::new(FailingDevice {
                reason: DeviceLocationError::PermissionDenied,
            })),
            vec![unreachable_provider()],
        );

        let started = Instant::now();
        let location = resolver.resolve().await;

        assert!(ResolvedLocation::plausible(
            location.latitude,
            location.longitude
        ));
        assert_eq!(location.strategy, LocationStrategy::Default);
        assert_eq!(location.city.as_deref(), Some("Jakarta"));
        assert_eq!(
            resolver.last_device_error(),
            Some(DeviceLocationError::PermissionDenied)
        );
        // Two steps, each bounded by the step timeout
        assert!(started.elapsed() < 2 * DEFAULT_STEP_TIMEOUT);
    }

    #[tokio::test]
    async fn test_no_device_source_counts_as_unsupported() {
        let resolver = LocationResolver::with_providers(None, vec![]);
        let location = resolver.resolve().await;

        assert_eq!(location.strategy, LocationStrategy::Default);
        assert_eq!(
            resolver.last_device_error(),
            Some(DeviceLocationError::Unsupported)
        );
    }

    #[tokio::test]
    async fn test_hanging_device_is_bounded_by_step_timeout() {
        let resolver = LocationResolver::with_providers(Some(Box::new(HangingDevice)), vec![])
            .with_step_timeout(Duration::from_millis(50));

        let started = Instant::now();
        let location = resolver.resolve().await;

        assert_eq!(location.strategy, LocationStrategy::Default);
        assert_eq!(
            resolver.last_device_error(),
            Some(DeviceLocationError::Timeout)
        );
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_manual_entry_takes_precedence_until_refresh() {
        let calls = Arc::new(AtomicU32::new(0));
        let resolver = LocationResolver::with_providers(
            Some(Box::new(FixedDevice {
                calls: calls.clone(),
            })),
            vec![],
        );

        resolver.set_manual("Surabaya", -7.2575, 112.7521);
        let location = resolver.resolve().await;
        assert_eq!(location.strategy, LocationStrategy::Manual);
        assert_eq!(location.city.as_deref(), Some("Surabaya"));
        assert_eq!(calls.load(Ordering::SeqCst), 0, "chain must not run");

        let refreshed = resolver.refresh().await;
        assert_eq!(refreshed.strategy, LocationStrategy::Device);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parse_ipapi_co() {
        let data = serde_json::json!({
            "latitude": -6.2146, "longitude": 106.8451,
            "city": "Jakarta", "country_name": "Indonesia"
        });
        let parsed = parse_ipapi_co(&data).unwrap();
        assert_eq!(parsed.latitude, -6.2146);
        assert_eq!(parsed.city.as_deref(), Some("Jakarta"));
        assert_eq!(parsed.country.as_deref(), Some("Indonesia"));
    }

    #[test]
    fn test_parse_ip_api_com() {
        let data = serde_json::json!({
            "lat": -6.2146, "lon": 106.8451,
            "city": "Jakarta", "country": "Indonesia"
        });
        let parsed = parse_ip_api_com(&data).unwrap();
        assert_eq!(parsed.longitude, 106.8451);
    }

    #[test]
    fn test_parse_ipinfo_io_splits_loc_pair() {
        let data = serde_json::json!({
            "loc": "-6.2146,106.8451", "city": "Jakarta", "country": "ID"
        });
        let parsed = parse_ipinfo_io(&data).unwrap();
        assert_eq!(parsed.latitude, -6.2146);
        assert_eq!(parsed.longitude, 106.8451);
    }

    #[test]
    fn test_parsers_reject_malformed_payloads() {
        assert_eq!(parse_ipapi_co(&serde_json::json!({"latitude": "x"})), None);
        assert_eq!(parse_ip_api_com(&serde_json::json!({})), None);
        assert_eq!(parse_ipinfo_io(&serde_json::json!({"loc": "garbage"})), None);
    }

    #[test]
    fn test_default_provider_order() {
        let providers = default_ip_providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["ipapi.co", "ip-api.com", "ipinfo.io"]);
    }

    #[test]
    fn test_device_error_messages_are_localized() {
        assert!(DeviceLocationError::PermissionDenied
            .user_message()
            .contains("Izin akses lokasi ditolak"));
        assert!(DeviceLocationError::Timeout
            .user_message()
            .contains("Waktu permintaan lokasi habis"));
    }
}
