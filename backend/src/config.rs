use anyhow::{bail, Result};
use dotenv::dotenv;
use log::{info, warn};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

/// Which Quran text provider the proxy is configured against.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum QuranProviderKind {
    Equran,
    AlquranCloud,
}

impl std::str::FromStr for QuranProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equran" => Ok(QuranProviderKind::Equran),
            "alquran-cloud" | "alquran_cloud" => Ok(QuranProviderKind::AlquranCloud),
            _ => Err(format!("Unknown Quran provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub quran: QuranConfig,
    pub dua: DuaConfig,
    pub aladhan: AladhanConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Directory the UI shell is served from for non-API paths
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuranConfig {
    pub provider: QuranProviderKind,
    pub equran_api_url: String,
    pub alquran_cloud_api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DuaConfig {
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AladhanConfig {
    pub api_url: String,
    /// Calculation method forwarded on every timings query
    /// (20 = Kementerian Agama Indonesia)
    pub method: u32,
}

/// Shared HTTP-client knobs applied to every upstream call.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub timeout_seconds: u64,
    pub retries: u32,
}

impl Config {
    fn parse_backend_url(url: &str) -> (String, u16) {
        // Parse BACKEND_URL like "http://localhost:3001"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or("127.0.0.1").to_string();
            let port = parsed_url.port().unwrap_or(3001);
            (host, port)
        } else {
            ("127.0.0.1".to_string(), 3001)
        }
    }

    pub fn load() -> Result<Self> {
        // Check for ENV_FILE_PATH override
        if let Ok(env_file_path) = env::var("ENV_FILE_PATH") {
            if !env_file_path.is_empty() {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
            } else {
                dotenv().ok();
            }
        } else {
            dotenv().ok();
        }

        let environment = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            environment: environment.clone(),
            server: Self::load_server_config(&environment),
            quran: Self::load_quran_config(),
            dua: Self::load_dua_config(),
            aladhan: Self::load_aladhan_config(),
            upstream: Self::load_upstream_config(),
        };

        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    fn load_server_config(env_kind: &Environment) -> ServerConfig {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://0.0.0.0:3001".to_string());
        let (host, port) = Self::parse_backend_url(&backend_url);

        let default_workers = match env_kind {
            Environment::Production => "8",
            _ => "1",
        };

        ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or(host),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| port.to_string())
                .parse()
                .unwrap_or(port),
            workers: env::var("BACKEND_WORKERS")
                .unwrap_or_else(|_| default_workers.to_string())
                .parse()
                .unwrap_or(1),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string()),
        }
    }

    fn load_quran_config() -> QuranConfig {
        let provider = env::var("QURAN_PROVIDER")
            .unwrap_or_else(|_| "equran".to_string())
            .parse()
            .unwrap_or_else(|e| {
                warn!("{}, falling back to equran", e);
                QuranProviderKind::Equran
            });

        QuranConfig {
            provider,
            equran_api_url: env::var("EQURAN_API_URL")
                .unwrap_or_else(|_| "https://equran.id/api/v2".to_string()),
            alquran_cloud_api_url: env::var("ALQURAN_CLOUD_API_URL")
                .unwrap_or_else(|_| "https://api.alquran.cloud/v1".to_string()),
        }
    }

    fn load_dua_config() -> DuaConfig {
        DuaConfig {
            api_url: env::var("DOA_API_URL")
                .unwrap_or_else(|_| "https://doa-doa-api-ahmadramadhan.fly.dev/api".to_string()),
        }
    }

    fn load_aladhan_config() -> AladhanConfig {
        AladhanConfig {
            api_url: env::var("ALADHAN_API_URL")
                .unwrap_or_else(|_| "https://api.aladhan.com/v1".to_string()),
            method: env::var("ALADHAN_METHOD")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
        }
    }

    fn load_upstream_config() -> UpstreamConfig {
        UpstreamConfig {
            timeout_seconds: env::var("UPSTREAM_TIMEOUT")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            retries: env::var("UPSTREAM_RETRIES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port cannot be 0");
        }
        if self.upstream.timeout_seconds == 0 {
            bail!("Upstream timeout cannot be 0");
        }
        for (name, api_url) in [
            ("EQURAN_API_URL", &self.quran.equran_api_url),
            ("ALQURAN_CLOUD_API_URL", &self.quran.alquran_cloud_api_url),
            ("DOA_API_URL", &self.dua.api_url),
            ("ALADHAN_API_URL", &self.aladhan.api_url),
        ] {
            if url::Url::parse(api_url).is_err() {
                bail!("{} is not a valid URL: {}", name, api_url);
            }
        }

        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!(
            "Server: {}:{} (workers: {})",
            self.server.host, self.server.port, self.server.workers
        );
        info!("Quran provider: {:?}", self.quran.provider);
        info!("Aladhan method: {}", self.aladhan.method);
        info!(
            "Upstream calls: timeout {}s, {} retries",
            self.upstream.timeout_seconds, self.upstream.retries
        );

        if self.environment == Environment::Development {
            warn!("Running in development mode");
        }
    }

    #[allow(dead_code)]
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
