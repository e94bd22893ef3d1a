use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::placement::{EligibilityBoundary, PlacementPolicy, TransitionPolicy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the registrar service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub placement: PlacementSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            placement: PlacementSettings::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Registrar rules and the optional roster loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct PlacementSettings {
    pub seed_path: Option<PathBuf>,
    pub policy: PlacementPolicy,
}

impl PlacementSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let seed_path = env::var("PLACEMENT_SEED_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let eligibility_boundary = match env::var("PLACEMENT_ELIGIBILITY_BOUNDARY") {
            Ok(value) => EligibilityBoundary::parse(&value)
                .ok_or(ConfigError::InvalidEligibilityBoundary { value })?,
            Err(_) => EligibilityBoundary::default(),
        };

        let transitions = match env::var("PLACEMENT_STATUS_TRANSITIONS") {
            Ok(value) => TransitionPolicy::parse(&value)
                .ok_or(ConfigError::InvalidTransitionPolicy { value })?,
            Err(_) => TransitionPolicy::default(),
        };

        Ok(Self {
            seed_path,
            policy: PlacementPolicy {
                eligibility_boundary,
                transitions,
            },
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidEligibilityBoundary { value: String },
    InvalidTransitionPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidEligibilityBoundary { value } => write!(
                f,
                "PLACEMENT_ELIGIBILITY_BOUNDARY must be 'inclusive' or 'exclusive', got '{}'",
                value
            ),
            ConfigError::InvalidTransitionPolicy { value } => write!(
                f,
                "PLACEMENT_STATUS_TRANSITIONS must be 'permissive' or 'guarded', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidEligibilityBoundary { .. }
            | ConfigError::InvalidTransitionPolicy { .. } => None,
        }
    }
}
