//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `bridgeview.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;
use serde_json::{Map, Value};

use bridgeview_adapter_http_axum::state::DashboardSettings;
use bridgeview_app::ports::RenderStyle;
use bridgeview_domain::bridge::BridgeContext;
use bridgeview_domain::time::offset_from_minutes;

/// Largest accepted UTC offset, one minute short of a day.
const MAX_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
    /// Host context and event seeding.
    pub bridge: BridgeConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Dashboard presentation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Auto-reload interval of live pages; `0` disables it.
    pub refresh_seconds: u32,
    pub render_style: RenderStyle,
    /// Offset applied to the `timestamp` row.
    pub utc_offset_minutes: i32,
}

/// Host context handed to the bridge, and where its first events come from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub environment: String,
    pub org_id: Option<String>,
    pub tenant: Option<String>,
    pub access_token: Option<String>,
    pub navigation: Option<String>,
    pub flags: Map<String, Value>,
    pub validation: Map<String, Value>,
    /// JSON fixture to seed the bridge with. Takes precedence over
    /// `demo_events`.
    pub events_file: Option<PathBuf>,
    pub demo_events: bool,
    /// Most events kept in memory; older arrivals are dropped first.
    pub max_events: usize,
}

impl Config {
    /// Load configuration from `bridgeview.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bridgeview.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("BRIDGEVIEW_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("BRIDGEVIEW_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("BRIDGEVIEW_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("BRIDGEVIEW_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("BRIDGEVIEW_RENDER_STYLE") {
            self.dashboard.render_style = val
                .parse()
                .map_err(|err| ConfigError::Validation(format!("{err}")))?;
        }
        if let Some(val) = lookup("BRIDGEVIEW_ENVIRONMENT") {
            self.bridge.environment = val;
        }
        if let Some(val) = lookup("BRIDGEVIEW_ACCESS_TOKEN") {
            self.bridge.access_token = Some(val);
        }
        if let Some(val) = lookup("BRIDGEVIEW_EVENTS_FILE") {
            self.bridge.events_file = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("BRIDGEVIEW_MAX_EVENTS") {
            if let Ok(max) = val.parse() {
                self.bridge.max_events = max;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.bridge.max_events == 0 {
            return Err(ConfigError::Validation(
                "max_events must be non-zero".to_string(),
            ));
        }
        if self.dashboard.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Validation(format!(
                "utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {}",
                self.dashboard.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Dashboard settings for the HTTP adapter.
    #[must_use]
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            refresh_seconds: self.dashboard.refresh_seconds,
            default_style: self.dashboard.render_style,
        }
    }
}

impl DashboardConfig {
    /// The configured offset as a chrono offset; `None` when out of range.
    #[must_use]
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        offset_from_minutes(self.utc_offset_minutes)
    }
}

impl BridgeConfig {
    /// The host context the bridge serves.
    #[must_use]
    pub fn context(&self) -> BridgeContext {
        BridgeContext {
            environment: self.environment.clone(),
            flags: self.flags.clone(),
            access_token: self.access_token.clone(),
            org_id: self.org_id.clone(),
            tenant: self.tenant.clone(),
            navigation: self.navigation.clone(),
            validation: self.validation.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bridgeviewd=info,bridgeview=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 5,
            render_style: RenderStyle::default(),
            utc_offset_minutes: 0,
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            environment: "dev".to_string(),
            org_id: None,
            tenant: None,
            access_token: None,
            navigation: None,
            flags: Map::new(),
            validation: Map::new(),
            events_file: None,
            demo_events: true,
            max_events: 10_000,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
