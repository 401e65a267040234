use std::{sync::Arc, time::Duration};

use arc_swap::ArcSwap;
use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::constants;

/// Process-wide relay settings.
///
/// Loaded once at startup from an optional JSON file plus `RELAY_*`
/// environment variables, then activated into a [`RelayConfig`] handle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelaySetting {
    /// Upstream login URL, used verbatim when non-blank. Blank means
    /// "derive `<scheme>://<host>:<port>/j_security_check` from the
    /// inbound request".
    pub login_url: String,
    /// Comma-separated list of allowed CORS origins; absent disables CORS
    pub allowed_origins: Option<String>,
    pub app: AppSetting,
    pub upstream: UpstreamSetting,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamSetting {
    pub connect_timeout_millis: u64,
    pub timeout_millis: u64,
}

impl Default for RelaySetting {
    fn default() -> Self {
        Self {
            login_url: String::new(),
            allowed_origins: None,
            app: AppSetting::default(),
            upstream: UpstreamSetting::default(),
        }
    }
}

impl Default for AppSetting {
    fn default() -> Self {
        Self {
            address: constants::prod::APP_ADDRESS.to_owned(),
        }
    }
}

impl Default for UpstreamSetting {
    fn default() -> Self {
        Self {
            connect_timeout_millis: constants::prod::upstream::CONNECT_TIMEOUT.as_millis() as u64,
            timeout_millis: constants::prod::upstream::TIMEOUT.as_millis() as u64,
        }
    }
}

impl RelaySetting {
    /// Load settings from `config/relay.json` (optional) and `RELAY_*`
    /// environment variables. Nested fields use `__` as the separator,
    /// e.g. `RELAY_APP__ADDRESS`.
    pub fn from_sources() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/relay").required(false))
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// The configured login URL, or `None` when the relay should derive it
    /// from the inbound request.
    pub fn effective_login_url(&self) -> Option<&str> {
        let trimmed = self.login_url.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        self.allowed_origins
            .as_deref()
            .map(AllowedOrigins::parse)
            .filter(|origins| !origins.is_empty())
    }
}

impl UpstreamSetting {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_millis)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

/// Shared, atomically swappable view of the active settings.
///
/// Readers always observe either the previous or the new settings as a
/// whole, never a partial update. Reconfiguration is a rare single-writer
/// event; each activation emits one structured log line with the new
/// login URL.
#[derive(Clone)]
pub struct RelayConfig {
    inner: Arc<ArcSwap<RelaySetting>>,
}

impl RelayConfig {
    pub fn activate(setting: RelaySetting) -> Self {
        log_activation(&setting);
        Self {
            inner: Arc::new(ArcSwap::from_pointee(setting)),
        }
    }

    pub fn reconfigure(&self, setting: RelaySetting) {
        log_activation(&setting);
        self.inner.store(Arc::new(setting));
    }

    pub fn load(&self) -> Arc<RelaySetting> {
        self.inner.load_full()
    }
}

fn log_activation(setting: &RelaySetting) {
    tracing::info!(
        login_url = %setting.login_url,
        "Credential relay configured"
    );
}

/// CORS origins the relay accepts, parsed from a comma-separated list
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
