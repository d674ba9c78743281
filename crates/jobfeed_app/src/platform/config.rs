use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobfeed_core::{
    FeedSettings, DEFAULT_DEBOUNCE, DEFAULT_NEAR_BOTTOM_MARGIN_PX, DEFAULT_PAGE_SIZE,
    DEFAULT_PAGE_STEP, DEFAULT_THROTTLE,
};
use jobfeed_engine::{FetchSettings, DEFAULT_ENDPOINT};
use jobfeed_logging::feed_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "jobfeed.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid catalog endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Host configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub page_size: u32,
    pub page_step: u32,
    pub debounce_ms: u64,
    pub throttle_ms: u64,
    pub near_bottom_margin_px: f64,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_bytes: u64,
    pub redirect_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_step: DEFAULT_PAGE_STEP,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            throttle_ms: DEFAULT_THROTTLE.as_millis() as u64,
            near_bottom_margin_px: DEFAULT_NEAR_BOTTOM_MARGIN_PX,
            connect_timeout_ms: None,
            request_timeout_ms: None,
            max_bytes: fetch.max_bytes,
            redirect_limit: fetch.redirect_limit,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })?;
        if self.page_size == 0 {
            return Err(ConfigError::Zero { field: "page_size" });
        }
        if self.page_step == 0 {
            return Err(ConfigError::Zero { field: "page_step" });
        }
        if self.max_bytes == 0 {
            return Err(ConfigError::Zero { field: "max_bytes" });
        }
        Ok(())
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            page_size: self.page_size,
            page_step: self.page_step,
            debounce: Duration::from_millis(self.debounce_ms),
            throttle: Duration::from_millis(self.throttle_ms),
            near_bottom_margin_px: self.near_bottom_margin_px,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
        }
    }
}

/// Loads and validates the config at `path`; a missing file yields defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(text) => ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            feed_info!("No config at {:?}; using defaults", path);
            AppConfig::default()
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    config.validate()?;
    feed_info!("Loaded config: endpoint={} page_size={}", config.endpoint, config.page_size);
    Ok(config)
}
