//! Configuration management for the calldata-bench service.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file named by `CALLDATA_CONFIG`, and finally individual environment
//! variables. Cryptographic parameters are deliberately absent; they are
//! fixed constants of the crypto crate.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::error::{CoreError, Result};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "CALLDATA_CONFIG";

/// Origin of the bundled Vite dev frontend.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(CoreError::Config {
                key: "LOG_FORMAT".to_string(),
                reason: format!("unknown format '{}' (expected pretty or json)", other),
            }),
        }
    }
}

/// HTTP service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            log_format: LogFormat::Pretty,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(lookup)
    }

    /// Parse a TOML config file. Missing keys fall back to defaults.
    #[cfg(feature = "toml")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    #[cfg(not(feature = "toml"))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Err(CoreError::ConfigFile(format!(
            "{}: built without TOML support",
            path.as_ref().display()
        )))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CoreError::ConfigFile(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = parse_value("HOST", &host)?;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_value("PORT", &port)?;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.log_format = format.parse()?;
        }
        if let Some(limit) = lookup("MAX_BODY_BYTES") {
            self.max_body_bytes = parse_value("MAX_BODY_BYTES", &limit)?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.max_body_bytes == 0 {
            return Err(CoreError::Config {
                key: "max_body_bytes".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| CoreError::Config {
        key: key.to_string(),
        reason: format!("'{}': {}", raw, e),
    })
}
