use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GatewayError, GatewayResult};

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Top-level gateway configuration, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub http: HttpConfig,

    /// Header carrying the debug auth mock value. The mock stands in
    /// for a real identity provider.
    #[serde(default = "default_debug_auth_header")]
    pub debug_auth_header: String,

    /// Header carried into decision audit context when present.
    #[serde(default = "default_request_id_header")]
    pub request_id_header: String,
}

fn default_debug_auth_header() -> String {
    "x-debug-auth".to_string()
}

fn default_request_id_header() -> String {
    "x-request-id".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            debug_auth_header: default_debug_auth_header(),
            request_id_header: default_request_id_header(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults.
    pub fn load(path: &Path) -> GatewayResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(GatewayError::Io)?;
        let config: GatewayConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> GatewayResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GatewayError::Config(format!("TOML serialize error: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GatewayError::Io)?;
        }
        std::fs::write(path, contents).map_err(GatewayError::Io)?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> GatewayResult<()> {
        if self.http.bind.is_empty() {
            return Err(GatewayError::Config("http.bind must not be empty".into()));
        }
        if self.http.port == 0 {
            return Err(GatewayError::Config("http.port must be > 0".into()));
        }
        // Header names are matched lowercase against incoming headers.
        for (field, value) in [
            ("debug_auth_header", &self.debug_auth_header),
            ("request_id_header", &self.request_id_header),
        ] {
            if value.is_empty() || *value != value.to_lowercase() {
                return Err(GatewayError::Config(format!(
                    "{} must be a non-empty lowercase header name, got '{}'",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Return the path to the default config file location.
    pub fn default_config_path() -> PathBuf {
        std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".ideahub/config.toml"))
            .unwrap_or_else(|_| PathBuf::from(".ideahub/config.toml"))
    }
}
