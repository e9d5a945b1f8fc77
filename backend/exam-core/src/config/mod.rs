use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

/// Base URLs of the four downstream services this service depends on.
///
/// There are no serde defaults here on purpose: a config file that names
/// the section but omits a URL fails at parse time instead of silently
/// probing a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub assessment_url: String,
    pub student_url: String,
    pub config_url: String,
    pub session_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            assessment_url: String::from("http://localhost:8081"),
            student_url: String::from("http://localhost:8082"),
            config_url: String::from("http://localhost:8083"),
            session_url: String::from("http://localhost:8084"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub services: ServicesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_bind_address() -> String {
    String::from("0.0.0.0")
}
fn default_port() -> u16 {
    8080
}

// ============================================
// URL NORMALIZATION
// ============================================

/// Normalize a downstream base URL: reject empty or malformed values and
/// strip any trailing slash so path joining stays predictable.
#[track_caller]
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("Service URL cannot be empty"),
        });
    }

    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid service URL format: {raw}"),
        });
    }

    Url::parse(raw).map_err(|e| ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("Invalid service URL: {raw}: {e}"),
    })?;

    Ok(raw.trim_end_matches('/').to_string())
}

impl ServicesConfig {
    /// Return a copy with every base URL validated and normalized.
    pub fn normalized(self) -> Result<Self, ConfigError> {
        Ok(Self {
            assessment_url: normalize_base_url(&self.assessment_url)?,
            student_url: normalize_base_url(&self.student_url)?,
            config_url: normalize_base_url(&self.config_url)?,
            session_url: normalize_base_url(&self.session_url)?,
        })
    }
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file yields defaults; a present but corrupted or invalid
    /// file is an error so startup fails fast instead of probing the
    /// wrong dependencies.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Self::default().normalized();
        }

        // Read file
        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        // Parse JSON
        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        // Validate, then normalize the service URLs
        config.validate()?;
        let config = config.normalized()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename for atomicity (no corruption on crash).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Directory creation fails
    /// - Serialization fails
    /// - Write fails
    /// - Rename fails
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        // Validate before saving
        self.validate()?;

        // Ensure directory exists
        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        // Serialize to JSON
        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        // Write to temp file
        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Version check
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.server.bind_address.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("bind_address cannot be empty"),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("port must be non-zero"),
            });
        }

        Ok(())
    }

    fn normalized(self) -> Result<Self, ConfigError> {
        let Self {
            version,
            server,
            services,
        } = self;

        Ok(Self {
            version,
            server,
            services: services.normalized()?,
        })
    }
}
