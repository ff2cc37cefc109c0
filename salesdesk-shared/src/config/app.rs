use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file extension is not one we parse.
    #[error("unsupported configuration format; use 'yaml' or 'json'")]
    UnsupportedFormat,

    /// The configuration file did not parse as the expected shape.
    #[error("malformed configuration: {message}")]
    Malformed { message: String },

    /// The merged configuration failed validation.
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Endpoint URLs for the services the client layer fetches from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrls {
    /// Endpoint returning the signed-in employee's privilege codes.
    pub privileges: String,

    /// Endpoint returning the signed-in employee's profile record.
    pub user_info: String,
}

/// The main configuration structure for the Salesdesk client layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Service endpoint lookup table.
    pub service_urls: ServiceUrls,
}

impl AppConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// An [`AppConfig`] pointing at the local development endpoints.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            service_urls: ServiceUrls {
                privileges: "http://localhost:8080/api/user-privileges".to_string(),
                user_info: "http://localhost:8080/api/user-info".to_string(),
            },
        }
    }

    /// Loads configuration from an optional file and the environment.
    ///
    /// Values resolve in order: defaults, then the configuration file (YAML
    /// or JSON, chosen by extension), then `SALESDESK_PRIVILEGES_URL` and
    /// `SALESDESK_USER_INFO_URL`. Environment variables only apply to values
    /// the file did not change, so an explicit file always wins.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to a `.yaml` or `.json` file
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, or
    /// when the merged configuration fails validation.
    pub fn load_config(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::with_defaults();

        if let Some(path) = config_path {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;

            let file_config: Self = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") => serde_yml::from_str(&content).map_err(|err| {
                    ConfigError::Malformed {
                        message: err.to_string(),
                    }
                })?,
                Some("json") => serde_json::from_str(&content).map_err(|err| {
                    ConfigError::Malformed {
                        message: err.to_string(),
                    }
                })?,
                _ => return Err(ConfigError::UnsupportedFormat),
            };

            config.service_urls = file_config.service_urls;
        }

        let defaults = Self::with_defaults();
        if config.service_urls.privileges == defaults.service_urls.privileges {
            if let Ok(url) = env::var("SALESDESK_PRIVILEGES_URL") {
                config.service_urls.privileges = url;
            }
        }
        if config.service_urls.user_info == defaults.service_urls.user_info {
            if let Ok(url) = env::var("SALESDESK_USER_INFO_URL") {
                config.service_urls.user_info = url;
            }
        }

        if let Err(errors) = config.validate() {
            return Err(ConfigError::Invalid {
                message: errors.join("; "),
            });
        }

        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns every validation failure found, one message per problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let urls = [
            ("privileges", &self.service_urls.privileges),
            ("user_info", &self.service_urls.user_info),
        ];
        for (name, url) in urls {
            if url.is_empty() {
                errors.push(format!("service URL '{name}' must not be empty"));
            } else if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(format!(
                    "service URL '{name}' must be an absolute http(s) URL: {url}"
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
