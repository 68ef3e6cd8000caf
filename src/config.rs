use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default calculation endpoint
pub const DEFAULT_BASE_URL: &str = "https://fever-sandbox.ew.r.appspot.com/calculate";

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "charge-calc.toml";

/// Environment variable prefix, e.g. `CHARGE_CALC__CLIENT__BASE_URL`
pub const ENV_PREFIX: &str = "CHARGE_CALC";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Calculation endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; unset means wait indefinitely
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from an optional file layered under environment variables
///
/// A missing file is not an error; every setting has a default.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    let url = url::Url::parse(&cfg.client.base_url)
        .map_err(|e| anyhow::anyhow!("Invalid client base_url '{}': {}", cfg.client.base_url, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Client base_url must use http or https, got '{}'",
            url.scheme()
        );
    }

    if cfg.client.timeout_seconds == Some(0) {
        anyhow::bail!("Client timeout_seconds must be greater than 0 when set");
    }

    if !matches!(cfg.logging.format.as_str(), "text" | "json") {
        anyhow::bail!(
            "Logging format must be 'text' or 'json', got '{}'",
            cfg.logging.format
        );
    }

    Ok(())
}
