//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Datasets
//!
//! ```bash
//! export PANTRY_CSV="data/food_rows.csv"
//! export INSTITUTION_CSV="data/cuny_food_rows.csv"
//! ```
//!
//! ## Mail delivery
//!
//! SMTP is enabled only when `SMTP_HOST` is set. Without it, contact messages
//! are written to the log instead of being sent.
//!
//! ```bash
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_PORT="587"
//! export SMTP_USERNAME="pantry-bot@example.com"
//! export SMTP_PASSWORD="app-password"
//! ```
//!
//! `SMTP_USERNAME` and `SMTP_PASSWORD` must be set together.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_BOROUGH` - Borough selected on first load (default: `Manhattan`)
//! - `MAP_DEFAULT_LAT` / `MAP_DEFAULT_LON` - Map center when no pantry is plotted
//!   (default: `40.7831` / `-73.9712`)
//! - `MAP_ZOOM` - Initial zoom level (default: 12)
//! - `SMTP_TIMEOUT_SECONDS` - Upper bound for one delivery attempt (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::views::map::MapSettings;
use crate::domain::entities::Borough;

/// SMTP relay settings, present only when `SMTP_HOST` is set.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_seconds: u64,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub pantry_csv: String,
    pub institution_csv: String,
    pub default_borough: Borough,
    pub map: MapSettings,
    pub smtp: Option<SmtpSettings>,
    /// Upper bound for a single delivery attempt; expiry counts as a failure.
    pub delivery_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let pantry_csv =
            env::var("PANTRY_CSV").unwrap_or_else(|_| "data/food_rows.csv".to_string());
        let institution_csv =
            env::var("INSTITUTION_CSV").unwrap_or_else(|_| "data/cuny_food_rows.csv".to_string());

        let default_borough = parse_var("DEFAULT_BOROUGH", Borough::Manhattan)?;

        let map = MapSettings {
            default_latitude: parse_var("MAP_DEFAULT_LAT", MapSettings::default().default_latitude)?,
            default_longitude: parse_var(
                "MAP_DEFAULT_LON",
                MapSettings::default().default_longitude,
            )?,
            zoom: parse_var("MAP_ZOOM", MapSettings::default().zoom)?,
        };

        let delivery_timeout_seconds = parse_var("SMTP_TIMEOUT_SECONDS", 10)?;
        let smtp = Self::load_smtp(delivery_timeout_seconds)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            pantry_csv,
            institution_csv,
            default_borough,
            map,
            smtp,
            delivery_timeout_seconds,
        })
    }

    /// Loads SMTP settings when `SMTP_HOST` is set.
    ///
    /// Empty credentials are treated as absent.
    fn load_smtp(timeout_seconds: u64) -> Result<Option<SmtpSettings>> {
        let Ok(host) = env::var("SMTP_HOST") else {
            return Ok(None);
        };

        let port = parse_var("SMTP_PORT", 587)?;
        let username = env::var("SMTP_USERNAME").ok().filter(|v| !v.is_empty());
        let password = env::var("SMTP_PASSWORD").ok().filter(|v| !v.is_empty());

        Ok(Some(SmtpSettings {
            host,
            port,
            username,
            password,
            timeout_seconds,
        }))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a dataset path is empty
    /// - the default map center or zoom is out of range
    /// - the delivery timeout is 0 or above 300 seconds
    /// - SMTP host/port are empty or only one of username/password is set
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.pantry_csv.trim().is_empty() {
            anyhow::bail!("PANTRY_CSV must not be empty");
        }
        if self.institution_csv.trim().is_empty() {
            anyhow::bail!("INSTITUTION_CSV must not be empty");
        }

        if !(-90.0..=90.0).contains(&self.map.default_latitude) {
            anyhow::bail!(
                "MAP_DEFAULT_LAT must be between -90 and 90, got {}",
                self.map.default_latitude
            );
        }
        if !(-180.0..=180.0).contains(&self.map.default_longitude) {
            anyhow::bail!(
                "MAP_DEFAULT_LON must be between -180 and 180, got {}",
                self.map.default_longitude
            );
        }
        if self.map.zoom == 0 || self.map.zoom > 19 {
            anyhow::bail!("MAP_ZOOM must be between 1 and 19, got {}", self.map.zoom);
        }

        if self.delivery_timeout_seconds == 0 || self.delivery_timeout_seconds > 300 {
            anyhow::bail!(
                "SMTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.delivery_timeout_seconds
            );
        }

        if let Some(ref smtp) = self.smtp {
            if smtp.host.trim().is_empty() {
                anyhow::bail!("SMTP_HOST must not be empty when set");
            }
            if smtp.port == 0 {
                anyhow::bail!("SMTP_PORT must be greater than 0");
            }
            if smtp.username.is_some() != smtp.password.is_some() {
                anyhow::bail!("SMTP_USERNAME and SMTP_PASSWORD must be set together");
            }
        }

        Ok(())
    }

    /// Returns whether outbound mail goes through SMTP.
    pub fn is_smtp_enabled(&self) -> bool {
        self.smtp.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Pantry dataset: {}", self.pantry_csv);
        tracing::info!("  Institution dataset: {}", self.institution_csv);
        tracing::info!("  Default borough: {}", self.default_borough);

        if let Some(ref smtp) = self.smtp {
            tracing::info!("  SMTP: {} (enabled)", describe_smtp(smtp));
        } else {
            tracing::info!("  SMTP: disabled, messages are logged");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Renders SMTP settings for logging with the password masked.
fn describe_smtp(smtp: &SmtpSettings) -> String {
    match (&smtp.username, &smtp.password) {
        (Some(user), Some(_)) => format!("{}:***@{}:{}", user, smtp.host, smtp.port),
        _ => format!("{}:{}", smtp.host, smtp.port),
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
