//! Environment-based application configuration.
//!
//! Values are read once at startup, after `dotenvy` has loaded an optional `.env` file.
//! Only `DATABASE_URL` is required; every other variable has a default. Values that are
//! present but unusable fail startup with [`ConfigError::InvalidEnvVar`].

use std::net::SocketAddr;

use chrono::{FixedOffset, TimeDelta};
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::time_window::VenueTime,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_VENUE_UTC_OFFSET: &str = "+00:00";
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 1;
const DEFAULT_SWEEP_SCHEDULE: &str = "0 * * * * *";
const DEFAULT_MAIL_FROM: &str = "no-reply@courtopia.local";

/// Deployment environment, selects the default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "info",
        }
    }
}

/// Where reminder emails are delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// HTTP relay endpoint; `None` logs messages instead of sending them.
    pub relay_url: Option<Url>,
    pub relay_token: Option<String>,
    pub from: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    pub venue: VenueTime,
    /// How far ahead of a booking's start its reminder becomes due.
    pub reminder_lead: TimeDelta,
    /// Cron expression for the promotion and reminder sweep.
    pub sweep_schedule: String,
    pub mail: MailConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present was valid
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or an invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = parse_var(
            "BIND_ADDR",
            var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            |value| value.parse::<SocketAddr>().map_err(|e| e.to_string()),
        )?;

        let environment = parse_var(
            "ENVIRONMENT",
            var("ENVIRONMENT").unwrap_or_else(|| Environment::Development.as_str().to_string()),
            |value| match value.to_ascii_lowercase().as_str() {
                "development" => Ok(Environment::Development),
                "production" => Ok(Environment::Production),
                _ => Err("expected development or production".to_string()),
            },
        )?;

        let offset = parse_var(
            "VENUE_UTC_OFFSET",
            var("VENUE_UTC_OFFSET").unwrap_or_else(|| DEFAULT_VENUE_UTC_OFFSET.to_string()),
            |value| {
                value
                    .parse::<FixedOffset>()
                    .map_err(|_| "expected an offset such as +07:00".to_string())
            },
        )?;

        let reminder_lead = match var("REMINDER_LEAD_MINUTES") {
            Some(value) => parse_var("REMINDER_LEAD_MINUTES", value, |value| {
                match value.parse::<i64>() {
                    Ok(minutes) if (0..=24 * 60).contains(&minutes) => {
                        Ok(TimeDelta::minutes(minutes))
                    }
                    Ok(_) => Err("must be between 0 and 1440".to_string()),
                    Err(e) => Err(e.to_string()),
                }
            })?,
            None => TimeDelta::minutes(DEFAULT_REMINDER_LEAD_MINUTES),
        };

        let sweep_schedule =
            var("SWEEP_SCHEDULE").unwrap_or_else(|| DEFAULT_SWEEP_SCHEDULE.to_string());

        let relay_url = match var("MAIL_RELAY_URL") {
            Some(value) => Some(parse_var("MAIL_RELAY_URL", value, |value| {
                Url::parse(value).map_err(|e| e.to_string())
            })?),
            None => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            environment,
            venue: VenueTime::new(offset),
            reminder_lead,
            sweep_schedule,
            mail: MailConfig {
                relay_url,
                relay_token: var("MAIL_RELAY_TOKEN"),
                from: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            },
        })
    }
}

fn parse_var<T>(
    name: &str,
    value: String,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(value.trim()).map_err(|reason| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason,
    })
}
