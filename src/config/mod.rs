//! Runtime configuration, resolved once at startup from the CLI/environment.

use crate::cli::parser::Cli;
use crate::db::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{DEFAULT_TIMEZONE, parse_timezone};
use chrono_tz::Tz;
use std::fmt;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub token: String,
    pub database: DatabaseUrl,
    pub port: u16,
    pub prefix: String,
    pub timezone: Tz,
    pub log_level: String,
}

impl Config {
    /// Validate parsed options. Missing token or database URL is fatal.
    pub fn from_cli(cli: Cli) -> AppResult<Self> {
        let token = non_empty(cli.token).ok_or(AppError::MissingConfig("DISCORD_TOKEN"))?;
        let database_url =
            non_empty(cli.database_url).ok_or(AppError::MissingConfig("DATABASE_URL"))?;
        let database = DatabaseUrl::parse(&database_url)?;

        let timezone = parse_timezone(
            non_empty(cli.timezone)
                .as_deref()
                .unwrap_or(DEFAULT_TIMEZONE),
        )?;

        Ok(Self {
            token,
            database,
            port: cli.port.unwrap_or(DEFAULT_PORT),
            prefix: non_empty(cli.prefix).unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            timezone,
            log_level: non_empty(cli.log_level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"****")
            .field("database", &self.database.masked())
            .field("port", &self.port)
            .field("prefix", &self.prefix)
            .field("timezone", &self.timezone.name())
            .field("log_level", &self.log_level)
            .finish()
    }
}
