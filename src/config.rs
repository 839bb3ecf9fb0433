//! Process configuration, read from the environment (and `.env` if present).

use serenity::model::id::{GuildId, UserId};
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("{var} has an invalid value `{value}`: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub database_max_connections: u32,
    /// When set, messages from any other guild are ignored.
    pub allowed_guild_id: Option<GuildId>,
    /// Text that must precede every command. Empty means no prefix.
    pub command_prefix: String,
    /// Users allowed to run `oaddcash`.
    pub admin_ids: Vec<UserId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the variables may come from the host.
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                    expected: "a positive integer",
                })?,
            None => 5,
        };

        let allowed_guild_id = match lookup("SERVER_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(GuildId::new(parse_snowflake("SERVER_ID", &raw)?)),
            None => None,
        };

        let admin_ids = match lookup("ADMIN_IDS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_snowflake("ADMIN_IDS", s).map(UserId::new))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            allowed_guild_id,
            command_prefix: lookup("COMMAND_PREFIX")
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            admin_ids,
        })
    }
}

fn parse_snowflake(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| ConfigError::Invalid {
            var,
            value: raw.to_string(),
            expected: "a Discord snowflake id",
        })
}
