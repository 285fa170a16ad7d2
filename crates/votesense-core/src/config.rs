use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::policy::{AggregationStrategy, RankOrder};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds a value that cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds a value that cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("VOTESENSE_ENV", "development"))?;
    let log_level = or_default("VOTESENSE_LOG_LEVEL", "info");
    let strategy = parse_policy::<AggregationStrategy>(
        "VOTESENSE_STRATEGY",
        &or_default("VOTESENSE_STRATEGY", "weighted"),
    )?;
    let rank_order = parse_policy::<RankOrder>(
        "VOTESENSE_RANK_ORDER",
        &or_default("VOTESENSE_RANK_ORDER", "input"),
    )?;
    let candidates_path = PathBuf::from(or_default(
        "VOTESENSE_CANDIDATES_PATH",
        "./config/candidates.yaml",
    ));

    Ok(AppConfig {
        env,
        log_level,
        strategy,
        rank_order,
        candidates_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VOTESENSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_policy<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>().map_err(|reason| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
