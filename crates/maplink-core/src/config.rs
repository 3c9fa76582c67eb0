use crate::error::ConfigError;
use crate::platform::Platform;

/// Process-level defaults for front ends. Per-call options override these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLinkConfig {
    pub platform: Platform,
    pub log_level: String,
    pub always_include_google: bool,
    pub dialog_title: Option<String>,
    pub dialog_message: Option<String>,
    pub cancel_text: Option<String>,
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_config() -> Result<MapLinkConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_config_from_env() -> Result<MapLinkConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so tests
/// can use a plain `HashMap` instead of the process environment.
fn build_config<F>(lookup: F) -> Result<MapLinkConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let platform = or_default("MAPLINK_PLATFORM", "android")
        .parse::<Platform>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "MAPLINK_PLATFORM".to_string(),
            reason,
        })?;
    let log_level = or_default("MAPLINK_LOG_LEVEL", "info");
    let always_include_google = parse_bool("MAPLINK_ALWAYS_INCLUDE_GOOGLE", "false")?;

    Ok(MapLinkConfig {
        platform,
        log_level,
        always_include_google,
        dialog_title: optional("MAPLINK_DIALOG_TITLE"),
        dialog_message: optional("MAPLINK_DIALOG_MESSAGE"),
        cancel_text: optional("MAPLINK_CANCEL_TEXT"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
