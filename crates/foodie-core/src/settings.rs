use crate::settings_types::AppSettings;
use crate::ConfigError;

pub const DEFAULT_CONFIG_BASE_URL: &str = "https://creativeclub.ie";
pub const DEFAULT_USER_AGENT: &str = "foodie/0.1 (storefront)";

/// Load application settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_settings() -> Result<AppSettings, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_settings_from_env()
}

/// Load application settings from environment variables already in the process.
///
/// Unlike [`load_app_settings`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_settings_from_env() -> Result<AppSettings, ConfigError> {
    build_app_settings(|key| std::env::var(key))
}

/// Build settings using the provided env-var lookup function.
///
/// Every variable has a default; only malformed values fail.
fn build_app_settings<F>(lookup: F) -> Result<AppSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let config_base_url = parse_base_url(&or_default(
        "FOODIE_CONFIG_BASE_URL",
        DEFAULT_CONFIG_BASE_URL,
    ))?;
    let request_timeout_secs = parse_positive_u64("FOODIE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FOODIE_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("FOODIE_LOG_LEVEL", "info");
    let availability_interval_secs =
        parse_positive_u64("FOODIE_AVAILABILITY_INTERVAL_SECS", "60")?;

    Ok(AppSettings {
        config_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
        availability_interval_secs,
    })
}

/// Require an http(s) scheme and strip any trailing slash so shop paths can be
/// appended with a single `/`.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());

    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "FOODIE_CONFIG_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got {raw:?}"),
        })
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
