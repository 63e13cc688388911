//! Configuration validation logic.

use crate::config::errors::ConfigError;
use crate::config::types::FreshenConfig;

/// Upper bound on how long the server may hold a marker request open.
pub const MAX_HOLD_SECS: u64 = 300;

/// Validate a FreshenConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `watch.interval_ms` must be greater than zero
/// - `watch.base_url` must be an `http://` or `https://` URL
/// - `server.hold_secs` must not exceed [`MAX_HOLD_SECS`]
pub fn validate_config(config: &FreshenConfig) -> Result<(), ConfigError> {
    if config.watch.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "watch.interval_ms must be > 0".to_string(),
        });
    }

    let base_url = config.watch.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "watch.base_url '{}' must start with http:// or https://",
                base_url
            ),
        });
    }

    if let Some(hold) = config.server.hold_secs
        && hold > MAX_HOLD_SECS
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("server.hold_secs must be <= {}", MAX_HOLD_SECS),
        });
    }

    Ok(())
}
