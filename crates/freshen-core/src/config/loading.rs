//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - accessor fallbacks on the section types
//! 2. **User config** - `~/.freshen/config.toml`
//! 3. **Project config** - `./.freshen/config.toml`
//! 4. **CLI arguments** - applied by the binary (highest priority)

use std::fs;
use std::path::Path;

use freshen_paths::FreshenPaths;
use tracing::{debug, warn};

use crate::config::errors::ConfigError;
use crate::config::types::{FreshenConfig, ServerSettings, WatchConfig};
use crate::config::validation::validate_config;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<FreshenConfig, ConfigError> {
    let paths = FreshenPaths::resolve()
        .inspect_err(|e| warn!(event = "core.config.user_dir_unresolved", error = %e))
        .ok();
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(paths.as_ref(), &project_root)
}

/// [`load_hierarchy`] with the user directory and project root given explicitly.
pub fn load_hierarchy_from(
    paths: Option<&FreshenPaths>,
    project_root: &Path,
) -> Result<FreshenConfig, ConfigError> {
    let mut config = FreshenConfig::default();

    if let Some(paths) = paths
        && let Some(user_config) = load_optional(&paths.user_config())?
    {
        config = merge_configs(&config, &user_config);
    }

    if let Some(project_config) = load_optional(&FreshenPaths::project_config(project_root))? {
        config = merge_configs(&config, &project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a file, treating "not found" as `None`.
fn load_optional(path: &Path) -> Result<Option<FreshenConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => {
            debug!(event = "core.config.file_loaded", path = %path.display());
            Ok(Some(config))
        }
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<FreshenConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
pub fn merge_configs(base: &FreshenConfig, override_config: &FreshenConfig) -> FreshenConfig {
    FreshenConfig {
        watch: WatchConfig::merge(&base.watch, &override_config.watch),
        server: ServerSettings::merge(&base.server, &override_config.server),
    }
}
