//! TOML configuration for `freshen watch` and `freshen serve`.
//!
//! Every field is optional in the file; accessors on the section types supply
//! the defaults. See [`loading`] for the file hierarchy.

mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{load_config_file, load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{FreshenConfig, ServerSettings, WatchConfig};
pub use validation::validate_config;

impl FreshenConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
