use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use freshen_core::ServerSettings;

/// Resolved server settings, all defaults applied.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub notes_dir: PathBuf,
    /// How long to hold a marker request that already names the current token.
    pub hold: Duration,
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            bind: settings.bind(),
            notes_dir: settings.notes_dir(),
            hold: settings.hold(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&ServerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = ServerSettings {
            hold_secs: Some(0),
            notes_dir: Some(PathBuf::from("/srv/notes")),
            ..Default::default()
        };
        let config = ServerConfig::from(&settings);
        assert_eq!(config.hold, Duration::ZERO);
        assert_eq!(config.notes_dir, PathBuf::from("/srv/notes"));
        assert_eq!(config.bind.port(), 8000);
    }
}
