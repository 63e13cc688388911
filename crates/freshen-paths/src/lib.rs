use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found; set the $HOME environment variable")]
    HomeNotFound,
}

/// Path construction for the `~/.freshen/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct FreshenPaths {
    freshen_dir: PathBuf,
}

impl FreshenPaths {
    /// Resolve paths from the user's home directory (`~/.freshen`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            freshen_dir: home.join(".freshen"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(freshen_dir: PathBuf) -> Self {
        Self { freshen_dir }
    }

    /// The base `~/.freshen` directory.
    pub fn freshen_dir(&self) -> &Path {
        &self.freshen_dir
    }

    /// User-level config: `~/.freshen/config.toml`.
    pub fn user_config(&self) -> PathBuf {
        self.freshen_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.freshen/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".freshen").join("config.toml")
    }
}
