//! Data directory resolution
//!
//! Everything PocketFin persists lives under one base directory:
//!
//! ```text
//! <base>/config.json          user settings
//! <base>/audit.log            append-only mutation log
//! <base>/data/transactions.json
//! <base>/data/goals.json
//! ```
//!
//! The base resolves to `POCKETFIN_DATA_DIR` when set (also the seam the
//! tests use), otherwise `$XDG_CONFIG_HOME/pocketfin` or
//! `~/.config/pocketfin` on Unix and `%APPDATA%\pocketfin` on Windows.

use std::path::PathBuf;

use crate::error::PocketFinError;

/// Resolved locations of every file PocketFin touches
#[derive(Debug, Clone)]
pub struct PocketFinPaths {
    base_dir: PathBuf,
}

impl PocketFinPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Fails when no base directory can be determined (e.g. `APPDATA`
    /// missing on Windows).
    pub fn new() -> Result<Self, PocketFinError> {
        match std::env::var("POCKETFIN_DATA_DIR") {
            Ok(custom) => Ok(Self {
                base_dir: PathBuf::from(custom),
            }),
            Err(_) => default_base_dir().map(|base_dir| Self { base_dir }),
        }
    }

    /// Use an explicit base directory (testing seam)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Create the base and data directories if they are missing
    pub fn ensure_directories(&self) -> Result<(), PocketFinError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                PocketFinError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(not(windows))]
fn default_base_dir() -> Result<PathBuf, PocketFinError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| PocketFinError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pocketfin"))
}

#[cfg(windows)]
fn default_base_dir() -> Result<PathBuf, PocketFinError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PocketFinError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pocketfin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let paths = PocketFinPaths::with_base_dir(base.to_path_buf());

        assert_eq!(paths.settings_file(), base.join("config.json"));
        assert_eq!(paths.audit_log(), base.join("audit.log"));
        assert_eq!(
            paths.transactions_file(),
            base.join("data").join("transactions.json")
        );
        assert_eq!(paths.goals_file(), base.join("data").join("goals.json"));
    }
}
