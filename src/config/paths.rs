//! Path management for rentcalc
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default output directory for generated statements.
//!
//! ## Path Resolution Order
//!
//! 1. `RENTCALC_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rentcalc` or `~/.config/rentcalc`
//! 3. Windows: `%APPDATA%\rentcalc`

use std::path::PathBuf;

use crate::error::RentError;

/// Manages all paths used by rentcalc
#[derive(Debug, Clone)]
pub struct RentPaths {
    /// Base directory for all rentcalc data
    base_dir: PathBuf,
}

impl RentPaths {
    /// Create a new RentPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RentError> {
        let base_dir = if let Ok(custom) = std::env::var("RENTCALC_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RentPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/rentcalc/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default output directory for generated statements
    pub fn statements_dir(&self) -> PathBuf {
        self.base_dir.join("statements")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), RentError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.statements_dir())
            .map_err(|e| RentError::Io(format!("Failed to create statements directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RentError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| RentError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("rentcalc"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RentError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RentError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rentcalc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.statements_dir(), temp_dir.path().join("statements"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.statements_dir().exists());
    }
}
