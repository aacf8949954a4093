/// Configuration for nearest
///
/// The only setting is where the directory list lives. By default that is
/// `~/Documents/cd-nearest.csv`, but callers (and tests) can point it anywhere.

use crate::error::{NearestError, Result};
use std::path::{Path, PathBuf};

/// Name of the list file inside the documents folder
pub const LIST_FILE_NAME: &str = "cd-nearest.csv";

/// Folder under the home directory that holds the list file
pub const DOCUMENTS_DIR: &str = "Documents";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    /// Build the default configuration from the user's home directory
    ///
    /// # Returns
    /// * `Ok(Config)` - Points at `<home>/Documents/cd-nearest.csv`
    /// * `Err(NearestError::HomeDirNotFound)` - If the home directory is unknown
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(NearestError::HomeDirNotFound)?;
        Ok(Self::in_home(&home))
    }

    /// Default layout under an explicit home directory
    pub fn in_home(home: &Path) -> Self {
        Self {
            storage_path: home.join(DOCUMENTS_DIR).join(LIST_FILE_NAME),
        }
    }

    pub fn with_storage_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            storage_path: path.into(),
        }
    }
}
