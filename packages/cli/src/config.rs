use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use longdrive_core::constants::{LONGDRIVE_DATA_DIR, LONGDRIVE_STORE_FILE};
use longdrive_core::{longdrive_dir, DEFAULT_STORE_FILE};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    EmptyValue(&'static str),
    #[error("Invalid store file name: {0}. Must be a plain file name")]
    InvalidStoreFile(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub store_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var(LONGDRIVE_DATA_DIR) {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::EmptyValue(LONGDRIVE_DATA_DIR))
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => longdrive_dir(),
        };

        let store_file =
            env::var(LONGDRIVE_STORE_FILE).unwrap_or_else(|_| DEFAULT_STORE_FILE.to_string());

        // Only a bare name; the directory comes from LONGDRIVE_DATA_DIR
        let is_plain_name = Path::new(&store_file).file_name() == Some(OsStr::new(&store_file));
        if store_file.is_empty() || !is_plain_name {
            return Err(ConfigError::InvalidStoreFile(store_file));
        }

        Ok(Config {
            data_dir,
            store_file,
        })
    }

    /// Full path of the settings store
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }
}
