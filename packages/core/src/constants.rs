// ABOUTME: Environment variable names and default storage locations
// ABOUTME: Centralized so the CLI and tests agree on where settings live

use std::path::PathBuf;

/// Directory holding the settings store
pub const LONGDRIVE_DATA_DIR: &str = "LONGDRIVE_DATA_DIR";

/// File name of the settings store inside the data directory
pub const LONGDRIVE_STORE_FILE: &str = "LONGDRIVE_STORE_FILE";

/// Store file name used when `LONGDRIVE_STORE_FILE` is unset
pub const DEFAULT_STORE_FILE: &str = "settings.json";

/// Get the default Long Drive Log data directory
///
/// Uses the platform data directory (`~/.local/share/longdrive` on Linux)
/// and falls back to the working directory when none is available.
pub fn longdrive_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("longdrive")
}
