//! Per-user directories for configuration and log files.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{RwError, RwResult};

/// Directory holding rotated log files.
///
/// - Windows: `%APPDATA%/Rewrite`
/// - macOS: `~/Library/Application Support/Rewrite`
/// - Linux: `~/.local/share/Rewrite`
pub fn data_dir() -> RwResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| RwError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Directory holding `config.toml`.
///
/// - Windows: `%APPDATA%/Rewrite`
/// - macOS: `~/Library/Application Support/Rewrite`
/// - Linux: `~/.config/Rewrite`
pub fn config_dir() -> RwResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| RwError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_namespaced() {
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
        if let Ok(dir) = data_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
