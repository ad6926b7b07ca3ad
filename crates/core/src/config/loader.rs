//! Config path resolution

use std::ffi::OsString;
use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "DYNREFLECT_CONFIG_DIR";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "dynreflect.toml";

/// Returns the directory holding the config file.
///
/// `$DYNREFLECT_CONFIG_DIR` when set, otherwise the current working directory.
pub fn config_dir() -> ConfigResult<PathBuf> {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV))
}

/// Returns the config file path.
///
/// Path: `{config_dir}/dynreflect.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

fn resolve_config_dir(override_dir: Option<OsString>) -> ConfigResult<PathBuf> {
    match override_dir {
        Some(dir) if dir.is_empty() => Err(ConfigError::NoConfigDirectory),
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir().map_err(ConfigError::IoError),
    }
}
