//! # Configuration Loader / 配置加载器
//!
//! Resolution order, later wins:
//!
//! 1. Built-in defaults (`<data root>/history.log`, `choose -n 30 -w 1000`)
//! 2. `<config root>/config.toml`, when present
//! 3. `CLIPPER_STORE` environment variable for the store path
//!
//! A config file that cannot be read or parsed is reported and ignored.

use anyhow::Context;
use std::path::{Path, PathBuf};

use clip_core::ports::AppDirsPort;
use clip_core::{AppDirs, ClipperConfig};
use clip_platform::app_dirs::DirsAppDirsAdapter;
use tracing::{debug, warn};

/// Overrides the history file location.
pub const STORE_PATH_ENV: &str = "CLIPPER_STORE";

/// Load a TOML config file and overlay it onto `base`.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read, is not valid TOML, or holds a
/// recognized key with the wrong type.
pub fn load_config(config_path: &Path, base: ClipperConfig) -> anyhow::Result<ClipperConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    base.merge_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Resolve the effective configuration for the given directories.
pub fn resolve_config_in(app_dirs: &AppDirs, store_override: Option<PathBuf>) -> ClipperConfig {
    let defaults = ClipperConfig::with_system_defaults(app_dirs.app_data_root.clone());
    let config_path = app_dirs.config_file();

    let mut config = if config_path.is_file() {
        match load_config(&config_path, defaults.clone()) {
            Ok(config) => {
                debug!(path = %config_path.display(), "Loaded config file");
                config
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "Ignoring config file, using defaults");
                defaults
            }
        }
    } else {
        defaults
    };

    if let Some(path) = store_override {
        config.store_path = path;
    }
    config
}

/// Resolve the effective configuration from the user's system directories
/// and environment.
pub fn resolve_config() -> anyhow::Result<ClipperConfig> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let store_override = std::env::var_os(STORE_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    let config = resolve_config_in(&app_dirs, store_override);
    debug!(
        store = %config.store_path.display(),
        chooser = %config.chooser.program,
        "Resolved configuration"
    );
    Ok(config)
}
