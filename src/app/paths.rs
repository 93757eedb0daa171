// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PINCH_CONFIG_DIR`, `PINCH_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate for config, the working
//!    directory for page assets
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.assets_dir);
//! ```

use crate::config::DEFAULT_ASSETS_DIR;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Pinch";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PINCH_CONFIG_DIR";

/// Environment variable to override the page assets directory.
pub const ENV_ASSETS_DIR: &str = "PINCH_ASSETS_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and assets directories.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    let (config_set, assets_set) =
        set_overrides(&CLI_CONFIG_DIR, &CLI_ASSETS_DIR, config_dir, assets_dir);
    if !(config_set && assets_set) {
        tracing::debug!(config_set, assets_set, "CLI path overrides already initialized");
    }
}

/// Sets each cell independently; returns which ones took the new value.
fn set_overrides(
    config_cell: &OnceLock<Option<PathBuf>>,
    assets_cell: &OnceLock<Option<PathBuf>>,
    config_dir: Option<String>,
    assets_dir: Option<String>,
) -> (bool, bool) {
    let config_set = config_cell.set(config_dir.map(PathBuf::from)).is_ok();
    let assets_set = assets_cell.set(assets_dir.map(PathBuf::from)).is_ok();
    (config_set, assets_set)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/Pinch/`
/// - macOS: `~/Library/Application Support/Pinch/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Pinch\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory page images are read from.
///
/// `configured` is the `[pages] assets_dir` value from `settings.toml`; it
/// ranks below the CLI and the environment.
pub fn get_assets_dir(configured: Option<PathBuf>) -> PathBuf {
    get_cli_assets_dir()
        .or_else(|| env_dir(ENV_ASSETS_DIR))
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}
