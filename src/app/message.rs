// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    /// Animation frame while something is easing.
    Tick(Instant),
    /// A key press no widget captured.
    KeyPressed { key: Key, modifiers: Modifiers },
    /// The main window is on screen.
    WindowOpened,
    /// The settings warning banner was closed.
    DismissWarning,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PINCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory holding the page images.
    /// Takes precedence over `PINCH_ASSETS_DIR` and the `[pages]` setting.
    pub assets_dir: Option<String>,
}
