// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - The pinch-and-zoom screen: image pane, controls, drawer, info panel
//! - [`state`] - Gesture recognition and presentation easing
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
