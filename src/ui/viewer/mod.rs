// SPDX-License-Identifier: MPL-2.0
//! Pinch-and-zoom viewer screen.
//!
//! - [`component`] owns the viewer state and maps messages to transitions
//! - [`pane`] draws the page and recognizes gestures
//! - [`controls`], [`drawer`] and [`info_panel`] are the chrome around it

pub mod component;
pub mod controls;
pub mod drawer;
pub mod info_panel;
pub mod pane;

pub use component::{key_message, Effect, Message, State, ViewEnv};
