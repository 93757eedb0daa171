// SPDX-License-Identifier: MPL-2.0
//! `iced_pinch` is a pinch-and-zoom image viewer built with the Iced GUI framework.
//!
//! The zoom and pan rules live in [`domain::viewer`] as a pure state machine;
//! everything else (gestures, easing, chrome, settings, localization) sits
//! around it.

#![doc(html_root_url = "https://docs.rs/iced_pinch/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
