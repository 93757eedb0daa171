// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewer**: Initial chrome visibility
//! - **Pages**: Asset lookup
//! - **Animation**: Presentation easing durations

use std::time::Duration;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Whether the scale/offset info panel is shown at startup.
pub const DEFAULT_SHOW_INFO_PANEL: bool = true;

/// Whether the thumbnail drawer starts slid out.
pub const DEFAULT_DRAWER_OPEN: bool = false;

// ==========================================================================
// Pages Defaults
// ==========================================================================

/// Directory (relative to the working directory) holding page images.
pub const DEFAULT_ASSETS_DIR: &str = "assets/pages";

/// File extensions tried, in order, when resolving a page asset.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the spring-like ease used for resets and button zooms.
pub const SPRING_DURATION: Duration = Duration::from_millis(350);

/// Duration of the linear ease that smooths continuous gesture samples.
pub const LINEAR_DURATION: Duration = Duration::from_millis(120);

/// Fade-in duration when the screen first appears.
pub const APPEAR_FADE_DURATION: Duration = Duration::from_secs(1);

/// Fade-in duration after switching pages.
pub const PAGE_FADE_DURATION: Duration = Duration::from_millis(500);

/// Slide duration of the thumbnail drawer.
pub const DRAWER_SLIDE_DURATION: Duration = Duration::from_millis(500);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SPRING_DURATION.as_millis() > 0);
    assert!(LINEAR_DURATION.as_millis() > 0);
    assert!(LINEAR_DURATION.as_millis() < SPRING_DURATION.as_millis());
    assert!(PAGE_FADE_DURATION.as_millis() <= APPEAR_FADE_DURATION.as_millis());
};
