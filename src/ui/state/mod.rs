// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Presentation-side state kept apart from the viewer domain rules: raw input
//! recognition and animation toward the latest target.

pub mod gesture;
pub mod transition;

// Re-export commonly used types for convenience
pub use gesture::{Gesture, GestureState};
pub use transition::{Easing, Tween};
