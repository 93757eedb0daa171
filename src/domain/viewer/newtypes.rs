// SPDX-License-Identifier: MPL-2.0
//! Viewer value objects.
//!
//! Scale is deliberately kept as a bare `f32` inside [`ViewerState`]: the
//! magnify gesture may push it outside [`scale_bounds`] until the gesture
//! ends, so a clamping newtype would hide that behavior.
//!
//! [`ViewerState`]: super::ViewerState

// =============================================================================
// Scale Bounds
// =============================================================================

/// Zoom scale bounds (1.0 to 5.0).
pub mod scale_bounds {
    /// Unzoomed scale.
    pub const MIN: f32 = 1.0;
    /// Maximum zoom scale.
    pub const MAX: f32 = 5.0;
    /// Scale change applied by the zoom in/out buttons.
    pub const STEP: f32 = 1.0;
}

const _: () = {
    assert!(scale_bounds::MIN > 0.0);
    assert!(scale_bounds::MAX > scale_bounds::MIN);
    assert!(scale_bounds::STEP > 0.0);
};

// =============================================================================
// Offset
// =============================================================================

/// Pan translation applied to the displayed image, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// The origin; the only valid offset while unzoomed.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

// =============================================================================
// ZoomLevel
// =============================================================================

/// Logical state of the scale axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomLevel {
    /// `scale == 1.0`, offset pinned at the origin.
    Unzoomed,
    /// Anything else that is not `MaxZoomed`. Only reachable mid-gesture
    /// or through the zoom buttons' intermediate steps.
    Zooming,
    /// `scale == 5.0`.
    MaxZoomed,
}

impl ZoomLevel {
    /// Classifies a raw scale value.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_scale(scale: f32) -> Self {
        if scale == scale_bounds::MIN {
            ZoomLevel::Unzoomed
        } else if scale == scale_bounds::MAX {
            ZoomLevel::MaxZoomed
        } else {
            ZoomLevel::Zooming
        }
    }

    /// Whether this level can be observed at rest between gestures.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, ZoomLevel::Unzoomed | ZoomLevel::MaxZoomed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_default_is_zero() {
        assert!(Offset::default().is_zero());
        assert!(!Offset::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn zoom_level_classifies_bounds() {
        assert_eq!(ZoomLevel::from_scale(1.0), ZoomLevel::Unzoomed);
        assert_eq!(ZoomLevel::from_scale(5.0), ZoomLevel::MaxZoomed);
        assert_eq!(ZoomLevel::from_scale(2.5), ZoomLevel::Zooming);
        assert_eq!(ZoomLevel::from_scale(0.3), ZoomLevel::Zooming);
    }

    #[test]
    fn only_bounds_are_settled() {
        assert!(ZoomLevel::Unzoomed.is_settled());
        assert!(ZoomLevel::MaxZoomed.is_settled());
        assert!(!ZoomLevel::Zooming.is_settled());
    }
}
