// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine.
//!
//! [`ViewerState`] is a small `Copy` record; every input event maps to one
//! pure transition `ViewerState -> ViewerState`. There is no other mutator.
//!
//! The scale axis has three logical levels (see [`ZoomLevel`]). Gestures that
//! end at `scale <= 1.0` always fall back to [`ViewerState::reset`], which
//! keeps the "unzoomed means no pan" rule true at rest.

use super::newtypes::{scale_bounds, Offset, ZoomLevel};
use super::page::{Page, PageId, Pages};
use crate::domain::error::PageError;

/// Snapshot read by the rendering layer after every transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    /// Currently displayed page.
    pub page_index: PageId,
    /// Zoom factor. In `[1.0, 5.0]` at rest.
    pub scale: f32,
    /// Pan translation.
    pub offset: Offset,
    /// Whether the page image and chrome are shown (faded in).
    pub is_animating: bool,
    /// Whether the thumbnail drawer is slid out.
    pub is_drawer_open: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            page_index: PageId::FIRST,
            scale: scale_bounds::MIN,
            offset: Offset::ZERO,
            is_animating: false,
            is_drawer_open: false,
        }
    }
}

/// One inbound call from the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    Reset,
    DoubleTap,
    DragChanged(Offset),
    DragEnded,
    MagnifyChanged(f32),
    MagnifyEnded,
    ZoomOut,
    ZoomIn,
    SelectPage(PageId),
    ToggleDrawer,
    Appeared,
}

#[allow(clippy::float_cmp)]
impl ViewerState {
    /// Fresh state for a new viewing session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies the current scale.
    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        ZoomLevel::from_scale(self.scale)
    }

    /// Returns the displayed page.
    ///
    /// # Errors
    ///
    /// Fails only if `pages` is not the list this state was driven with.
    pub fn current_page<'a>(&self, pages: &'a Pages) -> Result<&'a Page, PageError> {
        pages.get(self.page_index)
    }

    /// Back to unzoomed with no pan.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            scale: scale_bounds::MIN,
            offset: Offset::ZERO,
            ..self
        }
    }

    /// Toggles between unzoomed and maximum zoom.
    #[must_use]
    pub fn double_tap(self) -> Self {
        if self.scale == scale_bounds::MIN {
            Self {
                scale: scale_bounds::MAX,
                ..self
            }
        } else {
            self.reset()
        }
    }

    /// Follows the finger. Applied regardless of zoom; `drag_ended` snaps
    /// the offset back when unzoomed.
    #[must_use]
    pub fn drag_changed(self, translation: Offset) -> Self {
        Self {
            offset: translation,
            ..self
        }
    }

    #[must_use]
    pub fn drag_ended(self) -> Self {
        if self.scale <= scale_bounds::MIN {
            self.reset()
        } else {
            self
        }
    }

    /// Applies the raw gesture magnitude as the new scale.
    ///
    /// Only the *current* scale is checked, so `value` itself may land
    /// outside the bounds (e.g. `0.3` from unzoomed). `magnify_ended` fixes
    /// the result up once the gesture finishes.
    #[must_use]
    pub fn magnify_changed(self, value: f32) -> Self {
        if self.scale >= scale_bounds::MIN && self.scale < scale_bounds::MAX {
            Self {
                scale: value,
                ..self
            }
        } else if self.scale > scale_bounds::MAX {
            Self {
                scale: scale_bounds::MAX,
                ..self
            }
        } else {
            self
        }
    }

    #[must_use]
    pub fn magnify_ended(self) -> Self {
        if self.scale > scale_bounds::MAX {
            Self {
                scale: scale_bounds::MAX,
                ..self
            }
        } else if self.scale <= scale_bounds::MIN {
            self.reset()
        } else {
            self
        }
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        if self.scale <= scale_bounds::MIN {
            return self;
        }

        let next = Self {
            scale: self.scale - scale_bounds::STEP,
            ..self
        };
        if next.scale <= scale_bounds::MIN {
            next.reset()
        } else {
            next
        }
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        if self.scale >= scale_bounds::MAX {
            return self;
        }

        Self {
            scale: (self.scale + scale_bounds::STEP).min(scale_bounds::MAX),
            ..self
        }
    }

    /// Switches to page `id` and makes it visible.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::OutOfRange`] if `id` is not in `pages`; the
    /// caller keeps its previous state.
    pub fn select_page(self, id: PageId, pages: &Pages) -> Result<Self, PageError> {
        pages.get(id)?;
        Ok(Self {
            page_index: id,
            is_animating: true,
            ..self
        })
    }

    #[must_use]
    pub fn toggle_drawer(self) -> Self {
        Self {
            is_drawer_open: !self.is_drawer_open,
            ..self
        }
    }

    /// The screen became visible; fade content in.
    #[must_use]
    pub fn appeared(self) -> Self {
        Self {
            is_animating: true,
            ..self
        }
    }

    /// Dispatches `event` to its transition.
    ///
    /// # Errors
    ///
    /// Only [`ViewerEvent::SelectPage`] can fail, see [`Self::select_page`].
    pub fn apply(self, event: ViewerEvent, pages: &Pages) -> Result<Self, PageError> {
        let next = match event {
            ViewerEvent::Reset => self.reset(),
            ViewerEvent::DoubleTap => self.double_tap(),
            ViewerEvent::DragChanged(translation) => self.drag_changed(translation),
            ViewerEvent::DragEnded => self.drag_ended(),
            ViewerEvent::MagnifyChanged(value) => self.magnify_changed(value),
            ViewerEvent::MagnifyEnded => self.magnify_ended(),
            ViewerEvent::ZoomOut => self.zoom_out(),
            ViewerEvent::ZoomIn => self.zoom_in(),
            ViewerEvent::SelectPage(id) => return self.select_page(id, pages),
            ViewerEvent::ToggleDrawer => self.toggle_drawer(),
            ViewerEvent::Appeared => self.appeared(),
        };
        Ok(next)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn zoomed(scale: f32) -> ViewerState {
        ViewerState {
            scale,
            offset: Offset::new(12.0, -8.0),
            ..ViewerState::default()
        }
    }

    /// At rest, unzoomed must mean no pan.
    fn assert_rest_invariant(state: &ViewerState) {
        if state.scale == scale_bounds::MIN {
            assert!(state.offset.is_zero(), "offset {:?} at scale 1", state.offset);
        }
    }

    #[test]
    fn new_session_starts_unzoomed_on_first_page() {
        let state = ViewerState::new();
        assert_eq!(state.page_index, PageId::FIRST);
        assert_eq!(state.scale, 1.0);
        assert!(state.offset.is_zero());
        assert!(!state.is_animating);
        assert!(!state.is_drawer_open);
        assert_eq!(state.zoom_level(), ZoomLevel::Unzoomed);
    }

    #[test]
    fn reset_clears_scale_and_offset_only() {
        let state = ViewerState {
            is_drawer_open: true,
            ..zoomed(3.0)
        };
        let reset = state.reset();
        assert_eq!(reset.scale, 1.0);
        assert!(reset.offset.is_zero());
        assert!(reset.is_drawer_open);
    }

    #[test]
    fn double_tap_toggles_between_bounds() {
        let once = ViewerState::new().double_tap();
        assert_eq!(once.scale, 5.0);
        assert_eq!(once.zoom_level(), ZoomLevel::MaxZoomed);

        let twice = once.double_tap();
        assert_eq!(twice.scale, 1.0);
        assert!(twice.offset.is_zero());
    }

    #[test]
    fn double_tap_from_intermediate_scale_resets() {
        let state = zoomed(2.0).double_tap();
        assert_eq!(state, zoomed(2.0).reset());
    }

    #[test]
    fn drag_changed_sets_offset_even_when_unzoomed() {
        let state = ViewerState::new().drag_changed(Offset::new(40.0, 10.0));
        assert_eq!(state.offset, Offset::new(40.0, 10.0));
    }

    #[test]
    fn drag_ended_unzoomed_equals_reset() {
        let dragged = ViewerState::new().drag_changed(Offset::new(40.0, 10.0));
        assert_eq!(dragged.drag_ended(), dragged.reset());
    }

    #[test]
    fn drag_ended_zoomed_keeps_offset() {
        let dragged = zoomed(3.0).drag_changed(Offset::new(-30.0, 5.0));
        let ended = dragged.drag_ended();
        assert_eq!(ended.offset, Offset::new(-30.0, 5.0));
        assert_eq!(ended.scale, 3.0);
    }

    #[test]
    fn magnify_changed_uses_raw_magnitude() {
        let state = zoomed(3.0).magnify_changed(1.5);
        assert_eq!(state.scale, 1.5);
    }

    #[test]
    fn magnify_changed_below_one_from_unzoomed_is_applied_literally() {
        // Only the current scale is guarded, not the incoming value.
        let state = ViewerState::new().magnify_changed(0.3);
        assert_eq!(state.scale, 0.3);
        assert_eq!(state.zoom_level(), ZoomLevel::Zooming);
    }

    #[test]
    fn magnify_changed_is_ignored_at_max_zoom() {
        let state = zoomed(5.0).magnify_changed(2.0);
        assert_eq!(state.scale, 5.0);
    }

    #[test]
    fn magnify_changed_clamps_scale_above_max() {
        let state = ViewerState::new().magnify_changed(7.0);
        assert_eq!(state.scale, 7.0);
        assert_eq!(state.magnify_changed(3.0).scale, 5.0);
    }

    #[test]
    fn magnify_changed_below_one_freezes_scale() {
        // Once below 1.0 neither guard matches, so further samples are ignored.
        let state = ViewerState::new().magnify_changed(0.5).magnify_changed(2.0);
        assert_eq!(state.scale, 0.5);
    }

    #[test]
    fn magnify_ended_clamps_and_resets() {
        assert_eq!(ViewerState::new().magnify_changed(7.0).magnify_ended().scale, 5.0);

        let shrunk = ViewerState::new().magnify_changed(0.3).magnify_ended();
        assert_eq!(shrunk.scale, 1.0);
        assert!(shrunk.offset.is_zero());

        assert_eq!(zoomed(2.5).magnify_ended(), zoomed(2.5));
    }

    #[test]
    fn zoom_in_four_times_reaches_max_exactly() {
        let mut state = ViewerState::new();
        for _ in 0..4 {
            state = state.zoom_in();
        }
        assert_eq!(state.scale, 5.0);
        assert_eq!(state.zoom_in().scale, 5.0);
    }

    #[test]
    fn zoom_in_clamps_fractional_scale() {
        assert_eq!(zoomed(4.5).zoom_in().scale, 5.0);
    }

    #[test]
    fn zoom_out_to_one_resets_offset() {
        let state = zoomed(2.0).zoom_out();
        assert_eq!(state.scale, 1.0);
        assert!(state.offset.is_zero());
    }

    #[test]
    fn zoom_out_from_fractional_scale_resets() {
        let state = zoomed(1.5).zoom_out();
        assert_eq!(state, zoomed(1.5).reset());
    }

    #[test]
    fn zoom_out_when_unzoomed_is_noop() {
        let state = ViewerState::new();
        assert_eq!(state.zoom_out(), state);
    }

    #[test]
    fn button_sequences_stay_in_bounds() {
        // Exhaustive over all in/out sequences of length 8.
        for mask in 0u32..(1 << 8) {
            let mut state = ViewerState::new();
            for bit in 0..8 {
                state = if mask & (1 << bit) == 0 {
                    state.zoom_in()
                } else {
                    state.zoom_out()
                };
                assert!((1.0..=5.0).contains(&state.scale));
                assert_rest_invariant(&state);
            }
        }
    }

    #[test]
    fn select_page_sets_index_and_animation() {
        let pages = Pages::default();
        let state = ViewerState::new()
            .select_page(PageId::new(3), &pages)
            .expect("page 3 exists");
        assert_eq!(state.page_index, PageId::new(3));
        assert!(state.is_animating);
        assert_eq!(state.current_page(&pages).unwrap().image_name, "magazine-inside-left");
    }

    #[test]
    fn select_page_out_of_range_is_rejected() {
        let pages = Pages::default();
        let state = zoomed(3.0);
        for id in [0, 5, 99] {
            assert_eq!(
                state.select_page(PageId::new(id), &pages),
                Err(PageError::OutOfRange { id, count: 4 })
            );
        }
    }

    #[test]
    fn select_page_keeps_zoom() {
        let pages = Pages::default();
        let state = zoomed(3.0).select_page(PageId::new(2), &pages).unwrap();
        assert_eq!(state.scale, 3.0);
    }

    #[test]
    fn toggle_drawer_flips() {
        let state = ViewerState::new().toggle_drawer();
        assert!(state.is_drawer_open);
        assert!(!state.toggle_drawer().is_drawer_open);
    }

    #[test]
    fn appeared_shows_content() {
        assert!(ViewerState::new().appeared().is_animating);
    }

    #[test]
    fn apply_dispatches_every_event() {
        let pages = Pages::default();
        let start = zoomed(3.0);
        let cases = [
            (ViewerEvent::Reset, start.reset()),
            (ViewerEvent::DoubleTap, start.double_tap()),
            (
                ViewerEvent::DragChanged(Offset::new(1.0, 2.0)),
                start.drag_changed(Offset::new(1.0, 2.0)),
            ),
            (ViewerEvent::DragEnded, start.drag_ended()),
            (ViewerEvent::MagnifyChanged(2.0), start.magnify_changed(2.0)),
            (ViewerEvent::MagnifyEnded, start.magnify_ended()),
            (ViewerEvent::ZoomOut, start.zoom_out()),
            (ViewerEvent::ZoomIn, start.zoom_in()),
            (ViewerEvent::ToggleDrawer, start.toggle_drawer()),
            (ViewerEvent::Appeared, start.appeared()),
        ];
        for (event, expected) in cases {
            assert_eq!(start.apply(event, &pages), Ok(expected), "{event:?}");
        }
        assert!(start
            .apply(ViewerEvent::SelectPage(PageId::new(9)), &pages)
            .is_err());
    }

    #[test]
    fn gestures_settle_with_rest_invariant() {
        let pages = Pages::default();
        let gestures: [&[ViewerEvent]; 4] = [
            &[
                ViewerEvent::DragChanged(Offset::new(5.0, 5.0)),
                ViewerEvent::DragEnded,
            ],
            &[
                ViewerEvent::MagnifyChanged(0.8),
                ViewerEvent::MagnifyEnded,
            ],
            &[
                ViewerEvent::DoubleTap,
                ViewerEvent::DragChanged(Offset::new(50.0, 0.0)),
                ViewerEvent::DragEnded,
                ViewerEvent::ZoomOut,
                ViewerEvent::ZoomOut,
                ViewerEvent::ZoomOut,
                ViewerEvent::ZoomOut,
            ],
            &[
                ViewerEvent::MagnifyChanged(9.0),
                ViewerEvent::MagnifyEnded,
                ViewerEvent::DoubleTap,
            ],
        ];

        for events in gestures {
            let mut state = ViewerState::new();
            for event in events {
                state = state.apply(*event, &pages).unwrap();
            }
            assert!(state.zoom_level().is_settled());
            assert_rest_invariant(&state);
        }
    }
}
