// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition.
//!
//! Turns raw pointer, touch and wheel samples into the five gestures the
//! viewer understands. Pure state: callers pass positions and timestamps in,
//! gestures come out.

use iced::touch::Finger;
use iced::{Point, Vector};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Maximum delay between two presses for a double tap.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

/// Maximum distance between two presses for a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 24.0;

/// Movement needed before a press becomes a drag.
pub const DRAG_MIN_DISTANCE: f32 = 10.0;

/// Finger spread below which a pinch is too noisy to track.
pub const MIN_PINCH_DISTANCE: f32 = 10.0;

/// Magnitude factor applied per wheel line while the magnify modifier is held.
pub const WHEEL_MAGNIFY_FACTOR: f32 = 1.1;

/// A recognized gesture sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    DoubleTap,
    /// Translation from where the drag started.
    DragChanged(Vector),
    DragEnded,
    /// Magnitude relative to the start of the pinch (1.0 = unchanged).
    MagnifyChanged(f32),
    MagnifyEnded,
}

#[derive(Debug, Clone, Copy)]
struct DragTrack {
    origin: Point,
    active: bool,
}

/// The two fingers a pinch is measured between.
#[derive(Debug, Clone, Copy)]
struct Pinch {
    fingers: [Finger; 2],
    start_distance: f32,
}

#[derive(Debug, Clone, Copy)]
struct Tap {
    at: Instant,
    position: Point,
}

/// Recognizer state for one interactive surface.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    last_tap: Option<Tap>,
    drag: Option<DragTrack>,
    fingers: HashMap<Finger, Point>,
    pinch: Option<Pinch>,
    magnify_modifier: bool,
    wheel_magnitude: Option<f32>,
}

impl GestureState {
    /// Primary button or first finger went down.
    pub fn press(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        self.drag = Some(DragTrack {
            origin: position,
            active: false,
        });

        let is_double_tap = self.last_tap.is_some_and(|tap| {
            now.duration_since(tap.at) < DOUBLE_TAP_THRESHOLD
                && tap.position.distance(position) <= DOUBLE_TAP_SLOP
        });

        if is_double_tap {
            // Reset to avoid triple taps
            self.last_tap = None;
            Some(Gesture::DoubleTap)
        } else {
            self.last_tap = Some(Tap { at: now, position });
            None
        }
    }

    /// Pointer moved; only meaningful while pressed.
    pub fn move_to(&mut self, position: Point) -> Option<Gesture> {
        let drag = self.drag.as_mut()?;
        let translation = position - drag.origin;

        if !drag.active {
            if translation.x.hypot(translation.y) < DRAG_MIN_DISTANCE {
                return None;
            }
            drag.active = true;
            // A drag is not a tap.
            self.last_tap = None;
        }

        Some(Gesture::DragChanged(translation))
    }

    /// Primary button or last finger went up.
    pub fn release(&mut self) -> Option<Gesture> {
        let drag = self.drag.take()?;
        drag.active.then_some(Gesture::DragEnded)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| drag.active)
    }

    pub fn finger_pressed(
        &mut self,
        finger: Finger,
        position: Point,
        now: Instant,
    ) -> Option<Gesture> {
        self.fingers.insert(finger, position);

        // Fingers beyond the pinching pair are tracked but ignored.
        if self.pinch.is_some() {
            return None;
        }

        match self.fingers.len() {
            1 => self.press(position, now),
            2 => {
                // A second finger turns the gesture into a pinch.
                self.last_tap = None;
                let ended_drag = self.release();
                let mut ids = self.fingers.keys().copied();
                if let (Some(a), Some(b)) = (ids.next(), ids.next()) {
                    self.pinch = self.distance_between(a, b).map(|start_distance| Pinch {
                        fingers: [a, b],
                        start_distance,
                    });
                }
                ended_drag
            }
            _ => None,
        }
    }

    pub fn finger_moved(&mut self, finger: Finger, position: Point) -> Option<Gesture> {
        let tracked = self.fingers.get_mut(&finger)?;
        *tracked = position;

        if let Some(pinch) = self.pinch {
            if !pinch.fingers.contains(&finger) || pinch.start_distance < MIN_PINCH_DISTANCE {
                return None;
            }
            let [a, b] = pinch.fingers;
            let current = self.distance_between(a, b)?;
            return Some(Gesture::MagnifyChanged(current / pinch.start_distance));
        }

        if self.fingers.len() == 1 {
            self.move_to(position)
        } else {
            None
        }
    }

    pub fn finger_lifted(&mut self, finger: Finger) -> Option<Gesture> {
        self.fingers.remove(&finger)?;

        if let Some(pinch) = self.pinch {
            if !pinch.fingers.contains(&finger) {
                return None;
            }
            self.pinch = None;
            self.drag = None;
            return Some(Gesture::MagnifyEnded);
        }

        if self.fingers.is_empty() {
            self.release()
        } else {
            None
        }
    }

    /// Tracks the modifier that turns the wheel into a magnify gesture.
    /// Releasing it ends a wheel magnify session.
    pub fn modifier_changed(&mut self, held: bool) -> Option<Gesture> {
        self.magnify_modifier = held;
        if held {
            return None;
        }
        self.wheel_magnitude.take().map(|_| Gesture::MagnifyEnded)
    }

    /// Wheel scrolled by `lines` (positive = away from the user).
    pub fn wheel(&mut self, lines: f32) -> Option<Gesture> {
        if !self.magnify_modifier || lines == 0.0 {
            return None;
        }

        let magnitude = self.wheel_magnitude.unwrap_or(1.0) * WHEEL_MAGNIFY_FACTOR.powf(lines);
        self.wheel_magnitude = Some(magnitude);
        Some(Gesture::MagnifyChanged(magnitude))
    }

    fn distance_between(&self, a: Finger, b: Finger) -> Option<f32> {
        let a = self.fingers.get(&a)?;
        let b = self.fingers.get(&b)?;
        Some(a.distance(*b))
    }
}
