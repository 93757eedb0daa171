// SPDX-License-Identifier: MPL-2.0
//! Presentation-only easing toward the latest viewer target.
//!
//! The viewer state always holds resolved targets; a [`Tween`] only decides
//! what is drawn while the picture catches up.

use crate::domain::viewer::Offset;
use std::time::{Duration, Instant};

/// Easing curves used by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Slight overshoot, then settle. Used for resets and button zooms.
    Spring,
    /// Constant speed. Used to smooth continuous gesture samples.
    Linear,
    /// Decelerating. Used for fades and the drawer slide.
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::Spring => {
                // easeOutBack
                const C1: f32 = 1.701_58;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u.powi(3) + C1 * u.powi(2)
            }
        }
    }
}

/// Values that can be interpolated.
pub trait Lerp: Copy {
    #[must_use]
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Offset {
    fn lerp(self, to: Self, t: f32) -> Self {
        Offset::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// A value moving from one point to another over time.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T> {
    from: T,
    to: T,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp + PartialEq> Tween<T> {
    /// A value at rest.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Starts moving toward `to` from wherever the value is at `now`.
    pub fn go(&mut self, to: T, now: Instant, duration: Duration, easing: Easing) {
        if to == self.to && !self.is_animating(now) {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    /// Starts over from `from`, e.g. to replay a fade.
    pub fn restart(&mut self, from: T, to: T, now: Instant, duration: Duration, easing: Easing) {
        self.from = from;
        self.to = to;
        self.started = Some(now);
        self.duration = duration;
        self.easing = easing;
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        match self.progress(now) {
            Some(t) => self.from.lerp(self.to, self.easing.apply(t)),
            None => self.to,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now).is_some_and(|t| t < 1.0)
    }

    fn progress(&self, now: Instant) -> Option<f32> {
        let started = self.started?;
        if self.duration.is_zero() {
            return None;
        }
        let elapsed = now.saturating_duration_since(started);
        Some((elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
    }
}
