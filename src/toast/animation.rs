// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of the toast's geometry.
//!
//! [`GeometryAnimation`] is a single driver that is reconfigured in place for
//! each slide leg: its start value, end value and duration are overwritten and
//! it is restarted, so there is never more than one animation per toast.
//!
//! Time is always passed in explicitly. The widget feeds it frame instants from
//! the event loop; tests feed it synthetic instants.

use super::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic ease-out: starts fast, decelerates.
    EaseOut,
    /// Quadratic ease-in-out: slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`, output stays in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Interpolates a [`Rect`] from a start value to an end value.
#[derive(Debug, Clone)]
pub struct GeometryAnimation {
    start_value: Rect,
    end_value: Rect,
    duration: Duration,
    easing: Easing,
    /// `Some` while the animation is running.
    started_at: Option<Instant>,
}

impl GeometryAnimation {
    /// Creates a stopped animation with no motion.
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            start_value: Rect::default(),
            end_value: Rect::default(),
            duration,
            easing,
            started_at: None,
        }
    }

    /// Overwrites the leg's endpoints and duration. A running leg is stopped.
    pub fn configure(&mut self, start_value: Rect, end_value: Rect, duration: Duration) {
        self.start_value = start_value;
        self.end_value = end_value;
        self.duration = duration;
        self.started_at = None;
    }

    /// Starts (or restarts) the configured leg at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn start_value(&self) -> Rect {
        self.start_value
    }

    #[must_use]
    pub fn end_value(&self) -> Rect {
        self.end_value
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Instant at which the running leg reaches its end value.
    #[must_use]
    pub fn finish_time(&self) -> Option<Instant> {
        self.started_at.map(|started| started + self.duration)
    }

    /// Linear progress in `[0, 1]`. A stopped animation reports `0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated rectangle at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> Rect {
        self.start_value
            .lerp(&self.end_value, self.easing.apply(self.progress(now)))
    }

    /// Stops the leg and returns its finish instant once `now` has reached it.
    ///
    /// Returns `Some` exactly once per started leg.
    pub fn poll_finished(&mut self, now: Instant) -> Option<Instant> {
        let finish = self.finish_time()?;
        if now >= finish {
            self.started_at = None;
            Some(finish)
        } else {
            None
        }
    }
}
