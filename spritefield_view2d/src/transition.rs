// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// An animated camera move toward a target position and scale.
///
/// Progress is a function of wall-clock time only, so the move takes the same
/// time regardless of how often frames are drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTransition {
    /// Camera position when the transition began.
    pub start_position: Point,
    /// Camera scale when the transition began.
    pub start_scale: f64,
    /// Camera position at the end of the transition.
    pub target_position: Point,
    /// Camera scale at the end of the transition.
    pub target_scale: f64,
    /// Timestamp in milliseconds at which the transition began.
    pub start_time: u64,
    /// Length of the transition in milliseconds.
    pub duration: u64,
}

impl FocusTransition {
    /// Fraction of the transition completed at `now`, in `[0, 1]`.
    ///
    /// A zero duration completes immediately.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time) as f64;
        (elapsed / self.duration as f64).min(1.0)
    }

    /// Camera position and scale at progress `t`.
    #[must_use]
    pub fn sample(&self, t: f64) -> (Point, f64) {
        let position = self.start_position.lerp(self.target_position, t);
        let scale = self.start_scale + (self.target_scale - self.start_scale) * t;
        (position, scale)
    }
}
