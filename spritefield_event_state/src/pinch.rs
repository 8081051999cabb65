// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! [`PinchState`] remembers the distance between the two fingers at the
//! previous event. Each [`PinchState::update`] reports how much that distance
//! changed as a multiplicative factor, together with the current midpoint so
//! the caller can zoom about it.

use kurbo::Point;

/// One step of a pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Ratio of the current finger distance to the previous one.
    pub factor: f64,
    /// Midpoint between the two fingers.
    pub midpoint: Point,
    /// Current finger distance.
    pub distance: f64,
}

/// Tracks the finger distance of an in-progress pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Starts (or restarts) a pinch with fingers at `a` and `b`.
    pub fn start(&mut self, a: Point, b: Point) {
        self.last_distance = Some(a.distance(b));
    }

    /// Records new finger positions.
    ///
    /// Returns `None` if no pinch was being tracked (tracking starts now) or if
    /// the previous distance was zero.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let distance = a.distance(b);
        let previous = self.last_distance.replace(distance)?;
        if previous <= 0.0 {
            return None;
        }
        Some(PinchStep {
            factor: distance / previous,
            midpoint: a.midpoint(b),
            distance,
        })
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a pinch is tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::PinchState;

    #[test]
    fn spreading_fingers_zooms_in() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(100.0, 100.0), Point::new(200.0, 100.0));

        let step = pinch
            .update(Point::new(75.0, 100.0), Point::new(225.0, 100.0))
            .unwrap();
        assert_eq!(step.factor, 1.5);
        assert_eq!(step.midpoint, Point::new(150.0, 100.0));
        assert_eq!(step.distance, 150.0);
    }

    #[test]
    fn factors_are_relative_to_the_previous_event() {
        let mut pinch = PinchState::default();
        pinch.start(Point::ZERO, Point::new(100.0, 0.0));
        pinch.update(Point::ZERO, Point::new(200.0, 0.0));
        let step = pinch.update(Point::ZERO, Point::new(100.0, 0.0)).unwrap();
        assert_eq!(step.factor, 0.5);
    }

    #[test]
    fn untracked_update_starts_tracking() {
        let mut pinch = PinchState::default();
        assert!(pinch.update(Point::ZERO, Point::new(10.0, 0.0)).is_none());
        assert!(pinch.is_active());
        let step = pinch.update(Point::ZERO, Point::new(20.0, 0.0)).unwrap();
        assert_eq!(step.factor, 2.0);
    }

    #[test]
    fn coincident_fingers_do_not_divide_by_zero() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!(pinch.update(Point::ZERO, Point::new(10.0, 0.0)).is_none());
    }

    #[test]
    fn end_stops_tracking() {
        let mut pinch = PinchState::default();
        pinch.start(Point::ZERO, Point::new(1.0, 0.0));
        pinch.end();
        assert!(!pinch.is_active());
    }
}
