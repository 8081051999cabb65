// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing and the redraw decision.

use kurbo::Point;

use crate::host::FrameId;

/// Outcome of one [`Canvas::frame`](crate::Canvas::frame) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult {
    /// Nothing changed since the last draw; the surface was not touched.
    Skipped,
    /// The scene was drawn.
    Drawn {
        /// A fade or camera transition is still running and another frame
        /// has been requested.
        animating: bool,
    },
}

/// Keeps at most one frame request in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: Option<FrameId>,
}

impl FrameCoalescer {
    /// Calls `request` unless a frame is already pending. Returns whether it
    /// was called.
    pub fn request(&mut self, request: impl FnOnce() -> FrameId) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(request());
        true
    }

    /// Clears the pending request once its callback runs.
    pub fn on_frame(&mut self) {
        self.pending = None;
    }

    /// Takes the pending request so the caller can cancel it.
    pub fn cancel(&mut self) -> Option<FrameId> {
        self.pending.take()
    }

    /// The pending request, if any.
    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }
}

/// What was on screen after the last draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderState {
    last_position: Option<Point>,
    last_scale: Option<f64>,
    manual: bool,
}

impl RenderState {
    /// Forces the next frame to draw.
    pub fn request_manual(&mut self) {
        self.manual = true;
    }

    /// Whether a forced redraw is outstanding.
    pub fn manual(&self) -> bool {
        self.manual
    }

    /// Decides whether the scene must be drawn.
    pub fn needs_redraw(
        &self,
        fading: bool,
        position: Point,
        scale: f64,
        transition_active: bool,
    ) -> bool {
        fading
            || self.manual
            || transition_active
            || self.last_position != Some(position)
            || self.last_scale != Some(scale)
    }

    /// Records the camera that was just drawn and clears the forced flag.
    pub fn mark_drawn(&mut self, position: Point, scale: f64) {
        self.last_position = Some(position);
        self.last_scale = Some(scale);
        self.manual = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_draws() {
        let state = RenderState::default();
        assert!(state.needs_redraw(false, Point::ZERO, 1.0, false));
    }

    #[test]
    fn unchanged_scene_is_clean() {
        let mut state = RenderState::default();
        state.mark_drawn(Point::new(3.0, 4.0), 2.0);
        assert!(!state.needs_redraw(false, Point::new(3.0, 4.0), 2.0, false));
    }

    #[test]
    fn each_condition_dirties() {
        let mut state = RenderState::default();
        let p = Point::new(3.0, 4.0);
        state.mark_drawn(p, 2.0);

        assert!(state.needs_redraw(true, p, 2.0, false));
        assert!(state.needs_redraw(false, Point::new(3.5, 4.0), 2.0, false));
        assert!(state.needs_redraw(false, p, 2.5, false));
        assert!(state.needs_redraw(false, p, 2.0, true));

        state.request_manual();
        assert!(state.manual());
        assert!(state.needs_redraw(false, p, 2.0, false));
        state.mark_drawn(p, 2.0);
        assert!(!state.manual());
    }

    #[test]
    fn coalescer_holds_one_request() {
        let mut frames = FrameCoalescer::default();
        let mut next = 0;
        let mut ask = || {
            next += 1;
            FrameId(next)
        };
        assert!(frames.request(&mut ask));
        assert!(!frames.request(&mut ask));
        assert_eq!(frames.pending(), Some(FrameId(1)));
        frames.on_frame();
        assert!(frames.request(&mut ask));
        assert_eq!(frames.cancel(), Some(FrameId(2)));
        assert_eq!(frames.pending(), None);
    }
}
