// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input routing: pointer, wheel and touch events to camera operations.
//!
//! Positions are in surface-local pixels. Every handler that changes what is
//! on screen requests a frame; the draw itself happens in
//! [`Canvas::frame`](crate::Canvas::frame).
//!
//! Manual input always wins over a focus transition: drags, wheel zooms and
//! pinches cancel any transition in flight.

use kurbo::Point;
use spritefield_event_state::debounce::Debounce;
use spritefield_event_state::drag::DragState;
use spritefield_event_state::pinch::PinchState;
use spritefield_surface::DrawingSurface;

use crate::canvas::Canvas;
use crate::host::Host;

/// Scale change per unit of wheel delta, before the configured speed.
const WHEEL_STEP: f64 = 0.01;

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Usually the left button. Clicks focus sprites.
    Primary,
    /// Usually the wheel button. Drags pan.
    Middle,
    /// Usually the right button. Drags pan.
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragSource {
    Button(Button),
    Touch,
}

/// Gesture state carried between input events.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InputState {
    drag: DragState<DragSource>,
    pinch: PinchState,
    pub(crate) scale_commit: Debounce<f64>,
    pub(crate) pointer: Option<Point>,
}

impl InputState {
    pub(crate) fn new(wheel_debounce: u64) -> Self {
        Self {
            drag: DragState::default(),
            pinch: PinchState::default(),
            scale_commit: Debounce::new(wheel_debounce),
            pointer: None,
        }
    }
}

impl<H, S> Canvas<H, S>
where
    H: Host,
    S: DrawingSurface<Image = H::Image>,
{
    /// A button went down at `pos`.
    ///
    /// [`Button::Primary`] focuses the first sprite under the pointer, edges
    /// included, and returns its index in draw order. The other buttons start
    /// a pan and cancel any focus transition.
    pub fn pointer_down(&mut self, pos: Point, button: Button, now: u64) -> Option<usize> {
        self.input.pointer = Some(pos);
        if button == Button::Primary {
            let world = self.camera.view_to_world_point(pos);
            let hit = self.sprites.iter().position(|s| s.contains(world))?;
            self.focus(hit, now);
            return Some(hit);
        }
        self.input.drag.start(DragSource::Button(button), pos);
        self.camera.cancel_focus();
        self.request_redraw();
        None
    }

    /// The pointer moved to `pos`. Pans while a button drag is active.
    pub fn pointer_move(&mut self, pos: Point) {
        if let Some(DragSource::Button(_)) = self.input.drag.source()
            && let Some(delta) = self.input.drag.update(pos)
        {
            self.camera.pan_by_view(delta);
        }
        self.input.pointer = Some(pos);
        self.binding.request_frame();
    }

    /// A button was released. Ends the drag it started, if any.
    pub fn pointer_up(&mut self, button: Button) {
        self.input.drag.end_if(DragSource::Button(button));
    }

    /// Wheel input at `pos`. Positive `delta_y` zooms out.
    ///
    /// The camera zooms immediately about `pos`; the new scale reaches
    /// [`UiState::scale`](crate::UiState::scale) only once the wheel has been
    /// quiet for the configured debounce period.
    pub fn wheel(&mut self, pos: Point, delta_y: f64, now: u64) {
        let target = self.camera.scale() - delta_y * WHEEL_STEP * self.config.wheel_zoom_speed;
        self.camera.zoom_about_view_point(pos, target);
        self.input.scale_commit.schedule(self.camera.scale(), now);
        self.input.pointer = Some(pos);
        self.binding.request_frame();
    }

    /// Touches began. One finger starts a pan, two start a pinch.
    pub fn touch_start(&mut self, touches: &[Point]) {
        match *touches {
            [touch] => {
                self.input.drag.start(DragSource::Touch, touch);
                self.input.pointer = Some(touch);
            }
            [a, b] => self.input.pinch.start(a, b),
            _ => {}
        }
    }

    /// Touches moved. One finger pans; two fingers zoom by the change in
    /// their distance, about their midpoint.
    pub fn touch_move(&mut self, touches: &[Point], now: u64) {
        match *touches {
            [touch] => {
                if self.input.drag.source() != Some(DragSource::Touch) {
                    return;
                }
                if let Some(delta) = self.input.drag.update(touch) {
                    self.camera.pan_by_view(delta);
                }
                self.input.pointer = Some(touch);
                self.binding.request_frame();
            }
            [a, b] => {
                let Some(step) = self.input.pinch.update(a, b) else {
                    return;
                };
                self.camera.zoom_by_factor(step.midpoint, step.factor);
                self.input.scale_commit.schedule(self.camera.scale(), now);
                self.binding.request_frame();
            }
            _ => {}
        }
    }

    /// All touches ended.
    pub fn touch_end(&mut self) {
        self.input.drag.end();
        self.input.pinch.end();
    }

    /// When the host should next call [`Canvas::advance_timers`], if at all.
    pub fn next_timer_deadline(&self) -> Option<u64> {
        self.input.scale_commit.deadline()
    }

    /// Runs timers due at `now`.
    pub fn advance_timers(&mut self, now: u64) {
        self.commit_due_scale(now);
    }
}
