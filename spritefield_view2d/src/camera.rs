// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`/`ceil`
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::transition::FocusTransition;

/// Smallest scale the camera allows.
pub const MIN_SCALE: f64 = 1.0;

/// Largest scale used by [`Camera2D::new`].
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Camera over the world plane.
///
/// `Camera2D` maps world coordinates into a view of `view_size` device pixels:
///
/// ```text
/// view = (world - position) * scale
/// world = position + view / scale
/// ```
///
/// `position` is the world point at the view's top-left corner and `scale` is
/// kept in `[MIN_SCALE, max_scale]` at all times.
#[derive(Clone, Debug)]
pub struct Camera2D {
    view_size: Size,
    position: Point,
    scale: f64,
    max_scale: f64,
    transition: Option<FocusTransition>,
}

impl Camera2D {
    /// Creates a camera at the world origin with scale `1.0`.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            position: Point::ZERO,
            scale: MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            transition: None,
        }
    }

    /// Returns the view size in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size. Position and scale are unchanged.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// World point shown at the view's top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current scale (device pixels per world unit).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Upper scale limit.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the upper scale limit and clamps the current scale into range.
    ///
    /// Limits below [`MIN_SCALE`] are raised to it.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        self.max_scale = max_scale.max(MIN_SCALE);
        self.scale = self.clamp_scale(self.scale);
    }

    /// Clamps `scale` into `[MIN_SCALE, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return MIN_SCALE;
        }
        scale.clamp(MIN_SCALE, self.max_scale)
    }

    /// Moves the camera so that `position` is at the view's top-left corner.
    ///
    /// Cancels any focus transition.
    pub fn set_position(&mut self, position: Point) {
        self.transition = None;
        self.position = position;
    }

    /// Pans by a delta in view space.
    ///
    /// Dragging the content right by `delta` moves the camera left by
    /// `delta / scale` world units. Cancels any focus transition.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        self.transition = None;
        self.position -= delta / self.scale;
    }

    /// Sets the scale to `new_scale` (clamped), keeping the world point under
    /// `anchor` fixed in view space.
    ///
    /// Cancels any focus transition.
    pub fn zoom_about_view_point(&mut self, anchor: Point, new_scale: f64) {
        self.transition = None;
        let scale = self.clamp_scale(new_scale);
        let world = self.view_to_world_point(anchor);
        self.scale = scale;
        self.position = world - anchor.to_vec2() / scale;
    }

    /// Multiplies the scale by `factor` about `anchor`.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_by_factor(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        self.zoom_about_view_point(anchor, self.scale * factor);
    }

    /// Puts the world origin at the center of the view at the current scale.
    pub fn center_on_origin(&mut self) {
        self.transition = None;
        let half = self.view_size / (2.0 * self.scale);
        self.position = Point::new(-half.width, -half.height);
    }

    /// Camera position and scale that center `rect` at `zoom`.
    ///
    /// The zoom is clamped like any other scale and the position is rounded to
    /// whole world units.
    #[must_use]
    pub fn focus_target(&self, rect: Rect, zoom: f64) -> (Point, f64) {
        let scale = self.clamp_scale(zoom);
        let center = rect.center();
        let half = self.view_size / (2.0 * scale);
        let position = Point::new(
            (center.x - half.width).round(),
            (center.y - half.height).round(),
        );
        (position, scale)
    }

    /// Starts flying the camera to center `rect` at `zoom`.
    ///
    /// Replaces any transition already in flight.
    pub fn begin_focus(&mut self, rect: Rect, zoom: f64, duration: u64, now: u64) {
        let (target_position, target_scale) = self.focus_target(rect, zoom);
        self.transition = Some(FocusTransition {
            start_position: self.position,
            start_scale: self.scale,
            target_position,
            target_scale,
            start_time: now,
            duration,
        });
    }

    /// Drops the current transition, leaving the camera where it is.
    pub fn cancel_focus(&mut self) {
        self.transition = None;
    }

    /// Returns `true` while a focus transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The focus transition in flight, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&FocusTransition> {
        self.transition.as_ref()
    }

    /// Advances the focus transition to `now`.
    ///
    /// Returns `true` if the camera moved along a transition. When the
    /// transition completes, the position snaps to integer world coordinates
    /// and the transition is cleared.
    pub fn tick(&mut self, now: u64) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        let t = transition.progress(now);
        let (position, scale) = transition.sample(t);
        self.scale = self.clamp_scale(scale);
        if t >= 1.0 {
            self.position = Point::new(position.x.round(), position.y.round());
            self.transition = None;
        } else {
            self.position = position;
        }
        true
    }

    /// Transform mapping world coordinates into view coordinates.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(-self.position.to_vec2())
    }

    /// Converts a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        ((pt - self.position) * self.scale).to_point()
    }

    /// Converts a view-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.position + pt.to_vec2() / self.scale
    }

    /// Converts a world-space rectangle into view coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.world_to_view_point(rect.origin());
        let p1 = self.world_to_view_point(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Returns the visible world-space rectangle.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.view_size / self.scale)
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Camera2DDebugInfo {
        Camera2DDebugInfo {
            view_size: self.view_size,
            position: self.position,
            scale: self.scale,
            max_scale: self.max_scale,
            visible_world_rect: self.visible_world_rect(),
            transition: self.transition,
        }
    }
}

/// Debug snapshot of a [`Camera2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Camera2DDebugInfo {
    /// View size in device pixels.
    pub view_size: Size,
    /// World point at the view's top-left corner.
    pub position: Point,
    /// Current scale.
    pub scale: f64,
    /// Upper scale limit.
    pub max_scale: f64,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Focus transition in flight, if any.
    pub transition: Option<FocusTransition>,
}
