// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use spritefield_view2d::Camera2D;

/// Opacity of a fade that started at `start`, at time `now`.
///
/// Rises linearly from 0 to exactly 1 at `start + duration`; a zero duration
/// is fully opaque immediately.
pub fn fade_opacity(start: u64, duration: u64, now: u64) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    if elapsed >= duration {
        return 1.0;
    }
    elapsed as f64 / duration as f64
}

/// A sprite that found a place on the plane.
#[derive(Clone, Debug)]
pub struct PlacedSprite<I> {
    /// Image handle from the host.
    pub image: I,
    /// World rectangle. Never changes after placement.
    pub rect: Rect,
    /// Opacity as of the last draw.
    pub opacity: f64,
    /// When the fade in started, in milliseconds.
    pub fade_start: u64,
    /// Position in the sorted identifier list.
    pub index: usize,
}

impl<I> PlacedSprite<I> {
    /// A freshly placed, fully transparent sprite.
    pub fn new(image: I, rect: Rect, index: usize, now: u64) -> Self {
        Self {
            image,
            rect,
            opacity: 0.0,
            fade_start: now,
            index,
        }
    }

    /// Recomputes the opacity for `now` and returns it.
    pub fn update_opacity(&mut self, fade_duration: u64, now: u64) -> f64 {
        self.opacity = fade_opacity(self.fade_start, fade_duration, now);
        self.opacity
    }

    /// Whether the world point lies inside the sprite, edges included.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.rect.x0 && pt.x <= self.rect.x1 && pt.y >= self.rect.y0 && pt.y <= self.rect.y1
    }

    /// Destination rectangle on the surface, in whole pixels.
    pub fn screen_rect(&self, camera: &Camera2D) -> Rect {
        let origin = camera.world_to_view_point(self.rect.origin());
        let size = self.rect.size() * camera.scale();
        Rect::from_origin_size(origin.round(), size.round())
    }
}
