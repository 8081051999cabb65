// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::Color;

use crate::DrawingSurface;

/// Call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent<I> {
    /// The surface was resized.
    Resize(Size),
    /// The surface was cleared.
    Clear,
    /// A rectangle was filled.
    FillRect {
        /// Destination in surface pixels.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A rectangle outline was stroked.
    StrokeRect {
        /// Destination in surface pixels.
        rect: Rect,
        /// Stroke color.
        color: Color,
    },
    /// An image was drawn.
    DrawImage {
        /// The image handle, cloned at the time of the call.
        image: I,
        /// Destination in surface pixels.
        dest: Rect,
        /// Alpha multiplier.
        alpha: f64,
        /// Whether smoothing was enabled when the image was drawn.
        smoothing: bool,
    },
    /// Image smoothing was switched.
    SetImageSmoothing(bool),
}

/// A [`DrawingSurface`] that records calls instead of drawing.
///
/// Image handles are cloned into the log, so `I` is usually a small id or an
/// `Arc`.
#[derive(Clone, Debug)]
pub struct RecordingSurface<I> {
    size: Size,
    available: bool,
    smoothing: bool,
    events: Vec<SurfaceEvent<I>>,
}

impl<I> RecordingSurface<I> {
    /// Creates an available surface of the given size with smoothing enabled.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            available: true,
            smoothing: true,
            events: Vec::new(),
        }
    }

    /// Creates a surface that reports no drawing context.
    pub fn unavailable(size: Size) -> Self {
        Self {
            available: false,
            ..Self::new(size)
        }
    }

    /// Returns a slice of recorded events in call order.
    pub fn events(&self) -> &[SurfaceEvent<I>] {
        &self.events
    }

    /// Clears the event log but keeps size and smoothing state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Removes and returns the event log.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent<I>> {
        core::mem::take(&mut self.events)
    }

    /// Number of recorded calls.
    pub fn write_count(&self) -> usize {
        self.events.len()
    }

    /// Current smoothing mode.
    pub fn image_smoothing(&self) -> bool {
        self.smoothing
    }

    /// Iterates over the recorded image draws as `(image, dest, alpha)`.
    pub fn drawn_images(&self) -> impl Iterator<Item = (&I, Rect, f64)> + '_ {
        self.events.iter().filter_map(|event| match event {
            SurfaceEvent::DrawImage {
                image, dest, alpha, ..
            } => Some((image, *dest, *alpha)),
            _ => None,
        })
    }
}

impl<I: Clone> DrawingSurface for RecordingSurface<I> {
    type Image = I;

    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.events.push(SurfaceEvent::Resize(size));
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn clear(&mut self) {
        self.events.push(SurfaceEvent::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.events.push(SurfaceEvent::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.events.push(SurfaceEvent::StrokeRect { rect, color });
    }

    fn draw_image(&mut self, image: &I, dest: Rect, alpha: f64) {
        self.events.push(SurfaceEvent::DrawImage {
            image: image.clone(),
            dest,
            alpha,
            smoothing: self.smoothing,
        });
    }

    fn set_image_smoothing(&mut self, enabled: bool) {
        self.smoothing = enabled;
        self.events.push(SurfaceEvent::SetImageSmoothing(enabled));
    }
}
