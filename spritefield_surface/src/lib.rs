// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spritefield Surface: the raster target a canvas draws into.
//!
//! [`DrawingSurface`] is the narrow interface the render step needs from a
//! host's 2D raster: clear, fill and stroke axis-aligned rectangles, draw an
//! image into a destination rectangle with an alpha, and switch image
//! smoothing off for crisp pixel art at non-integer scales.
//!
//! All rectangles are in surface pixels. The image handle type is chosen by
//! the implementation, so a host can hand out whatever its decoder produces.
//!
//! [`RecordingSurface`] implements the trait by logging every call as a
//! [`SurfaceEvent`]. It does not rasterize anything; it exists so tests and
//! debugging tools can assert on exactly what was drawn.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use peniko::Color;
//! use spritefield_surface::{DrawingSurface, RecordingSurface, SurfaceEvent};
//!
//! let mut surface = RecordingSurface::<u32>::new(Size::new(64.0, 64.0));
//! surface.clear();
//! surface.fill_rect(Rect::new(0.0, 0.0, 32.0, 32.0), Color::from_rgb8(0x25, 0x25, 0x25));
//! surface.draw_image(&7, Rect::new(8.0, 8.0, 24.0, 24.0), 0.5);
//!
//! assert_eq!(surface.write_count(), 3);
//! assert!(matches!(
//!     surface.events()[2],
//!     SurfaceEvent::DrawImage { image: 7, alpha, .. } if alpha == 0.5
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

pub use recording::{RecordingSurface, SurfaceEvent};

use kurbo::{Rect, Size};
use peniko::Color;

/// A resizable 2D raster surface.
pub trait DrawingSurface {
    /// Handle to a decoded image that can be drawn onto this surface.
    type Image;

    /// Current size in pixels.
    fn size(&self) -> Size;

    /// Resizes the backing raster. Contents after a resize are unspecified.
    fn resize(&mut self, size: Size);

    /// Whether a drawing context could be acquired.
    ///
    /// A canvas refuses to start on an unavailable surface.
    fn is_available(&self) -> bool {
        true
    }

    /// Clears the whole surface to transparent.
    fn clear(&mut self);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the outline of `rect` with a one pixel line.
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` scaled into `dest`, multiplied by `alpha` in `[0, 1]`.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect, alpha: f64);

    /// Enables or disables interpolation when images are scaled.
    fn set_image_smoothing(&mut self, enabled: bool);
}
