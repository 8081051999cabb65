// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spritefield View 2D: the camera over the sprite plane.
//!
//! This crate provides a small, headless camera model mapping an unbounded
//! world plane into a view measured in device pixels. It covers:
//! - Camera state: the world point shown at the view's top-left corner plus a
//!   uniform scale clamped to `[1, max_scale]`.
//! - Coordinate conversion between world and view space.
//! - Panning by a view-space delta and zooming about a view-space anchor.
//! - Animated focus transitions that fly the camera to a world rectangle.
//!
//! It does **not** own sprites, input routing, or drawing. Callers are
//! expected to:
//! - Translate raw input into [`Camera2D::pan_by_view`] and
//!   [`Camera2D::zoom_about_view_point`] calls.
//! - Call [`Camera2D::tick`] once per frame while a transition is active.
//! - Use [`Camera2D::world_to_view_rect`] and
//!   [`Camera2D::visible_world_rect`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use spritefield_view2d::Camera2D;
//!
//! let mut camera = Camera2D::new(Size::new(800.0, 600.0));
//!
//! // Zoom in about the cursor; the world point under it stays put.
//! let cursor = Point::new(50.0, 50.0);
//! let before = camera.view_to_world_point(cursor);
//! camera.zoom_about_view_point(cursor, 2.0);
//! assert_eq!(camera.view_to_world_point(cursor), before);
//!
//! // Fly to a sprite over 1.5 seconds.
//! camera.begin_focus(Rect::new(200.0, 200.0, 300.0, 300.0), 2.0, 1_500, 0);
//! camera.tick(1_500);
//! assert_eq!(camera.position(), Point::new(50.0, 100.0));
//! assert!(!camera.is_animating());
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** scale; there is no rotation.
//! - Any manual pan or zoom cancels an in-flight focus transition.
//! - Transitions are driven by elapsed time, not frame count, and snap to
//!   integer world coordinates when they finish.
//! - Timestamps are plain milliseconds supplied by the caller.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod transition;

pub use camera::{Camera2D, Camera2DDebugInfo, DEFAULT_MAX_SCALE, MIN_SCALE};
pub use transition::FocusTransition;
