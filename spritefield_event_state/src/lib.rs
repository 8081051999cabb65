// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spritefield Event State: small state machines for canvas input.
//!
//! Each module tracks just enough state across events to turn raw positions
//! into camera operations:
//!
//! - [`drag`]: pointer or single-finger drags, yielding per-move deltas.
//! - [`pinch`]: two-finger pinches, yielding a zoom factor and an anchor.
//! - [`debounce`]: hold the latest value until a quiet period has elapsed.
//!
//! None of them know about cameras, sprites, or any event system. They accept
//! view-space positions and caller-supplied millisecond timestamps.
//!
//! ## Drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use spritefield_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start("middle", Point::new(10.0, 10.0));
//! assert_eq!(drag.update(Point::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//!
//! // Releasing a different button leaves the drag alone.
//! assert!(!drag.end_if("left"));
//! assert!(drag.end_if("middle"));
//! ```
//!
//! ## Pinch
//!
//! ```rust
//! use kurbo::Point;
//! use spritefield_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! let step = pinch.update(Point::new(-50.0, 0.0), Point::new(150.0, 0.0)).unwrap();
//! assert_eq!(step.factor, 2.0);
//! assert_eq!(step.midpoint, Point::new(50.0, 0.0));
//! ```
//!
//! ## Debounce
//!
//! ```rust
//! use spritefield_event_state::debounce::Debounce;
//!
//! let mut commit = Debounce::new(100);
//! commit.schedule(1.5, 0);
//! commit.schedule(2.0, 40);
//! assert_eq!(commit.poll(120), None);
//! assert_eq!(commit.poll(140), Some(2.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod debounce;
pub mod drag;
pub mod pinch;
