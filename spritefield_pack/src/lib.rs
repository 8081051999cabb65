// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spritefield Pack: collision-free placement of rectangles on a bounded plane.
//!
//! Sprites arrive one at a time with sizes that are only known once their
//! image has been decoded. This crate assigns each of them a top-left world
//! coordinate so that:
//! - every placed rectangle lies inside a plane of `W x H` centered at the
//!   origin, and
//! - no two placed rectangles come closer than a fixed gap.
//!
//! The probe order is a square spiral walked outward from the origin on a
//! lattice of `gap`-sized steps, sorted by distance from the origin. It is
//! computed once per configuration ([`SpiralCandidates`]) and is independent of
//! the order in which sprites arrive, so placements cluster around the center.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use spritefield_pack::{Packer, PackerConfig};
//!
//! let mut packer = Packer::new(PackerConfig::new(Size::new(1000.0, 1000.0), 5.0));
//!
//! let first = packer.place(Size::new(100.0, 100.0)).unwrap();
//! assert_eq!(first.origin(), Point::ZERO);
//!
//! let second = packer.place(Size::new(100.0, 100.0)).unwrap();
//! assert!(!spritefield_pack::gap_collides(first, second, 5.0));
//! ```
//!
//! ## Design notes
//!
//! - Placement costs `O(candidates x occupied)`. Galleries are small and the
//!   plane is bounded, so no spatial index is maintained.
//! - Placement never relocates a rectangle; [`Packer::reset`] discards all of
//!   them at once when a new sprite set is loaded.
//! - Placement can fail: see [`PlacementError`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod occupied;
mod packer;
mod spiral;

pub use occupied::{OccupiedSpace, gap_collides};
pub use packer::{MAX_SPIRAL_STEPS, Packer, PackerConfig, PlacementError};
pub use spiral::SpiralCandidates;
