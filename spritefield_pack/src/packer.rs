// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Rect, Size};

use crate::occupied::OccupiedSpace;
use crate::spiral::SpiralCandidates;

/// Largest number of spiral steps a configuration may require.
///
/// The default configuration needs `(4000 / 5)^2 = 640_000`.
pub const MAX_SPIRAL_STEPS: u64 = 4_000_000;

/// Plane and spacing used for placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig {
    /// Size of the plane, centered at the origin.
    pub plane: Size,
    /// Minimum clearance between any two placed rectangles.
    pub gap: f64,
}

impl PackerConfig {
    /// Creates a configuration for a `plane` centered at the origin.
    #[must_use]
    pub const fn new(plane: Size, gap: f64) -> Self {
        Self { plane, gap }
    }

    /// Spiral steps needed to cover the plane on the gap lattice:
    /// `ceil((max(W, H) / gap)^2)`.
    ///
    /// Returns `None` for a non-positive or non-finite gap or plane, and for
    /// step counts above [`MAX_SPIRAL_STEPS`].
    #[must_use]
    pub fn spiral_steps(&self) -> Option<u64> {
        let side = self.plane.width.max(self.plane.height) / self.gap;
        let steps = (side * side).ceil();
        if self.gap <= 0.0 || !steps.is_finite() || steps > MAX_SPIRAL_STEPS as f64 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "range checked against MAX_SPIRAL_STEPS above"
        )]
        let steps = steps as u64;
        Some(steps)
    }

    /// The plane as a world-space rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let half = self.plane / 2.0;
        Rect::new(-half.width, -half.height, half.width, half.height)
    }
}

impl Default for PackerConfig {
    /// A `4000 x 4000` plane with a gap of `5`.
    fn default() -> Self {
        Self::new(Size::new(4000.0, 4000.0), 5.0)
    }
}

/// Error returned when a rectangle cannot be placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementError {
    /// The size is zero, negative, or not finite.
    EmptySize(Size),
    /// One dimension alone exceeds the plane.
    TooLarge {
        /// Requested size.
        size: Size,
        /// Plane size.
        plane: Size,
    },
    /// Every candidate position is out of bounds or taken.
    NoSpace(Size),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySize(size) => {
                write!(f, "cannot place an empty {}x{} rect", size.width, size.height)
            }
            Self::TooLarge { size, plane } => write!(
                f,
                "{}x{} rect does not fit in a {}x{} plane",
                size.width, size.height, plane.width, plane.height
            ),
            Self::NoSpace(size) => {
                write!(f, "no free space left for a {}x{} rect", size.width, size.height)
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Places rectangles around the origin in spiral order.
///
/// Each call to [`Packer::place`] probes the shared [`SpiralCandidates`] in
/// order and claims the first position where the rectangle stays inside the
/// plane and clear of every rectangle placed before it.
///
/// # Example
///
/// ```
/// use kurbo::{Rect, Size};
/// use spritefield_pack::{Packer, PackerConfig, PlacementError};
///
/// let mut packer = Packer::new(PackerConfig::new(Size::new(100.0, 100.0), 5.0));
///
/// // The plane is centered, so a 60x60 rect cannot start at the origin.
/// let placed = packer.place(Size::new(60.0, 60.0)).unwrap();
/// assert_eq!(placed, Rect::new(-10.0, -10.0, 50.0, 50.0));
///
/// // Nothing else that size fits.
/// assert!(matches!(
///     packer.place(Size::new(60.0, 60.0)),
///     Err(PlacementError::NoSpace(_))
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct Packer {
    config: PackerConfig,
    candidates: SpiralCandidates,
    occupied: OccupiedSpace,
}

impl Packer {
    /// Creates a packer and computes its candidates.
    #[must_use]
    pub fn new(config: PackerConfig) -> Self {
        let candidates = SpiralCandidates::new(&config);
        Self::with_candidates(config, candidates)
    }

    /// Creates a packer reusing candidates computed for the same configuration.
    #[must_use]
    pub fn with_candidates(config: PackerConfig, candidates: SpiralCandidates) -> Self {
        Self {
            config,
            candidates,
            occupied: OccupiedSpace::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Returns the probe order.
    #[must_use]
    pub fn candidates(&self) -> &SpiralCandidates {
        &self.candidates
    }

    /// Returns the rectangles placed so far.
    #[must_use]
    pub fn occupied(&self) -> &OccupiedSpace {
        &self.occupied
    }

    /// Returns `true` if `rect` lies inside the plane and clear of every
    /// placed rectangle.
    #[must_use]
    pub fn can_place(&self, rect: Rect) -> bool {
        let bounds = self.config.bounds();
        if rect.x0 < bounds.x0 || rect.y0 < bounds.y0 || rect.x1 > bounds.x1 || rect.y1 > bounds.y1
        {
            return false;
        }
        !self.occupied.collides(rect, self.config.gap)
    }

    /// Finds and claims a position for a rectangle of `size`.
    ///
    /// The claimed rectangle is visible to every later call.
    pub fn place(&mut self, size: Size) -> Result<Rect, PlacementError> {
        if !(size.width > 0.0 && size.height > 0.0) || !size.is_finite() {
            return Err(PlacementError::EmptySize(size));
        }
        let plane = self.config.plane;
        if size.width > plane.width || size.height > plane.height {
            return Err(PlacementError::TooLarge { size, plane });
        }

        let found = self
            .candidates
            .iter()
            .map(|origin| Rect::from_origin_size(origin, size))
            .find(|&rect| self.can_place(rect));

        match found {
            Some(rect) => {
                self.occupied.insert(rect);
                Ok(rect)
            }
            None => Err(PlacementError::NoSpace(size)),
        }
    }

    /// Forgets every placed rectangle. Candidates are kept.
    pub fn reset(&mut self) {
        self.occupied.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};

    use super::{Packer, PackerConfig, PlacementError};
    use crate::occupied::gap_collides;

    fn assert_invariants(packer: &Packer) {
        let placed = packer.occupied().as_slice();
        let bounds = packer.config().bounds();
        for (i, a) in placed.iter().enumerate() {
            assert!(
                a.x0 >= bounds.x0 && a.y0 >= bounds.y0 && a.x1 <= bounds.x1 && a.y1 <= bounds.y1,
                "{a:?} escapes {bounds:?}"
            );
            for b in &placed[i + 1..] {
                assert!(
                    !gap_collides(*a, *b, packer.config().gap),
                    "{a:?} and {b:?} overlap"
                );
            }
        }
    }

    #[test]
    fn three_squares_cluster_around_the_origin() {
        let mut packer = Packer::new(PackerConfig::default());
        let size = Size::new(100.0, 100.0);

        let first = packer.place(size).unwrap();
        let second = packer.place(size).unwrap();
        let third = packer.place(size).unwrap();

        assert_eq!(first.origin(), Point::ZERO);
        // The nearest free candidates sit one size-plus-gap away; ties go to
        // the smaller `y`, then the smaller `x`.
        assert_eq!(second.origin(), Point::new(0.0, -105.0));
        assert_eq!(third.origin(), Point::new(-105.0, 0.0));
        assert_invariants(&packer);
    }

    #[test]
    fn mixed_sizes_never_overlap() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(600.0, 600.0), 5.0));
        let sizes = [
            (32.0, 32.0),
            (64.0, 16.0),
            (17.0, 93.0),
            (128.0, 128.0),
            (5.0, 5.0),
            (48.0, 48.0),
            (200.0, 40.0),
            (40.0, 200.0),
            (1.0, 1.0),
            (77.0, 33.0),
        ];
        for (w, h) in sizes {
            packer.place(Size::new(w, h)).unwrap();
        }
        assert_eq!(packer.occupied().len(), sizes.len());
        assert_invariants(&packer);
    }

    #[test]
    fn plane_fills_up() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(100.0, 100.0), 5.0));
        let placed = packer.place(Size::new(60.0, 60.0)).unwrap();
        assert_eq!(placed, Rect::new(-10.0, -10.0, 50.0, 50.0));
        assert_eq!(
            packer.place(Size::new(60.0, 60.0)),
            Err(PlacementError::NoSpace(Size::new(60.0, 60.0)))
        );
        // A failed placement claims nothing.
        assert_eq!(packer.occupied().len(), 1);
    }

    #[test]
    fn oversized_rect_fails_before_scanning() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(100.0, 100.0), 5.0));
        let err = packer.place(Size::new(101.0, 10.0)).unwrap_err();
        assert!(matches!(err, PlacementError::TooLarge { .. }));
        assert!(packer.occupied().is_empty());
    }

    #[test]
    fn empty_sizes_are_rejected() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(100.0, 100.0), 5.0));
        for size in [
            Size::ZERO,
            Size::new(0.0, 10.0),
            Size::new(-1.0, 10.0),
            Size::new(f64::NAN, 10.0),
        ] {
            assert!(matches!(packer.place(size), Err(PlacementError::EmptySize(_))));
        }
    }

    #[test]
    fn reset_starts_a_new_generation() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(200.0, 200.0), 5.0));
        let first = packer.place(Size::new(50.0, 50.0)).unwrap();
        packer.place(Size::new(50.0, 50.0)).unwrap();

        packer.reset();
        assert!(packer.occupied().is_empty());
        assert_eq!(packer.place(Size::new(50.0, 50.0)).unwrap(), first);
    }

    #[test]
    fn can_place_checks_bounds_and_neighbours() {
        let mut packer = Packer::new(PackerConfig::new(Size::new(100.0, 100.0), 5.0));
        assert!(packer.can_place(Rect::new(-50.0, -50.0, 50.0, 50.0)));
        assert!(!packer.can_place(Rect::new(-51.0, 0.0, 0.0, 10.0)));
        assert!(!packer.can_place(Rect::new(0.0, 0.0, 10.0, 51.0)));

        packer.place(Size::new(10.0, 10.0)).unwrap();
        assert!(!packer.can_place(Rect::new(12.0, 0.0, 20.0, 10.0)));
        assert!(packer.can_place(Rect::new(15.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn shared_candidates_give_identical_layouts() {
        let config = PackerConfig::new(Size::new(300.0, 300.0), 5.0);
        let mut a = Packer::new(config);
        let mut b = Packer::with_candidates(config, a.candidates().clone());
        let sizes = [Size::new(20.0, 30.0), Size::new(45.0, 10.0), Size::new(7.0, 7.0)];
        let la: Vec<Rect> = sizes.iter().map(|&s| a.place(s).unwrap()).collect();
        let lb: Vec<Rect> = sizes.iter().map(|&s| b.place(s).unwrap()).collect();
        assert_eq!(la, lb);
    }

    #[test]
    fn spiral_steps_are_capped() {
        assert_eq!(PackerConfig::default().spiral_steps(), Some(640_000));
        assert_eq!(
            PackerConfig::new(Size::new(4000.0, 4000.0), 0.01).spiral_steps(),
            None
        );
        assert_eq!(
            PackerConfig::new(Size::new(100.0, 100.0), 0.0).spiral_steps(),
            None
        );

        let mut packer = Packer::new(PackerConfig::new(Size::new(4000.0, 4000.0), 0.01));
        assert!(packer.candidates().is_empty());
        assert!(matches!(
            packer.place(Size::new(10.0, 10.0)),
            Err(PlacementError::NoSpace(_))
        ));
    }
}
