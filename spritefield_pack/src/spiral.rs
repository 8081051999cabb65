// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precomputed probe order for the packer.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::packer::PackerConfig;

/// Candidate top-left positions, closest to the origin first.
///
/// Built by walking an integer square spiral outward from the origin, scaling
/// each lattice point by the gap, keeping the points that fall inside the
/// plane, and sorting by squared distance from the origin (ties broken by `y`,
/// then `x`).
///
/// The list is shared: cloning is cheap, and a new sprite generation reuses
/// the same candidates.
#[derive(Clone)]
pub struct SpiralCandidates {
    points: Arc<[Point]>,
}

impl SpiralCandidates {
    /// Computes the candidates for `config`.
    ///
    /// The spiral takes [`PackerConfig::spiral_steps`] steps, which covers the
    /// whole plane on the gap lattice. Configurations without a usable step
    /// count (see [`MAX_SPIRAL_STEPS`](crate::MAX_SPIRAL_STEPS)) yield no candidates.
    #[must_use]
    pub fn new(config: &PackerConfig) -> Self {
        let Some(steps) = config.spiral_steps() else {
            return Self {
                points: Arc::from(Vec::new()),
            };
        };
        let gap = config.gap;
        let half_w = config.plane.width / 2.0;
        let half_h = config.plane.height / 2.0;

        let mut lattice: Vec<(i64, i64)> = Vec::new();
        let (mut x, mut y) = (0_i64, 0_i64);
        let (mut dx, mut dy) = (0_i64, -1_i64);
        for _ in 0..steps {
            let wx = x as f64 * gap;
            let wy = y as f64 * gap;
            if wx >= -half_w && wx <= half_w && wy >= -half_h && wy <= half_h {
                lattice.push((x, y));
            }
            if x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y) {
                (dx, dy) = (-dy, dx);
            }
            x += dx;
            y += dy;
        }

        // Exact integer ordering on the lattice matches the world ordering
        // because every point is scaled by the same gap.
        lattice.sort_unstable_by_key(|&(x, y)| (x * x + y * y, y, x));

        let points: Vec<Point> = lattice
            .into_iter()
            .map(|(x, y)| Point::new(x as f64 * gap, y as f64 * gap))
            .collect();
        Self {
            points: Arc::from(points),
        }
    }

    /// Returns the candidates in probe order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there is nowhere to probe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates candidates in probe order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl fmt::Debug for SpiralCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpiralCandidates")
            .field("len", &self.points.len())
            .field("first", &self.points.first())
            .finish_non_exhaustive()
    }
}
