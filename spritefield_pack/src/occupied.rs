// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Append-only record of placed rectangles with linear collision scans.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

/// Returns `true` if `a` and `b` come closer than `gap` on both axes.
///
/// Rectangles that are exactly `gap` apart do not collide.
#[must_use]
pub fn gap_collides(a: Rect, b: Rect, gap: f64) -> bool {
    a.x0 < b.x1 + gap && a.x1 + gap > b.x0 && a.y0 < b.y1 + gap && a.y1 + gap > b.y0
}

/// Rectangles claimed during one sprite generation.
///
/// Entries are only ever appended; [`OccupiedSpace::clear`] drops all of them
/// when a new generation starts.
#[derive(Clone, Default)]
pub struct OccupiedSpace {
    rects: Vec<Rect>,
}

impl OccupiedSpace {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly placed rectangle.
    pub fn insert(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Forgets every rectangle.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Number of recorded rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if nothing has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Recorded rectangles in placement order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rect] {
        &self.rects
    }

    /// Returns `true` if `rect` comes within `gap` of any recorded rectangle.
    #[must_use]
    pub fn collides(&self, rect: Rect, gap: f64) -> bool {
        self.rects.iter().any(|&r| gap_collides(rect, r, gap))
    }
}

impl fmt::Debug for OccupiedSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedSpace")
            .field("len", &self.rects.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{OccupiedSpace, gap_collides};

    #[test]
    fn exactly_gap_apart_does_not_collide() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(105.0, 0.0, 205.0, 100.0);
        assert!(!gap_collides(a, b, 5.0));
        assert!(!gap_collides(b, a, 5.0));
    }

    #[test]
    fn inside_gap_collides() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(104.0, 50.0, 204.0, 150.0);
        assert!(gap_collides(a, b, 5.0));
        assert!(gap_collides(b, a, 5.0));
    }

    #[test]
    fn diagonal_neighbours_only_collide_when_both_axes_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(12.0, 20.0, 22.0, 30.0);
        assert!(!gap_collides(a, b, 5.0));
    }

    #[test]
    fn collides_checks_every_recorded_rect() {
        let mut space = OccupiedSpace::new();
        space.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        space.insert(Rect::new(100.0, 100.0, 110.0, 110.0));

        assert!(space.collides(Rect::new(105.0, 95.0, 120.0, 99.5), 1.0));
        assert!(!space.collides(Rect::new(40.0, 40.0, 60.0, 60.0), 1.0));
        assert_eq!(space.as_slice().len(), 2);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut space = OccupiedSpace::new();
        space.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(space.len(), 1);
        space.clear();
        assert!(space.is_empty());
        assert!(!space.collides(Rect::new(0.0, 0.0, 10.0, 10.0), 5.0));
    }
}
