// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: per-move deltas for a drag owned by one source.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] when a button or finger goes down, naming the
//!    source that owns the drag.
//! 2) On each move, call [`DragState::update`] to get the delta since the
//!    previous position.
//! 3) Call [`DragState::end_if`] on release; only the owning source ends it.
//!    [`DragState::end`] ends it unconditionally (for example on touch end).

use kurbo::{Point, Vec2};

/// Tracks a drag between press and release.
///
/// `S` identifies what started the drag (a mouse button, a touch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState<S> {
    source: Option<S>,
    last_pos: Point,
}

impl<S> Default for DragState<S> {
    fn default() -> Self {
        Self {
            source: None,
            last_pos: Point::ZERO,
        }
    }
}

impl<S: Copy + PartialEq> DragState<S> {
    /// Starts a drag owned by `source` at `pos`, replacing any drag in progress.
    pub fn start(&mut self, source: S, pos: Point) {
        self.source = Some(source);
        self.last_pos = pos;
    }

    /// Records a move and returns the delta since the previous position.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.source?;
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(delta)
    }

    /// Ends the drag if `source` owns it. Returns whether it ended.
    pub fn end_if(&mut self, source: S) -> bool {
        if self.source == Some(source) {
            self.source = None;
            true
        } else {
            false
        }
    }

    /// Ends any drag in progress.
    pub fn end(&mut self) {
        self.source = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// The source owning the drag, if any.
    #[must_use]
    pub fn source(&self) -> Option<S> {
        self.source
    }

    /// Last recorded position of the drag, if any.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.source.map(|_| self.last_pos)
    }
}
