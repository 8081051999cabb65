// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State shown by the surrounding UI, and the callbacks that publish it.

use core::fmt;

use kurbo::Point;

/// Display state owned by the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Camera position as last published.
    pub camera: Point,
    /// Pointer position in world space as last published.
    pub cursor: Point,
    /// Committed scale. Lags the live camera scale during a wheel or pinch
    /// burst and during a focus transition.
    pub scale: f64,
    /// Latest error message, until dismissed.
    pub error: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            camera: Point::ZERO,
            cursor: Point::ZERO,
            scale: 1.0,
            error: None,
        }
    }
}

impl UiState {
    /// Clears the error indicator.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

type PointFn = Box<dyn FnMut(Point)>;

/// Callbacks injected by the host UI.
///
/// Unset callbacks are skipped.
#[derive(Default)]
pub struct Observers {
    camera: Option<PointFn>,
    cursor: Option<PointFn>,
    scale: Option<Box<dyn FnMut(f64)>>,
    error: Option<Box<dyn FnMut(&str)>>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("camera", &self.camera.is_some())
            .field("cursor", &self.cursor.is_some())
            .field("scale", &self.scale.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

impl Observers {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the camera position, at most once per frame.
    #[must_use]
    pub fn on_camera(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.camera = Some(Box::new(f));
        self
    }

    /// Called with the world-space pointer position, at most once per frame.
    #[must_use]
    pub fn on_cursor(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.cursor = Some(Box::new(f));
        self
    }

    /// Called when a zoom is committed.
    #[must_use]
    pub fn on_scale(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.scale = Some(Box::new(f));
        self
    }

    /// The error sink. Called with each load or placement failure.
    #[must_use]
    pub fn on_error(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    pub(crate) fn camera(&mut self, position: Point) {
        if let Some(f) = &mut self.camera {
            f(position);
        }
    }

    pub(crate) fn cursor(&mut self, position: Point) {
        if let Some(f) = &mut self.cursor {
            f(position);
        }
    }

    pub(crate) fn scale(&mut self, scale: f64) {
        if let Some(f) = &mut self.scale {
            f(scale);
        }
    }

    pub(crate) fn error(&mut self, message: &str) {
        if let Some(f) = &mut self.error {
            f(message);
        }
    }
}
