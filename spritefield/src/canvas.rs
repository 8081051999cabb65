// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::iter::successors;

use kurbo::{Point, Rect, Size};
use spritefield_pack::Packer;
use spritefield_surface::DrawingSurface;
use spritefield_view2d::Camera2D;
use tracing::{debug, warn};

use crate::config::{CanvasConfig, CanvasProperties};
use crate::error::CanvasError;
use crate::host::{FrameId, Host, HostBinding};
use crate::input::InputState;
use crate::loader::{Generation, LoadOutcome, LoadTicket, SpriteLoader};
use crate::scheduler::{DrawResult, RenderState};
use crate::sprite::PlacedSprite;
use crate::ui::{Observers, UiState};

/// A canvas of packed sprites bound to a host and a drawing surface.
///
/// All methods take the current time in milliseconds where time matters;
/// the canvas never reads a clock itself.
pub struct Canvas<H, S>
where
    H: Host,
    S: DrawingSurface<Image = H::Image>,
{
    pub(crate) binding: HostBinding<H>,
    pub(crate) surface: S,
    pub(crate) config: CanvasConfig,
    pub(crate) props: CanvasProperties,
    pub(crate) camera: Camera2D,
    pub(crate) packer: Packer,
    pub(crate) loader: SpriteLoader,
    pub(crate) sprites: Vec<PlacedSprite<H::Image>>,
    pub(crate) render: RenderState,
    pub(crate) input: InputState,
    pub(crate) ui: UiState,
    pub(crate) observers: Observers,
    published_camera: Option<Point>,
    published_cursor: Option<Point>,
}

impl<H, S> fmt::Debug for Canvas<H, S>
where
    H: Host,
    S: DrawingSurface<Image = H::Image>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("generation", &self.loader.generation())
            .field("sprites", &self.sprites.len())
            .field("camera", &self.camera.debug_info())
            .field("pending_frame", &self.binding.pending_frame())
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}

impl<H, S> Canvas<H, S>
where
    H: Host,
    S: DrawingSurface<Image = H::Image>,
{
    /// Starts a canvas: validates the configuration, attaches listeners,
    /// centers the camera on the origin and requests the first frame.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidConfig`] for out of range configuration or
    /// properties, [`CanvasError::SurfaceUnavailable`] if the surface has no
    /// drawing context. Nothing is attached to the host on error.
    pub fn new(
        host: H,
        surface: S,
        config: CanvasConfig,
        props: CanvasProperties,
        observers: Observers,
    ) -> Result<Self, CanvasError> {
        config.validate()?;
        props.validate()?;
        if !surface.is_available() {
            return Err(CanvasError::SurfaceUnavailable);
        }

        let mut camera = Camera2D::new(surface.size());
        camera.set_max_scale(config.max_scale);
        camera.center_on_origin();

        let mut render = RenderState::default();
        render.request_manual();

        let mut canvas = Self {
            binding: HostBinding::new(host),
            surface,
            packer: Packer::new(config.packer_config()),
            input: InputState::new(config.wheel_debounce),
            config,
            props,
            camera,
            loader: SpriteLoader::default(),
            sprites: Vec::new(),
            render,
            ui: UiState::default(),
            observers,
            published_camera: None,
            published_cursor: None,
        };
        debug!(
            view = ?canvas.camera.view_size(),
            candidates = canvas.packer.candidates().len(),
            "canvas started"
        );
        canvas.binding.request_frame();
        Ok(canvas)
    }

    /// Replaces the sprite list.
    ///
    /// An identical list is ignored. Otherwise all placed sprites are dropped,
    /// the packer and any focus transition are reset, a new generation begins
    /// and one image request per identifier goes to the host. Returns whether
    /// a new generation started.
    pub fn set_sprites(&mut self, ids: Vec<String>) -> bool {
        if !self.loader.differs(&ids) {
            return false;
        }
        self.sprites.clear();
        self.packer.reset();
        self.camera.cancel_focus();
        self.render.request_manual();

        let requests = self.loader.reset(ids, &self.config.base_url);
        debug!(
            generation = self.loader.generation().0,
            sprites = requests.len(),
            "starting sprite generation"
        );
        for request in requests {
            self.binding.resolve_image(request);
        }
        self.binding.request_frame();
        true
    }

    /// Delivers a resolved image of natural size `size`.
    pub fn image_loaded(
        &mut self,
        ticket: LoadTicket,
        image: H::Image,
        size: Size,
        now: u64,
    ) -> LoadOutcome {
        let Some(url) = self.loader.settle(ticket).map(str::to_owned) else {
            debug!(?ticket, "dropping stale image");
            return LoadOutcome::Stale;
        };
        match self.packer.place(size) {
            Ok(rect) => {
                self.sprites
                    .push(PlacedSprite::new(image, rect, ticket.index, now));
                self.binding.request_frame();
                LoadOutcome::Placed(rect)
            }
            Err(err) => {
                let message = format!("Failed to place image {}: {url}", ticket.index + 1);
                warn!(%err, "{message}");
                self.report_error(message);
                LoadOutcome::Rejected(err)
            }
        }
    }

    /// Reports that an image could not be resolved. Other loads are
    /// unaffected. Returns `false` for stale tickets.
    pub fn image_failed(&mut self, ticket: LoadTicket) -> bool {
        let Some(url) = self.loader.settle(ticket).map(str::to_owned) else {
            debug!(?ticket, "ignoring failure of stale image");
            return false;
        };
        let message = format!("Failed to load image {}: {url}", ticket.index + 1);
        warn!("{message}");
        self.report_error(message);
        true
    }

    /// Replaces the drawing properties.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidConfig`] if the grid cell size is unusable; the
    /// current properties are kept.
    pub fn set_properties(&mut self, props: CanvasProperties) -> Result<(), CanvasError> {
        props.validate()?;
        if props != self.props {
            self.props = props;
            self.request_redraw();
        }
        Ok(())
    }

    /// Changes the fade duration and restarts every sprite's fade at `now`.
    pub fn set_fade_duration(&mut self, duration: u64, now: u64) {
        if duration == self.config.fade_duration {
            return;
        }
        self.config.fade_duration = duration;
        for sprite in &mut self.sprites {
            sprite.fade_start = now;
        }
        self.request_redraw();
    }

    /// Resizes the surface and recenters the camera on the origin.
    pub fn resize(&mut self, size: Size) {
        self.surface.resize(size);
        self.camera.set_view_size(size);
        self.camera.center_on_origin();
        self.request_redraw();
    }

    /// Forces the next frame to draw and makes sure one is requested.
    pub fn request_redraw(&mut self) {
        self.render.request_manual();
        self.binding.request_frame();
    }

    /// Starts a focus transition to the sprite at `index` in draw order.
    /// Returns `false` if there is no such sprite.
    pub fn focus(&mut self, index: usize, now: u64) -> bool {
        let Some(sprite) = self.sprites.get(index) else {
            return false;
        };
        self.camera.begin_focus(
            sprite.rect,
            self.config.focus_zoom,
            self.config.transition_duration,
            now,
        );
        self.binding.request_frame();
        true
    }

    /// The frame callback.
    ///
    /// Advances timers and the camera transition, then draws if anything
    /// visible changed since the last draw. A clean frame touches neither the
    /// surface nor the host. While a fade or transition is running, the next
    /// frame is requested before returning.
    pub fn frame(&mut self, now: u64) -> DrawResult {
        self.binding.frame_fired();
        self.commit_due_scale(now);
        let was_animating = self.camera.is_animating();
        self.camera.tick(now);
        if was_animating && !self.camera.is_animating() {
            // A finished fly-to supersedes any zoom still waiting to commit.
            self.input.scale_commit.cancel();
            self.commit_scale(self.camera.scale());
        }

        let fading = self.sprites.iter().any(|s| s.opacity < 1.0);
        let dirty = self.render.needs_redraw(
            fading,
            self.camera.position(),
            self.camera.scale(),
            self.camera.is_animating(),
        );
        let result = if dirty {
            self.draw(now)
        } else {
            DrawResult::Skipped
        };
        self.publish();
        result
    }

    fn draw(&mut self, now: u64) -> DrawResult {
        debug!(
            sprites = self.sprites.len(),
            scale = self.camera.scale(),
            "redrawing canvas"
        );
        self.surface.clear();

        let visible = self.camera.visible_world_rect();
        for (cell, first) in grid_cells(visible, self.props.cell_size) {
            let color = if first {
                self.props.first
            } else {
                self.props.second
            };
            self.surface
                .fill_rect(self.camera.world_to_view_rect(cell), color);
        }

        self.surface.set_image_smoothing(false);
        let fade = self.config.fade_duration;
        let borders = self.props.borders;
        let mut fading = false;
        for sprite in &mut self.sprites {
            let opacity = sprite.update_opacity(fade, now);
            fading |= opacity < 1.0;
            let dest = sprite.screen_rect(&self.camera);
            self.surface.draw_image(&sprite.image, dest, opacity);
            if borders.enabled {
                self.surface.stroke_rect(dest, borders.color);
            }
        }

        self.render
            .mark_drawn(self.camera.position(), self.camera.scale());
        let animating = fading || self.camera.is_animating();
        if animating {
            self.binding.request_frame();
        }
        DrawResult::Drawn { animating }
    }

    fn publish(&mut self) {
        let camera = self.camera.position();
        if self.published_camera != Some(camera) {
            self.published_camera = Some(camera);
            self.ui.camera = camera;
            self.observers.camera(camera);
        }
        if let Some(pointer) = self.input.pointer {
            let cursor = self.camera.view_to_world_point(pointer);
            if self.published_cursor != Some(cursor) {
                self.published_cursor = Some(cursor);
                self.ui.cursor = cursor;
                self.observers.cursor(cursor);
            }
        }
    }

    pub(crate) fn report_error(&mut self, message: String) {
        self.observers.error(&message);
        self.ui.error = Some(message);
    }

    pub(crate) fn commit_due_scale(&mut self, now: u64) {
        if let Some(scale) = self.input.scale_commit.poll(now) {
            self.commit_scale(scale);
        }
    }

    fn commit_scale(&mut self, scale: f64) {
        self.ui.scale = scale;
        self.observers.scale(scale);
    }

    /// Ends the canvas: listeners are detached and the pending frame is
    /// cancelled.
    pub fn teardown(self) {}

    /// The camera.
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Mutable access to the camera. Changes show on the next frame; call
    /// [`Canvas::request_redraw`] to schedule one.
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    /// Placed sprites in draw order.
    pub fn sprites(&self) -> &[PlacedSprite<H::Image>] {
        &self.sprites
    }

    /// The packer of the current generation.
    pub fn packer(&self) -> &Packer {
        &self.packer
    }

    /// Current sprite generation.
    pub fn generation(&self) -> Generation {
        self.loader.generation()
    }

    /// Image requests of the current generation with no result yet.
    pub fn outstanding_loads(&self) -> usize {
        self.loader.outstanding()
    }

    /// Display state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Clears the error indicator.
    pub fn dismiss_error(&mut self) {
        self.ui.dismiss_error();
    }

    /// Configuration in effect.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Drawing properties in effect.
    pub fn properties(&self) -> &CanvasProperties {
        &self.props
    }

    /// The frame request in flight, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.binding.pending_frame()
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the drawing surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The host.
    pub fn host(&self) -> &H {
        self.binding.host()
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        self.binding.host_mut()
    }
}

/// Checkerboard cells covering `visible`, with whether each takes the first
/// color.
///
/// Cells are aligned to multiples of `cell`; a cell takes the first color when
/// the sum of its column and row indices is even.
fn grid_cells(visible: Rect, cell: f64) -> impl Iterator<Item = (Rect, bool)> {
    let first_col = (visible.x0 / cell).floor();
    let first_row = (visible.y0 / cell).floor();
    successors(Some(first_col), |i| Some(i + 1.0))
        .take_while(move |i| i * cell < visible.x1)
        .flat_map(move |i| {
            successors(Some(first_row), |j| Some(j + 1.0))
                .take_while(move |j| j * cell < visible.y1)
                .map(move |j| {
                    let rect = Rect::new(i * cell, j * cell, (i + 1.0) * cell, (j + 1.0) * cell);
                    (rect, (i + j).rem_euclid(2.0) == 0.0)
                })
        })
}
