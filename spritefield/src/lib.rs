// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spritefield: a headless engine for a large pannable, zoomable canvas of
//! sprites.
//!
//! Sprites arrive asynchronously with sizes known only once their images
//! resolve. Each one is packed into free space around the origin (see
//! [`spritefield_pack`]), fades in, and can be clicked to fly the camera to
//! it (see [`spritefield_view2d`]).
//!
//! The [`Canvas`] owns all engine state and talks to the outside world through
//! two narrow seams:
//!
//! - a [`Host`] that schedules frame callbacks, attaches input listeners and
//!   resolves images,
//! - a [`DrawingSurface`] that draws rectangles and images.
//!
//! Nothing here reads a clock or blocks. The host calls back into the canvas
//! with results ([`Canvas::image_loaded`], [`Canvas::image_failed`]), input
//! ([`Canvas::pointer_down`], [`Canvas::wheel`], ...) and frame callbacks
//! ([`Canvas::frame`]), passing the current time in milliseconds.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use spritefield::{
//!     Canvas, CanvasConfig, CanvasProperties, DrawResult, LoadOutcome, Observers, RecordingHost,
//! };
//! use spritefield_surface::RecordingSurface;
//!
//! let mut host = RecordingHost::<u32>::new();
//! let mut canvas = Canvas::new(
//!     &mut host,
//!     RecordingSurface::new(Size::new(800.0, 600.0)),
//!     CanvasConfig::default(),
//!     CanvasProperties::default(),
//!     Observers::new(),
//! )?;
//!
//! canvas.set_sprites(vec!["/sprites/a.png".into()]);
//! let request = canvas.host_mut().take_requests().remove(0);
//! assert_eq!(request.url, "/sprites/a.png");
//!
//! // The host decoded the image: hand it back with its natural size.
//! let outcome = canvas.image_loaded(request.ticket, 7, Size::new(100.0, 100.0), 0);
//! assert_eq!(outcome, LoadOutcome::Placed(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! // Fading in: frames keep coming until the fade completes.
//! assert_eq!(canvas.frame(0), DrawResult::Drawn { animating: true });
//! assert_eq!(canvas.frame(500), DrawResult::Drawn { animating: false });
//! assert_eq!(canvas.frame(516), DrawResult::Skipped);
//! # Ok::<(), spritefield::CanvasError>(())
//! ```
//!
//! ## Logging
//!
//! Redraws, generation changes and stale results are logged at `debug` level
//! through [`tracing`]; load and placement failures at `warn`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`CanvasConfig`].

mod canvas;
mod config;
mod error;
mod host;
mod input;
mod loader;
mod scheduler;
mod sprite;
mod ui;

pub use canvas::Canvas;
pub use config::{Borders, CanvasConfig, CanvasProperties};
pub use error::{CanvasError, SPRITE_LIST_MESSAGE, SpriteListError};
pub use host::{FrameId, Host, HostBinding, ListenerSet, RecordingHost};
pub use input::Button;
pub use loader::{
    Generation, LoadOutcome, LoadRequest, LoadTicket, SpriteLoader, parse_sprite_list, resolve_url,
};
pub use scheduler::{DrawResult, FrameCoalescer, RenderState};
pub use sprite::{PlacedSprite, fade_opacity};
pub use ui::{Observers, UiState};

pub use spritefield_pack::PlacementError;
pub use spritefield_surface::DrawingSurface;
pub use spritefield_view2d::Camera2D;
