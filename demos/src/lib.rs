// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Spritefield demos.
//!
//! The demos run a [`Canvas`] headlessly: a directory on disk stands in for
//! the sprite server, PNG headers stand in for decoded images, and a
//! [`RecordingSurface`] stands in for the screen.

use std::cell::RefCell;
use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use spritefield::{
    Borders, Canvas, CanvasConfig, CanvasProperties, DrawResult, LoadOutcome, Observers,
    RecordingHost, parse_sprite_list,
};
use spritefield_surface::RecordingSurface;
use tracing::{debug, info};

/// File extensions served as sprites.
pub const SPRITE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Interval between simulated frame callbacks.
pub const FRAME_INTERVAL: u64 = 16;

/// Demo settings, usually read from a JSON file.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Engine configuration.
    pub canvas: CanvasConfig,
    /// Size of the simulated view.
    pub view: [f64; 2],
    /// Checkerboard cell size.
    pub cell_size: f64,
    /// Even cell color, RGBA.
    pub first: [u8; 4],
    /// Odd cell color, RGBA.
    pub second: [u8; 4],
    /// Border color, RGBA, or `None` to disable borders.
    pub border: Option<[u8; 4]>,
    /// Stop after this many frames even if the canvas is still animating.
    pub max_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            view: [1280.0, 720.0],
            cell_size: 32.0,
            first: [0x25, 0x25, 0x25, 0xff],
            second: [0x30, 0x30, 0x30, 0xff],
            border: Some([0x39, 0x57, 0xff, 0xff]),
            max_frames: 600,
        }
    }
}

impl Settings {
    /// Drawing properties described by these settings.
    pub fn properties(&self) -> CanvasProperties {
        let rgba = |[r, g, b, a]: [u8; 4]| Color::from_rgba8(r, g, b, a);
        let defaults = CanvasProperties::default();
        CanvasProperties {
            cell_size: self.cell_size,
            first: rgba(self.first),
            second: rgba(self.second),
            borders: match self.border {
                Some(color) => Borders {
                    enabled: true,
                    color: rgba(color),
                },
                None => Borders {
                    enabled: false,
                    ..defaults.borders
                },
            },
        }
    }
}

/// Builds the identifier listing for a sprite directory.
///
/// Returns a JSON array of `/sprites/<file>` paths, in directory order.
pub fn list_sprite_dir(dir: &Path) -> std::io::Result<String> {
    let mut ids = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !SPRITE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            ids.push(format!("/sprites/{name}"));
        }
    }
    Ok(serde_json::Value::from(ids).to_string())
}

/// Reads the pixel size from a PNG header.
pub fn png_size(path: &Path) -> Result<Size, Box<dyn Error>> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let reader = decoder.read_info()?;
    let info = reader.info();
    Ok(Size::new(f64::from(info.width), f64::from(info.height)))
}

/// One placed sprite in a [`Summary`].
#[derive(Clone, Debug, Serialize)]
pub struct PlacedEntry {
    /// Index in the sorted identifier list.
    pub index: usize,
    /// File the sprite was read from.
    pub file: PathBuf,
    /// World rectangle as `[x0, y0, x1, y1]`.
    pub rect: [f64; 4],
}

/// What a headless run produced.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Summary {
    /// Identifiers requested.
    pub requested: usize,
    /// Sprites placed, in placement order.
    pub placed: Vec<PlacedEntry>,
    /// Messages passed to the error sink.
    pub errors: Vec<String>,
    /// Requests that never got a result.
    pub outstanding: usize,
    /// Frames that drew something.
    pub frames_drawn: u32,
    /// Final camera position.
    pub camera: [f64; 2],
    /// Final camera scale.
    pub scale: f64,
}

/// Loads every sprite in `dir` into a fresh canvas and runs frames until the
/// canvas goes idle.
pub fn run_headless(dir: &Path, settings: &Settings) -> Result<Summary, Box<dyn Error>> {
    let ids = parse_sprite_list(&list_sprite_dir(dir)?)?;
    info!(dir = %dir.display(), sprites = ids.len(), "loading sprite directory");

    let errors = Rc::new(RefCell::new(Vec::new()));
    let observers = Observers::new().on_error({
        let errors = errors.clone();
        move |message| errors.borrow_mut().push(message.to_owned())
    });

    let mut host = RecordingHost::<PathBuf>::new();
    let mut canvas = Canvas::new(
        &mut host,
        RecordingSurface::new(Size::new(settings.view[0], settings.view[1])),
        settings.canvas.clone(),
        settings.properties(),
        observers,
    )?;

    let mut summary = Summary {
        requested: ids.len(),
        ..Summary::default()
    };
    canvas.set_sprites(ids);

    let mut now = 0;
    for request in canvas.host_mut().take_requests() {
        // Served paths map back onto the directory by file name.
        let file = dir.join(request.url.rsplit('/').next().unwrap_or_default());
        match png_size(&file) {
            Ok(size) => {
                if let LoadOutcome::Placed(rect) =
                    canvas.image_loaded(request.ticket, file.clone(), size, now)
                {
                    summary.placed.push(PlacedEntry {
                        index: request.ticket.index,
                        file,
                        rect: [rect.x0, rect.y0, rect.x1, rect.y1],
                    });
                }
            }
            Err(err) => {
                debug!(file = %file.display(), %err, "unreadable sprite");
                canvas.image_failed(request.ticket);
            }
        }
        now += 1;
    }

    summary.outstanding = canvas.outstanding_loads();

    for _ in 0..settings.max_frames {
        match canvas.frame(now) {
            DrawResult::Skipped => break,
            DrawResult::Drawn { animating } => {
                summary.frames_drawn += 1;
                if !animating && canvas.pending_frame().is_none() {
                    break;
                }
            }
        }
        now += FRAME_INTERVAL;
    }

    let Point { x, y } = canvas.camera().position();
    summary.camera = [x, y];
    summary.scale = canvas.camera().scale();
    canvas.teardown();
    summary.errors = errors.take();
    Ok(summary)
}

/// Bounding box of every placed sprite, if any were placed.
pub fn layout_bounds(summary: &Summary) -> Option<Rect> {
    summary
        .placed
        .iter()
        .map(|p| Rect::new(p.rect[0], p.rect[1], p.rect[2], p.rect[3]))
        .reduce(|a, b| a.union(b))
}

#[cfg(test)]
mod tests {
    use std::io::BufWriter;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spritefield_demos_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        let file = BufWriter::new(File::create(path).unwrap());
        let mut encoder = png::Encoder::new(file, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let data = vec![0xff_u8; (width * height * 4) as usize];
        writer.write_image_data(&data).unwrap();
    }

    #[test]
    fn listing_keeps_only_images() {
        let dir = scratch_dir("listing");
        fs::write(dir.join("notes.txt"), "x").unwrap();
        fs::write(dir.join("b.PNG"), "").unwrap();
        fs::write(dir.join("a.gif"), "").unwrap();

        let ids = parse_sprite_list(&list_sprite_dir(&dir).unwrap()).unwrap();
        assert_eq!(ids, vec!["/sprites/a.gif", "/sprites/b.PNG"]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn png_size_reads_the_header() {
        let dir = scratch_dir("header");
        let path = dir.join("one.png");
        write_png(&path, 12, 7);
        assert_eq!(png_size(&path).unwrap(), Size::new(12.0, 7.0));
        assert!(png_size(&dir.join("missing.png")).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn headless_run_places_and_reports() {
        let dir = scratch_dir("run");
        write_png(&dir.join("a.png"), 100, 100);
        write_png(&dir.join("b.png"), 100, 100);
        fs::write(dir.join("c.png"), "not a png").unwrap();

        let summary = run_headless(&dir, &Settings::default()).unwrap();
        assert_eq!(summary.requested, 3);
        assert_eq!(summary.placed.len(), 2);
        assert_eq!(summary.outstanding, 0);
        assert_eq!(summary.placed[0].rect, [0.0, 0.0, 100.0, 100.0]);
        assert_eq!(summary.errors, vec!["Failed to load image 3: /sprites/c.png"]);
        assert!(summary.frames_drawn > 1);
        assert_eq!(summary.scale, 1.0);
        assert_eq!(
            layout_bounds(&summary),
            Some(Rect::new(0.0, -105.0, 100.0, 100.0))
        );
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn settings_fill_in_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "border": null, "canvas": { "gap": 8.0 } }"#).unwrap();
        assert_eq!(settings.canvas.gap, 8.0);
        assert_eq!(settings.canvas.fade_duration, 500);
        assert!(!settings.properties().borders.enabled);
        assert_eq!(settings.properties().first, CanvasProperties::default().first);
    }
}
