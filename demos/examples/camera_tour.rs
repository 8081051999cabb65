// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera tour.
//!
//! Places a handful of synthetic sprites, then replays a short input script
//! (wheel zoom, drag, click to focus) and prints the camera after each step.
//!
//! Run:
//! - `cargo run -p spritefield_demos --example camera_tour`

use kurbo::{Point, Size, Vec2};
use spritefield::{
    Button, Canvas, CanvasConfig, CanvasProperties, DrawResult, Host, Observers, RecordingHost,
};
use spritefield_surface::{DrawingSurface, RecordingSurface};

/// Runs frames until the canvas is idle, then flushes timers and prints the camera.
fn settle<H, S>(canvas: &mut Canvas<H, S>, now: &mut u64, label: &str)
where
    H: Host,
    S: DrawingSurface<Image = H::Image>,
{
    while canvas.frame(*now) != DrawResult::Skipped {
        *now += 16;
    }
    *now += 1_000;
    canvas.advance_timers(*now);
    println!(
        "{label}: position {:?} scale {:.2}",
        canvas.camera().position(),
        canvas.camera().scale()
    );
}

fn main() -> Result<(), spritefield::CanvasError> {
    let observers = Observers::new().on_scale(|scale| println!("  committed scale {scale:.2}"));
    let mut host = RecordingHost::<usize>::new();
    let mut canvas = Canvas::new(
        &mut host,
        RecordingSurface::new(Size::new(800.0, 600.0)),
        CanvasConfig::default(),
        CanvasProperties::default(),
        observers,
    )?;

    let ids = (0..12).map(|i| format!("/sprites/{i:02}.png")).collect();
    canvas.set_sprites(ids);
    for (i, request) in canvas.host_mut().take_requests().into_iter().enumerate() {
        let side = [40.0, 55.0, 70.0, 85.0][i % 4];
        canvas.image_loaded(request.ticket, i, Size::new(side, side * 0.75), 0);
    }

    let mut now = 0;
    settle(&mut canvas, &mut now, "start");

    canvas.wheel(Point::new(400.0, 300.0), -100.0, now);
    settle(&mut canvas, &mut now, "zoomed in");

    let from = Point::new(400.0, 300.0);
    canvas.pointer_down(from, Button::Secondary, now);
    canvas.pointer_move(from + Vec2::new(-120.0, 40.0));
    canvas.pointer_up(Button::Secondary);
    settle(&mut canvas, &mut now, "dragged");

    let target = canvas.sprites()[0].rect.center();
    let click = canvas.camera().world_to_view_point(target);
    if let Some(index) = canvas.pointer_down(click, Button::Primary, now) {
        println!("clicked sprite {index}");
    }
    canvas.pointer_up(Button::Primary);
    settle(&mut canvas, &mut now, "focused");

    canvas.teardown();
    Ok(())
}
