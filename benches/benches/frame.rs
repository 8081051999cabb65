// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use spritefield::{
    Canvas, CanvasConfig, CanvasProperties, LoadOutcome, Observers, RecordingHost,
};
use spritefield_surface::RecordingSurface;
use spritefield_view2d::Camera2D;

fn populated(
    host: &mut RecordingHost<usize>,
    n: usize,
) -> Canvas<&mut RecordingHost<usize>, RecordingSurface<usize>> {
    let mut canvas = Canvas::new(
        host,
        RecordingSurface::new(Size::new(1280.0, 720.0)),
        CanvasConfig::default(),
        CanvasProperties::default(),
        Observers::new(),
    )
    .expect("default configuration is valid");
    canvas.set_sprites((0..n).map(|i| format!("/sprites/{i:04}.png")).collect());
    for (i, request) in canvas.host_mut().take_requests().into_iter().enumerate() {
        let side = 24.0 + (i % 7) as f64 * 12.0;
        let outcome = canvas.image_loaded(request.ticket, i, Size::new(side, side), 0);
        assert!(
            matches!(outcome, LoadOutcome::Placed(_)),
            "sprite {i} did not fit: {outcome:?}"
        );
    }
    // Let every fade finish so frames measure drawing, not animation.
    canvas.frame(10_000);
    canvas
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("spritefield_frame");
    group.sample_size(30);

    for &n in &[64_usize, 512] {
        let mut host = RecordingHost::new();
        let mut canvas = populated(&mut host, n);
        let mut now = 10_000;
        let mut sign = 1.0;
        group.bench_function(format!("pan_and_draw(n={n})"), |b| {
            b.iter(|| {
                sign = -sign;
                canvas.camera_mut().pan_by_view(Vec2::new(sign * 3.0, 0.0));
                now += 16;
                black_box(canvas.frame(now));
                canvas.surface_mut().clear_events();
            });
        });

        group.bench_function(format!("clean_frame(n={n})"), |b| {
            b.iter(|| {
                now += 16;
                black_box(canvas.frame(now));
            });
        });
    }

    let mut camera = Camera2D::new(Size::new(1280.0, 720.0));
    camera.center_on_origin();
    group.bench_function("zoom_about_view_point", |b| {
        let mut t = 0_u32;
        b.iter(|| {
            t = t.wrapping_add(1);
            let scale = 1.0 + f64::from(t % 300) / 100.0;
            camera.zoom_about_view_point(Point::new(640.0, 360.0), scale);
            black_box(camera.view_to_world_point(Point::new(10.0, 10.0)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
