// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless sprite directory.
//!
//! Packs every image in a directory onto a canvas, runs frames until the
//! fade-ins finish, and prints the resulting layout as JSON.
//!
//! Run:
//! - `cargo run -p spritefield_demos --example sprite_dir -- public/sprites [settings.json]`
//!
//! Set `RUST_LOG=spritefield=debug` to watch generations and redraws.

use std::error::Error;
use std::path::PathBuf;

use spritefield_demos::{Settings, layout_bounds, run_headless};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let dir = PathBuf::from(args.next().unwrap_or_else(|| "public/sprites".to_owned()));
    let settings = match args.next() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };

    let summary = run_headless(&dir, &settings)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if let Some(bounds) = layout_bounds(&summary) {
        eprintln!(
            "placed {} of {} sprites in {:.0}x{:.0}",
            summary.placed.len(),
            summary.requested,
            bounds.width(),
            bounds.height()
        );
    }
    Ok(())
}
