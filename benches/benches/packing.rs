// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use spritefield_pack::{Packer, PackerConfig, SpiralCandidates};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn side(&mut self, min: u32, max: u32) -> f64 {
        f64::from(min + self.next_u32() % (max - min))
    }
}

fn sizes(n: usize, seed: u64) -> Vec<Size> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| Size::new(rng.side(16, 160), rng.side(16, 160)))
        .collect()
}

fn bench_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("spritefield_pack");
    group.sample_size(20);

    for &plane in &[1_000.0, 4_000.0] {
        let config = PackerConfig::new(Size::new(plane, plane), 5.0);
        group.bench_function(format!("spiral_candidates(plane={plane})"), |b| {
            b.iter(|| black_box(SpiralCandidates::new(&config).len()));
        });
    }

    let config = PackerConfig::default();
    let candidates = SpiralCandidates::new(&config);
    for &n in &[16_usize, 64, 256] {
        let input = sizes(n, 0x5EED_0000_0000_0001 + n as u64);
        group.bench_function(format!("place(n={n})"), |b| {
            b.iter_batched(
                || Packer::with_candidates(config, candidates.clone()),
                |mut packer| {
                    let placed = input
                        .iter()
                        .filter(|size| packer.place(**size).is_ok())
                        .count();
                    black_box(placed);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_packing);
criterion_main!(benches);
