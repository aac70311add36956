//! Benchmarks for the nearest-footing scan

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footing_recon::prelude::*;
use nalgebra::Point2;

/// Build a grid of footings: `nx` x `ny` rectangles, 2 m on a 6 m pitch
fn footing_grid(nx: usize, ny: usize) -> Vec<FootingRect> {
    let mut footings = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let cx = i as f64 * 6000.0;
            let cy = j as f64 * 6000.0;
            let rect = footing_from_corners(
                &format!("F{i}_{j}"),
                &[
                    Point2::new(cx - 1000.0, cy - 1000.0),
                    Point2::new(cx + 1000.0, cy + 1000.0),
                ],
            )
            .unwrap();
            footings.push(rect);
        }
    }
    footings
}

fn bench_nearest_assignment(c: &mut Criterion) {
    // Single-floor scale: the intended operating range of the linear scan
    for (nx, ny) in [(5, 4), (15, 10)] {
        let footings = footing_grid(nx, ny);
        let assigner = NearestFootingAssigner::new(&footings);
        let points: Vec<Point2<f64>> = (0..200)
            .map(|k| Point2::new((k % 30) as f64 * 2750.0, (k / 30) as f64 * 3300.0))
            .collect();

        c.bench_function(&format!("assign_200_points_{}_footings", nx * ny), |b| {
            b.iter(|| {
                for p in &points {
                    black_box(assigner.assign(black_box(*p)));
                }
            })
        });
    }
}

criterion_group!(benches, bench_nearest_assignment);
criterion_main!(benches);
