//! Benchmark the direct O(N²) transform at the path lengths the animation
//! actually uses, to keep the accepted performance ceiling visible.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use epi_core::{dft, resample_path, shapes};

fn bench_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft");
    for n in [64usize, 240, 360] {
        let (x, y) = shapes::heart(100);
        let samples = resample_path(&x, &y, n).unwrap();
        group.bench_function(format!("direct_n{n}"), |b| {
            b.iter(|| dft(black_box(&samples)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dft);
criterion_main!(benches);
