use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use roadmap::{CityMap80, connectivity, filler};
use std::hint::black_box;

fn bench_fill(c: &mut Criterion) {
    c.bench_function("fill", |b| {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut map = CityMap80::new();
        b.iter(|| {
            map.reset();
            filler::fill(&mut map, &mut rng);
            black_box(&map);
        })
    });

    c.bench_function("check_connected", |b| {
        b.iter_batched(
            || CityMap80::generate(&mut SmallRng::seed_from_u64(1)),
            |map| black_box(connectivity::check_connected(&map)).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
