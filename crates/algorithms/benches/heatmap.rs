//! Benchmarks for the heat-map pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use agroheat_algorithms::interpolation::{heatmap, mean_pairwise_distance, SamplePoint};
use agroheat_core::{InterpolationConfig, Metric, Observation, Tier};

fn create_field(n: usize) -> Vec<Observation> {
    // Spread sensors over a ~0.1° plot with a smooth temperature gradient
    (0..n)
        .map(|i| {
            let lat = 37.0 + ((i * 37) % 211) as f64 * 0.0005;
            let lng = -5.0 + ((i * 53) % 199) as f64 * 0.0005;
            let temperature = 15.0 + (lat - 37.0) * 100.0 + ((i * 7) % 10) as f64 * 0.5;
            Observation::new(lat, lng, format!("dev{i}"))
                .unwrap()
                .with_reading(Metric::Temperature, temperature)
        })
        .collect()
}

fn bench_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heatmap");

    for tier in [Tier::Low, Tier::High] {
        let config = InterpolationConfig::new(tier, Tier::Medium, true);
        for n in [10, 50, 200].iter() {
            let field = create_field(*n);
            let id = format!("{}/{}", tier.as_str(), n);

            group.bench_with_input(BenchmarkId::from_parameter(id), n, |b, _| {
                b.iter(|| heatmap(black_box(&field), Metric::Temperature, &config).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_pairwise_distance");

    for n in [50, 200, 1000].iter() {
        let points: Vec<SamplePoint> = create_field(*n)
            .iter()
            .map(|o| SamplePoint::new(o.latitude(), o.longitude(), 0.0))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| mean_pairwise_distance(black_box(&points)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heatmap, bench_density);
criterion_main!(benches);
