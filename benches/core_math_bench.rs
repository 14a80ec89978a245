use car_scenes::api::{SceneChart, SceneChartConfig, SceneRenderStyle, build_scene_frame};
use car_scenes::core::{CarRecord, ChartScales, Dataset, LinearScale, Margins, Viewport, ViewportState};
use car_scenes::render::NullRenderer;
use car_scenes::scene::SceneCatalog;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_dataset(count: usize) -> Dataset {
    Dataset::from_records((0..count).map(|i| {
        let t = i as f64;
        CarRecord::new(
            format!("car-{i}"),
            46.0 + (t * 7.0) % 184.0,
            9.0 + (t * 3.0) % 38.0,
        )
    }))
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 230.0), (60.0, 1_910.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(123.4));
            let _ = scale.invert(px);
        })
    });
}

fn bench_scene_frame_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let state =
        ViewportState::new(Viewport::new(1920, 1080), Margins::default()).expect("valid state");
    let scales = ChartScales::build(dataset.domain(), state).expect("valid scales");
    let catalog = SceneCatalog::standard();

    c.bench_function("scene_frame_all_10k", |b| {
        b.iter(|| {
            let frame = build_scene_frame(
                catalog.scene_wrapping(0),
                black_box(&dataset),
                scales,
                state,
                SceneRenderStyle::default(),
            );
            black_box(frame.circles.len())
        })
    });
}

fn bench_scene_cycle(c: &mut Criterion) {
    let config = SceneChartConfig::new(Viewport::new(1280, 720));
    let mut chart = SceneChart::new(NullRenderer::default(), config, synthetic_dataset(2_000))
        .expect("chart init");

    c.bench_function("scene_advance_2k", |b| {
        b.iter(|| {
            let _ = chart.advance_scene().expect("advance");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_scene_frame_10k,
    bench_scene_cycle
);
criterion_main!(benches);
