use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{is_aspect_applying, AspectCalculator, DEFAULT_ORB_MULTIPLIER};
use urania::{BodyPosition, KnowledgeBase};

const NAMES: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

fn bench_calculate_aspect(c: &mut Criterion) {
    let kb = KnowledgeBase::builtin();
    let calculator = AspectCalculator::new(&kb);

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| {
            calculator.calculate_aspect(
                black_box(100.0),
                black_box(192.0),
                black_box(1.0),
                black_box(0.5),
                black_box(DEFAULT_ORB_MULTIPLIER),
            )
        })
    });
}

fn bench_is_aspect_applying(c: &mut Criterion) {
    c.bench_function("is_aspect_applying", |b| {
        b.iter(|| {
            is_aspect_applying(
                black_box(355.0),
                black_box(3.0),
                black_box(1.0),
                black_box(0.2),
                black_box(0.0),
            )
        })
    });
}

fn bench_detect(c: &mut Criterion) {
    let kb = KnowledgeBase::builtin();
    let calculator = AspectCalculator::new(&kb);

    let bodies: Vec<BodyPosition> = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| BodyPosition::from_longitude(name, (i as f64) * 30.0, 1.0, 0))
        .collect();

    c.bench_function("detect_aspects", |b| {
        b.iter(|| calculator.detect(black_box(&bodies), black_box(DEFAULT_ORB_MULTIPLIER)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_is_aspect_applying, bench_detect);
criterion_main!(benches);
