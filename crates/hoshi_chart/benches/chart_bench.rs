use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hoshi_chart::{calc_vedic_chart, calc_western_chart, detect_aspects, BirthInput};
use hoshi_ephem::{Body, StaticEphemeris};

fn provider() -> StaticEphemeris {
    StaticEphemeris::from_longitudes(&[
        (Body::Sun, 294.5),
        (Body::Moon, 100.0),
        (Body::Mercury, 280.0),
        (Body::Venus, 310.0),
        (Body::Mars, 250.0),
        (Body::Jupiter, 95.0),
        (Body::Saturn, 285.0),
        (Body::Uranus, 277.0),
        (Body::Neptune, 282.0),
        (Body::Pluto, 227.0),
    ])
}

fn birth() -> BirthInput {
    BirthInput::new(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(), "Asia/Tokyo")
        .with_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
}

fn chart_bench(c: &mut Criterion) {
    let eph = provider();
    let input = birth();

    let mut group = c.benchmark_group("chart");
    group.bench_function("western", |b| {
        b.iter(|| calc_western_chart(black_box(&eph), black_box(&input)))
    });
    group.bench_function("vedic", |b| {
        b.iter(|| calc_vedic_chart(black_box(&eph), black_box(&input)))
    });
    group.finish();
}

fn aspect_bench(c: &mut Criterion) {
    let eph = provider();
    let input = birth();
    let planets = calc_western_chart(&eph, &input).unwrap().planets;

    let mut group = c.benchmark_group("aspects");
    group.bench_function("ten_bodies", |b| {
        b.iter(|| detect_aspects(black_box(&planets)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, aspect_bench);
criterion_main!(benches);
