use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hoshi_zodiac::{
    lahiri_ayanamsha, nakshatra_from_longitude, nakshatra_from_tropical, rashi_from_longitude,
    rashi_from_tropical, sign_from_longitude,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_447_906.5625;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| b.iter(|| lahiri_ayanamsha(black_box(jd))));
    group.finish();
}

fn mapping_bench(c: &mut Criterion) {
    let tropical_lon = 294.5;
    let sidereal_lon = 270.7823;
    let jd = 2_447_906.5625;

    let mut group = c.benchmark_group("mapping");
    group.bench_function("sign_from_longitude", |b| {
        b.iter(|| sign_from_longitude(black_box(tropical_lon)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(sidereal_lon)))
    });
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(tropical_lon), black_box(jd)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(sidereal_lon)))
    });
    group.bench_function("nakshatra_from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(tropical_lon), black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, mapping_bench);
criterion_main!(benches);
