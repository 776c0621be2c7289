use criterion::{black_box, criterion_group, criterion_main, Criterion};

use color_guess::{GameConfig, GameEngine};

fn bench_reset(c: &mut Criterion) {
    let mut engine = GameEngine::new(GameConfig::default(), 42).unwrap();
    c.bench_function("reset", |b| {
        b.iter(|| engine.reset().unwrap());
    });
}

fn bench_guess(c: &mut Criterion) {
    let mut engine = GameEngine::new(GameConfig::default(), 42).unwrap();
    let id = engine.state().correct_option().unwrap().id;
    c.bench_function("guess", |b| {
        b.iter(|| engine.guess(black_box(id)).unwrap());
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::new(GameConfig::default(), 42).unwrap();
    c.bench_function("snapshot_bytes", |b| {
        b.iter(|| GameEngine::from_bytes(&engine.to_bytes().unwrap()).unwrap());
    });
}

criterion_group!(benches, bench_reset, bench_guess, bench_snapshot);
criterion_main!(benches);
