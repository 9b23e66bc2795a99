use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stacker::core::{GameEngine, Line, Matrix};
use stacker::types::Direction;

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            engine.tick();
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    for _ in 0..6 {
        engine.tick();
        let _ = engine.commit();
    }

    c.bench_function("render_frame", |b| {
        b.iter(|| black_box(engine.frame()))
    });
}

fn bench_commit(c: &mut Criterion) {
    c.bench_function("commit_and_spawn", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(black_box(12345));
            engine.tick();
            black_box(engine.commit())
        })
    });
}

fn bench_line_sweep(c: &mut Criterion) {
    c.bench_function("line_full_sweep", |b| {
        b.iter(|| {
            let mut line = Line::new(-1, black_box(3), Direction::MovingRight);
            for _ in 0..line.period() {
                line.advance();
            }
            line
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut frame = Matrix::new();
    for row in 0..8 {
        frame.set(row, row, true);
    }

    c.bench_function("matrix_rotate", |b| {
        b.iter(|| black_box(frame).rotated(black_box(3)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_frame,
    bench_commit,
    bench_line_sweep,
    bench_rotate
);
criterion_main!(benches);
