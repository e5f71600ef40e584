use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_rps::core::{GameRng, History, Move};
use rust_rps::session::{Session, SessionConfig};
use rust_rps::strategy::{Pattern, Reactive, Strategy};

fn long_history(rounds: usize) -> History {
    let mut history = History::new();
    for i in 0..rounds {
        history.record(Move::ALL[i % 3], Move::ALL[(i * 7) % 3]);
    }
    history
}

fn bench_select(c: &mut Criterion) {
    let history = long_history(1_000);
    let mut rng = GameRng::new(42);

    c.bench_function("reactive select (1k rounds)", |b| {
        b.iter(|| Reactive.select(black_box(&history), &mut rng))
    });

    let pattern = Pattern::default();
    c.bench_function("pattern select (1k rounds)", |b| {
        b.iter(|| pattern.select(black_box(&history), &mut rng))
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("pattern session 100 rounds", |b| {
        b.iter(|| {
            let mut session = Session::new(SessionConfig::default().with_seed(1)).unwrap();
            for i in 0..100 {
                session.play_round(Move::ALL[i % 3]).unwrap();
            }
            session.score()
        })
    });
}

criterion_group!(benches, bench_select, bench_session);
criterion_main!(benches);
