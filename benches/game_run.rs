//! Full-game benchmarks with in-memory logs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use card_ring::core::GameConfig;
use card_ring::engine::Game;
use card_ring::output::MemoryLogs;
use card_ring::setup::Pack;

fn bench_game_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_run");
    for players in [2usize, 4, 8] {
        let pack = Pack::generate(players, 42).expect("valid player count");
        group.bench_with_input(BenchmarkId::from_parameter(players), &pack, |b, pack| {
            b.iter(|| {
                let config = GameConfig::new(players).with_max_turns(Some(10_000));
                let game = Game::with_logs(config, pack, MemoryLogs::new()).expect("pack matches");
                black_box(game.run().expect("game runs"))
            });
        });
    }
    group.finish();
}

fn bench_deal(c: &mut Criterion) {
    let pack = Pack::generate(64, 7).expect("valid player count");
    c.bench_function("deal_64_players", |b| {
        b.iter(|| black_box(pack.deal().expect("valid pack")))
    });
}

criterion_group!(benches, bench_game_run, bench_deal);
criterion_main!(benches);
