use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skyteam_engine::{Engine, GameConfig, Role, ScriptedDice};

/// Play a seeded game to the end, always taking the first legal action.
fn playout(seed: u64) -> u32 {
    let mut engine = Engine::seeded(seed);
    while !engine.state().game_over {
        let role = engine.state().current_player;
        let action = engine.legal_actions(role)[0];
        let _ = engine.apply(role, action);
    }
    engine.state().round
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| Engine::seeded(black_box(7))));
}

fn bench_legal_actions(c: &mut Criterion) {
    let engine = Engine::with_source(
        GameConfig::default(),
        ScriptedDice::new([1, 2, 3, 4, 5, 6, 2, 4]),
    )
    .unwrap();
    c.bench_function("legal_actions_opening", |b| {
        b.iter(|| engine.legal_actions(black_box(Role::Pilot)))
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("seeded_playout", |b| b.iter(|| playout(black_box(42))));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = Engine::seeded(3);
    for _ in 0..6 {
        let role = engine.state().current_player;
        let action = engine.legal_actions(role)[0];
        let _ = engine.apply(role, action);
    }
    c.bench_function("snapshot_clone", |b| b.iter(|| black_box(&engine).snapshot()));
    c.bench_function("snapshot_bincode", |b| {
        b.iter(|| black_box(engine.state()).to_bytes().unwrap())
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_actions,
    bench_playout,
    bench_snapshot
);
criterion_main!(benches);
