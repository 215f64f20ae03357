//! Full-game playout benchmark: deal, twenty scripted tricks, outcome.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use briscola_engine::{EngineEvent, GameEngine, GameStatus, MoveProposal, PileId};

fn play_full_game(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(Some(seed));
    engine.update();

    for _ in 0..20 {
        if engine.status() == GameStatus::Win {
            break;
        }

        let leader = engine.first_mover();
        for player in [leader, leader.opponent()] {
            engine.handle_event(EngineEvent::ToggleHandFaceUp(player));
            engine.update();

            if let Some(slot) = PileId::hand_slots(player)
                .into_iter()
                .find(|&s| !engine.table()[s].is_empty())
            {
                engine.handle_event(EngineEvent::ProposeMove(MoveProposal::single(
                    slot,
                    PileId::foundation(player),
                )));
                engine.update();
            }
        }

        engine.update();
        engine.handle_event(EngineEvent::SignalEndRound);
        engine.update();
        engine.update();
    }

    engine
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("full_game_playout", |b| {
        b.iter(|| play_full_game(black_box(42)))
    });

    c.bench_function("deal", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(Some(black_box(42)));
            engine.update();
            engine
        })
    });

    c.bench_function("snapshot_capture", |b| {
        let engine = play_full_game(42);
        b.iter(|| engine.snapshot())
    });
}

criterion_group!(benches, bench_playout);
criterion_main!(benches);
