use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Hud, Theme, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            let outcome = state.tick();
            if state.game_over() {
                state.start();
            }
            black_box(outcome);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("restart", |b| {
        b.iter(|| {
            state.start();
        })
    });
}

fn bench_render_game_view(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let theme = Theme::light();
    let hud = Hud {
        best_score: 120,
        username: "Player_0042",
    };
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_game_view_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &hud, &theme, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_snapshot,
    bench_restart,
    bench_render_game_view
);
criterion_main!(benches);
