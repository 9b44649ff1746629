use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_simon::core::{GameConfig, Recorder, ScriptedSource, SeededSource, SequenceGenerator, SimonGame};
use tui_simon::term::{FrameBuffer, GameView, TermPresenter, Viewport};
use tui_simon::types::{Alphabet, Mode};

fn bench_tick(c: &mut Criterion) {
    let config = GameConfig::default().with_seed(12345);
    let mut game = SimonGame::seeded(config, Recorder::new()).unwrap();
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
            if game.presenter().calls().len() > 4096 {
                game.presenter_mut().clear();
            }
        })
    });
}

fn bench_clear_level(c: &mut Criterion) {
    c.bench_function("play_and_clear_level_0", |b| {
        b.iter(|| {
            let mut game = SimonGame::new(
                GameConfig::default(),
                Recorder::new(),
                ScriptedSource::new(vec![0u8, 1, 2, 3]),
            )
            .unwrap();
            game.start();
            while game.mode() != Mode::Inputting {
                game.tick(16);
            }
            let seq = game.sequence().to_vec();
            for s in seq {
                black_box(game.press(s));
            }
        })
    });
}

fn bench_sequence_extend(c: &mut Criterion) {
    let mut generator = SequenceGenerator::new(Alphabet::default(), SeededSource::new(12345));

    c.bench_function("sequence_extend_to_64", |b| {
        b.iter(|| {
            let mut seq = generator.initial_sequence();
            while seq.len() < 64 {
                generator.extend(&mut seq);
            }
            black_box(seq.len())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = SimonGame::new(
        GameConfig::default(),
        TermPresenter::new(Alphabet::default()),
        ScriptedSource::new(vec![0u8]),
    )
    .unwrap();
    game.start();
    game.tick(1_000);

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(game.presenter(), &game.snapshot(), vp, &mut fb);
            black_box(fb.cells().len())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_level,
    bench_sequence_extend,
    bench_render
);
criterion_main!(benches);
