use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memorize::{GameConfig, GameRng, ManualClock, MemoryGame};

fn deal(pairs: usize) -> MemoryGame<usize, ManualClock> {
    MemoryGame::with_config(pairs, |pair| pair, &GameConfig::default(), ManualClock::new(), &mut GameRng::new(12345))
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_24_pairs", |b| {
        b.iter(|| deal(black_box(24)))
    });
}

fn bench_play_through(c: &mut Criterion) {
    c.bench_function("play_through_24_pairs", |b| {
        b.iter(|| {
            let mut game = deal(24);
            for pair in 0..24 {
                let ids: Vec<_> = game
                    .cards()
                    .iter()
                    .filter(|card| *card.content() == pair)
                    .map(|card| card.id())
                    .collect();
                game.choose_id(ids[0]);
                game.choose_id(ids[1]);
            }
            black_box(game.is_finished())
        })
    });
}

fn bench_views(c: &mut Criterion) {
    let mut game = deal(24);
    let first = game.cards()[0].id();
    game.choose_id(first);

    c.bench_function("views_48_cards", |b| {
        b.iter(|| black_box(game.views()))
    });
}

criterion_group!(benches, bench_deal, bench_play_through, bench_views);
criterion_main!(benches);
