#[macro_use]
extern crate criterion;
extern crate five_card_odds;

use five_card_odds::game::Game;
use rand::rng;

fn play_full_table(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let mut game = Game::new(10).unwrap();

    c.bench_function("Shuffle, deal and rank 10 hands", |b| {
        b.iter(|| game.play(&mut rng));
    });
}

criterion_group!(benches, play_full_table);
criterion_main!(benches);
