criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_slots,
        sampling_allowed_door,
        playing_round_stay,
        playing_round_switch,
        playing_round_many_doors,
        running_default_batch,
}

fn dealing_slots(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("deal 3 Slots", |b| b.iter(|| Slots::deal(DOORS, rng)));
}

fn sampling_allowed_door(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("pick a door except 2 of 100", |b| {
        b.iter(|| rng.pick_except(100, &[17, 83]))
    });
}

fn playing_round_stay(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("play a 3-door Round staying", |b| {
        b.iter(|| Round::play(DOORS, Strategy::Stay, rng))
    });
}

fn playing_round_switch(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("play a 3-door Round switching", |b| {
        b.iter(|| Round::play(DOORS, Strategy::Switch, rng))
    });
}

fn playing_round_many_doors(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("play a 100-door Round switching", |b| {
        b.iter(|| Round::play(100, Strategy::Switch, rng))
    });
}

fn running_default_batch(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("run the default Batch (1000 games)", |b| {
        b.iter(|| Batch::default().run(rng))
    });
}

use montyhall::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
