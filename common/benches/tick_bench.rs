use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::snake::{Direction, FieldSize, Point, SnakeGameState, SnakeSessionSettings, find_free_cell};

const TURNS: [Direction; 4] = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

fn play_until_over(settings: &SnakeSessionSettings, seed: u64) -> u64 {
    let mut rng = SessionRng::new(seed);
    let mut state = SnakeGameState::new(settings.clone());
    state.reset(&mut rng);

    let mut step = 0;
    while state.is_running() && state.tick_count() < 500 {
        if step % 5 == 0 {
            state.set_direction(TURNS[(step / 5) % TURNS.len()]);
        }
        state.tick(&mut rng);
        step += 1;
    }
    state.tick_count()
}

fn bench_full_game_default() {
    play_until_over(&SnakeSessionSettings::default(), 42);
}

fn bench_full_game_crowded_enemies() {
    let settings = SnakeSessionSettings {
        field_width: 60,
        field_height: 60,
        max_enemies: 20,
        enemy_spawn_probability: 0.5,
        enemy_speed_factor: 0.3,
        ..SnakeSessionSettings::default()
    };
    play_until_over(&settings, 7);
}

fn bench_spawn_on_nearly_full_field() {
    let field = FieldSize::new(100, 100);
    let free = Point::new(73, 41);
    let mut rng = SessionRng::new(42);
    black_box(find_free_cell(&field, &mut rng, |p| *p != free));
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("full_game_default", |b| {
        b.iter(bench_full_game_default)
    });

    group.bench_function("full_game_crowded_enemies", |b| {
        b.iter(bench_full_game_crowded_enemies)
    });

    group.bench_function("spawn_nearly_full_field", |b| {
        b.iter(bench_spawn_on_nearly_full_field)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
