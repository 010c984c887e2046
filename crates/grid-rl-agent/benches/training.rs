use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_rl_agent::{train, TrainingConfig};
use grid_rl_env::{Grid, GridWorldEnv};

fn bench_training(c: &mut Criterion) {
    let grid = Grid::parse(
        "S 0 0 1 0
         0 1 0 0 0
         0 1 0 1 0
         0 0 0 1 G",
    )
    .expect("valid grid");
    let config = TrainingConfig {
        episodes: 200,
        seed: Some(0),
        log_interval: 0,
        ..TrainingConfig::default()
    };

    c.bench_function("train_5x4_200_episodes", |b| {
        b.iter(|| {
            let mut env = GridWorldEnv::new(grid.clone());
            black_box(train(&mut env, &config).expect("training succeeds"))
        });
    });
}

criterion_group!(benches, bench_training);
criterion_main!(benches);
