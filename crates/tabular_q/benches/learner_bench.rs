//! Benchmarks for the tabular Q-learner
//!
//! Run with: cargo bench -p tabular_q

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabular_q::{LearnerConfig, StateSpace, TabularQLearner};

fn seeded(dimensions: Vec<usize>, actions: usize) -> TabularQLearner {
    let config = LearnerConfig::default().with_seed(42);
    TabularQLearner::with_shape(dimensions, (0..actions as i32).collect(), config)
        .expect("valid shape")
}

/// Benchmark table initialization
fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("Init");

    for side in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("3d_grid", side), &side, |b, &side| {
            b.iter(|| black_box(seeded(vec![side, side, side], 4)));
        });
    }

    group.finish();
}

/// Benchmark state index computation
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index");

    let space = StateSpace::new(vec![10, 10, 10, 10]).expect("valid shape");
    let state = [3usize, 7, 1, 9];
    group.bench_function("4d_state", |b| {
        b.iter(|| black_box(space.index_of(black_box(&state[..]))));
    });

    group.finish();
}

/// Benchmark action selection
fn bench_choose_action(c: &mut Criterion) {
    let mut group = c.benchmark_group("Choose Action");

    for actions in [2usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("actions", actions),
            &actions,
            |b, &actions| {
                let mut learner = seeded(vec![10, 10], actions);
                let state = [4usize, 5];
                b.iter(|| black_box(learner.choose_action(black_box(&state[..]))));
            },
        );
    }

    group.finish();
}

/// Benchmark the Q-learning update
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("Update");

    group.bench_function("single_update", |b| {
        let mut learner = seeded(vec![10, 10], 4);
        let (state, next_state) = ([1usize, 2], [1usize, 3]);
        b.iter(|| {
            learner
                .update_q(black_box(&state[..]), 3, black_box(&next_state[..]), 1.0)
                .expect("valid transition")
        });
    });

    group.bench_function("episode_100_steps", |b| {
        let mut learner = seeded(vec![100], 2);
        b.iter(|| {
            let mut cell = 0usize;
            for _ in 0..100 {
                let action = learner.choose_action(&[cell]).expect("valid state");
                let next = if action == 0 {
                    cell.saturating_sub(1)
                } else {
                    (cell + 1).min(99)
                };
                learner
                    .update_q(&[cell], action, &[next], -1.0)
                    .expect("valid transition");
                cell = next;
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_init,
    bench_index,
    bench_choose_action,
    bench_update
);
criterion_main!(benches);
