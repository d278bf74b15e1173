//! Criterion benchmarks for hull and Pareto passes on random games.
//! Focus sizes: n×n strategy grids with n in {2, 5, 10, 20, 40}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p payoffs

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use payoffs::geom::{convex_hull, pareto_optimal};
use payoffs::payoff::{build, PointSet};
use payoffs::random::{draw_game, GameCfg, ReplayToken, StrategyCount};

fn random_points(n: usize, seed: u64) -> PointSet {
    let cfg = GameCfg {
        rows: StrategyCount::Fixed(n),
        cols: StrategyCount::Fixed(n),
        payoff_min: -1000,
        payoff_max: 1000,
    };
    let g = draw_game(cfg, ReplayToken::new(seed, 0));
    build(&g.player1, &g.player2).unwrap()
}

fn bench_geom(c: &mut Criterion) {
    let mut group = c.benchmark_group("payoff_geom");
    for &n in &[2usize, 5, 10, 20, 40] {
        group.bench_with_input(BenchmarkId::new("gift_wrapping", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |ps| {
                    let _hull = convex_hull(ps.as_slice()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("pareto_pairwise", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 44),
                |ps| {
                    let _front = pareto_optimal(ps.as_slice());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geom);
criterion_main!(benches);
