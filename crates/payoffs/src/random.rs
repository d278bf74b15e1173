//! Random bimatrix games (uniform integer payoffs + replay tokens).
//!
//! Purpose
//! - Reproducible game streams for benchmarks, demos and fuzzing the geometry.
//!
//! Model
//! - Draw the strategy counts, then every payoff independently and uniformly
//!   from `[payoff_min, payoff_max]`, Player 1 matrix first.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a stream can be regenerated without replaying `0..k`.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Payoff;

/// Strategy count distribution (per player).
#[derive(Clone, Copy, Debug)]
pub enum StrategyCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl StrategyCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            StrategyCount::Fixed(n) => n.max(1),
            StrategyCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Random game configuration.
#[derive(Clone, Copy, Debug)]
pub struct GameCfg {
    /// Player 1 strategies (matrix rows).
    pub rows: StrategyCount,
    /// Player 2 strategies (matrix columns).
    pub cols: StrategyCount,
    /// Inclusive payoff range; swapped if given in the wrong order.
    pub payoff_min: Payoff,
    pub payoff_max: Payoff,
}
impl Default for GameCfg {
    fn default() -> Self {
        Self {
            rows: StrategyCount::Fixed(3),
            cols: StrategyCount::Fixed(3),
            payoff_min: -10,
            payoff_max: 10,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One drawn game plus the token that regenerates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomGame {
    pub player1: DMatrix<Payoff>,
    pub player2: DMatrix<Payoff>,
    pub replay: ReplayToken,
}

/// Draw a game; the same `(cfg, tok)` always yields the same matrices.
pub fn draw_game(cfg: GameCfg, tok: ReplayToken) -> RandomGame {
    let mut rng = tok.to_std_rng();
    let rows = cfg.rows.sample(&mut rng);
    let cols = cfg.cols.sample(&mut rng);
    let lo = cfg.payoff_min.min(cfg.payoff_max);
    let hi = cfg.payoff_min.max(cfg.payoff_max);
    let player1 = DMatrix::from_fn(rows, cols, |_, _| rng.gen_range(lo..=hi));
    let player2 = DMatrix::from_fn(rows, cols, |_, _| rng.gen_range(lo..=hi));
    RandomGame {
        player1,
        player2,
        replay: tok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::build;

    #[test]
    fn replay_is_deterministic_and_indexed() {
        let cfg = GameCfg {
            rows: StrategyCount::Uniform { min: 2, max: 6 },
            ..GameCfg::default()
        };
        let tok = ReplayToken::new(2025, 7);
        let g1 = draw_game(cfg, tok);
        let g2 = draw_game(cfg, tok);
        assert_eq!(g1, g2);
        let other = draw_game(cfg, tok.next());
        assert_eq!(other.replay.index, 8);
        assert_ne!(g1, other);
    }

    #[test]
    fn shapes_and_range_respected() {
        let cfg = GameCfg {
            rows: StrategyCount::Fixed(4),
            cols: StrategyCount::Uniform { min: 0, max: 0 },
            payoff_min: 3,
            payoff_max: -3,
        };
        for i in 0..20 {
            let g = draw_game(cfg, ReplayToken::new(1, i));
            assert_eq!(g.player1.shape(), (4, 1));
            assert!(g.player1.iter().chain(g.player2.iter()).all(|&v| (-3..=3).contains(&v)));
            assert_eq!(build(&g.player1, &g.player2).unwrap().len(), 4);
        }
    }
}
