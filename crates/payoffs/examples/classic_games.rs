//! Print hull and Pareto front for a few textbook games.
//!
//! Usage:
//!   cargo run -p payoffs --example classic_games
//!   cargo run -p payoffs --example classic_games -- random 4 5
//!
//! The random mode draws an `rows x cols` game from seed 2025.

use payoffs::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("random") => {
            let rows = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
            let cols = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(3);
            let cfg = GameCfg {
                rows: StrategyCount::Fixed(rows),
                cols: StrategyCount::Fixed(cols),
                ..GameCfg::default()
            };
            let g = draw_game(cfg, ReplayToken::new(2025, 0));
            show("random", &g.player1, &g.player2);
        }
        None => {
            for (name, a, b) in catalogue() {
                show(name, &a, &b);
            }
        }
        Some(_) => eprintln!("usage: classic_games [random <rows> <cols>]"),
    }
}

fn catalogue() -> Vec<(&'static str, DMatrix<Payoff>, DMatrix<Payoff>)> {
    vec![
        (
            "prisoners_dilemma",
            DMatrix::from_row_slice(2, 2, &[3, 0, 5, 1]),
            DMatrix::from_row_slice(2, 2, &[3, 5, 0, 1]),
        ),
        (
            "battle_of_the_sexes",
            DMatrix::from_row_slice(2, 2, &[2, 0, 0, 1]),
            DMatrix::from_row_slice(2, 2, &[1, 0, 0, 2]),
        ),
        (
            "rock_paper_scissors",
            DMatrix::from_row_slice(3, 3, &[0, -1, 1, 1, 0, -1, -1, 1, 0]),
            DMatrix::from_row_slice(3, 3, &[0, 1, -1, -1, 0, 1, 1, -1, 0]),
        ),
    ]
}

fn show(name: &str, a: &DMatrix<Payoff>, b: &DMatrix<Payoff>) {
    let cfg = AnalysisCfg {
        pareto_order: ParetoOrder::Display,
    };
    match analyze(a, b, &cfg) {
        Ok(an) => {
            let fmt = |ps: &[Point2]| {
                ps.iter()
                    .map(|p| format!("({},{})", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            println!("game={name} points={}", an.points.len());
            println!("  hull={}", fmt(&an.hull_polygon()));
            println!("  pareto={}", fmt(&an.pareto));
            println!("  hull_area={:.1}", an.hull_area2() as f64 / 2.0);
        }
        Err(e) => eprintln!("game={name} error: {e}"),
    }
}
