use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use payoffs::api::{analyze, AnalysisCfg, ParetoOrder};
use payoffs::random::{draw_game, GameCfg, ReplayToken, StrategyCount};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;

use input::{load_game, GameFile};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "payoffs")]
#[command(about = "Convex hull and Pareto front of bimatrix payoff vectors")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze a game file (.json nested rows or .csv long format)
    Analyze {
        #[arg(long)]
        input: PathBuf,
        /// Result JSON (points, hull, pareto)
        #[arg(long)]
        out: PathBuf,
        /// Optional per-point table (.csv or .parquet)
        #[arg(long)]
        points_table: Option<PathBuf>,
        /// Sort the Pareto front by Player 2 payoff descending
        #[arg(long)]
        display_order: bool,
    },
    /// Write a random game in the JSON input format
    Random {
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
        min: i32,
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        max: i32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze {
            input,
            out,
            points_table,
            display_order,
        } => run_analyze(&input, &out, points_table.as_deref(), display_order, cmd.tag),
        Action::Random {
            rows,
            cols,
            seed,
            index,
            min,
            max,
            out,
        } => {
            let cfg = GameCfg {
                rows: StrategyCount::Fixed(rows),
                cols: StrategyCount::Fixed(cols),
                payoff_min: min,
                payoff_max: max,
            };
            run_random(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn run_analyze(
    input: &Path,
    out: &Path,
    points_table: Option<&Path>,
    display_order: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "analyze");
    let (a, b) = load_game(input)?;
    let cfg = AnalysisCfg {
        pareto_order: if display_order {
            ParetoOrder::Display
        } else {
            ParetoOrder::Input
        },
    };
    let an = analyze(&a, &b, &cfg).with_context(|| format!("analyzing {}", input.display()))?;
    let (rows, cols) = an.points.shape();
    tracing::info!(
        rows,
        cols,
        hull_len = an.hull.len(),
        pareto_len = an.pareto.len(),
        "analysis_done"
    );

    output::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&output::result_json(&an))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut extra = Vec::new();
    if let Some(table) = points_table {
        let mut df = output::points_frame(&an)?;
        output::write_points_table(table, &mut df)?;
        tracing::info!(path = %table.display(), rows = df.height(), "points_table");
        extra.push(table.to_path_buf());
    }

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "shape": [rows, cols],
        "display_order": display_order,
        "hull_len": an.hull.len(),
        "pareto_len": an.pareto.len()
    });
    write_sidecar(out, &extra, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn run_random(cfg: GameCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, out = %out.display(), "random");
    let g = draw_game(cfg, tok);
    let file = GameFile::from_matrices(&g.player1, &g.player2);
    output::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&file)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "seed": tok.seed,
        "index": tok.index,
        "shape": [g.player1.nrows(), g.player1.ncols()],
        "payoff_range": [cfg.payoff_min, cfg.payoff_max]
    });
    write_sidecar(out, &[], Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "lib_version": payoffs::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn random_then_analyze_writes_artifacts() {
        let dir = tempdir().unwrap();
        let game = dir.path().join("game.json");
        let cfg = GameCfg {
            rows: StrategyCount::Fixed(3),
            cols: StrategyCount::Fixed(4),
            ..GameCfg::default()
        };
        run_random(cfg, ReplayToken::new(7, 0), &game, None).unwrap();
        assert!(dir.path().join("game.provenance.json").exists());

        let out = dir.path().join("out").join("result.json");
        let table = dir.path().join("out").join("points.csv");
        run_analyze(&game, &out, Some(table.as_path()), true, Some("t".into())).unwrap();

        let v: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["points"].as_array().unwrap().len(), 12);
        assert!(!v["hull"].as_array().unwrap().is_empty());
        assert!(table.exists());
        let prov: Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out").join("result.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["tag"], "t");
        assert_eq!(prov["outputs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn shape_mismatch_surfaces_as_error() {
        let dir = tempdir().unwrap();
        let game = dir.path().join("bad.json");
        std::fs::write(&game, r#"{"player1": [[1, 2]], "player2": [[1], [2]]}"#).unwrap();
        let out = dir.path().join("r.json");
        let err = run_analyze(&game, &out, None, false, None).unwrap_err();
        assert!(format!("{err:#}").contains("differ in shape"), "{err:#}");
        assert!(!out.exists());
    }
}
