//! rank-stores: compare PageRank rank stores and graph backends.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use rank_stores::{
    analysis::{self, Analyzer, StorageKind},
    generators::{self, Preset},
    page_rank::{ArrayStore, IteratedPageRank, PageRank, PageRankResult},
    top_n, Config, Graph, GraphKind, GraphStats, LinkedGraph, MapGraph, MatrixGraph,
    SparseGraph,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser)]
#[command(name = "rank-stores")]
#[command(about = "PageRank over interchangeable graph and rank-storage backends")]
struct Cli {
    /// Probability of following an out-edge
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Iteration cap
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// L1 convergence bound
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reference graph through every rank store, with its structure
    Demo,
    /// Reference graph on each graph backend with the array store
    Compare,
    /// One timed run per rank store on the reference graph
    Quick,
    /// Sweep graph presets x graph backends x rank stores
    Analyze {
        /// 1-based preset numbers; defaults to the first four
        #[arg(short, long)]
        preset: Vec<usize>,

        /// Repetitions per measurement
        #[arg(short, long, default_value_t = 3)]
        runs: usize,

        /// Seed for the random presets
        #[arg(long, default_value_t = generators::DEFAULT_SEED)]
        seed: u64,
    },
    /// List the available presets
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if !(cli.damping > 0.0 && cli.damping < 1.0) {
        bail!("damping must lie in (0, 1), got {}", cli.damping);
    }
    if cli.max_iterations == 0 {
        bail!("max-iterations must be positive");
    }
    if cli.tolerance <= 0.0 {
        bail!("tolerance must be positive, got {}", cli.tolerance);
    }
    let config = Config::default()
        .with_damping(cli.damping)
        .with_max_iterations(cli.max_iterations)
        .with_tolerance(cli.tolerance);

    match cli.command {
        Commands::Demo => demo(&config),
        Commands::Compare => compare(&config),
        Commands::Quick => quick(&config),
        Commands::Analyze { preset, runs, seed } => analyze(&config, &preset, runs, seed),
        Commands::Presets => {
            for (i, p) in Preset::ALL.iter().enumerate() {
                println!("  {}. {p}", i + 1);
            }
            Ok(())
        }
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(70));
    println!("{title}");
    println!("{}", "=".repeat(70));
}

fn print_top(ranks: &[f64]) {
    println!("Top 5 Ranked Nodes:");
    for (i, (node, rank)) in top_n(ranks, 5).into_iter().enumerate() {
        println!("  {}. Node {node}: {rank:.6}", i + 1);
    }
}

fn demo(config: &Config) -> Result<()> {
    banner("REFERENCE GRAPH");
    let graph: LinkedGraph = generators::reference()?;
    print!("{graph}");
    println!("\nStatistics:\n{}", GraphStats::of(&graph));

    for kind in StorageKind::ALL {
        let outcome = kind.run(&graph, config)?;
        println!("\n--- {kind} ---");
        println!("Execution Time: {:.6} seconds", outcome.elapsed.as_secs_f64());
        println!("Iterations to Converge: {}", outcome.iterations);
        println!("Memory Usage (approx): {} bytes", outcome.approx_bytes);
        print_top(&outcome.ranks);
    }
    Ok(())
}

fn compare(config: &Config) -> Result<()> {
    banner("GRAPH REPRESENTATION COMPARISON");
    for kind in GraphKind::ALL {
        println!("\n--- {kind} ---");
        match kind {
            GraphKind::Linked => compare_on::<LinkedGraph>(config)?,
            GraphKind::Matrix => compare_on::<MatrixGraph>(config)?,
            GraphKind::Map => compare_on::<MapGraph>(config)?,
            GraphKind::Sparse => compare_on::<SparseGraph>(config)?,
        }
    }
    Ok(())
}

fn compare_on<G>(config: &Config) -> Result<()>
where
    G: Graph + std::fmt::Display,
{
    let graph: G = generators::reference()?;
    print!("Structure:\n{graph}");
    let outcome = IteratedPageRank::<G, ArrayStore>::new(&graph, config).calc()?;
    println!(
        "Iterations: {} (converged: {})",
        outcome.iterations(),
        outcome.converged()
    );
    println!("Memory Usage (approx): {} bytes", graph.approx_bytes());
    print_top(&outcome.ranks()?);
    Ok(())
}

fn quick(config: &Config) -> Result<()> {
    banner("QUICK PAGERANK PERFORMANCE DEMO");
    println!(
        "{:<12} | {:<10} | {:<10} | {:<15}",
        "Storage", "Time (s)", "Iterations", "Memory (bytes)"
    );
    println!("{}", "-".repeat(55));
    for (kind, outcome) in analysis::quick_demo(config)? {
        println!(
            "{:<12} | {:<10.6} | {:<10} | {:<15}",
            kind.name(),
            outcome.elapsed.as_secs_f64(),
            outcome.iterations,
            outcome.approx_bytes
        );
    }
    Ok(())
}

/// Maps 1-based preset numbers to presets, the first four when none are given.
fn select_presets(selected: &[usize]) -> Result<Vec<Preset>> {
    if selected.is_empty() {
        return Ok(Preset::ALL[..4].to_vec());
    }
    selected
        .iter()
        .map(|&i| match i.checked_sub(1).and_then(|i| Preset::ALL.get(i)) {
            Some(preset) => Ok(*preset),
            None => Err(anyhow!(
                "preset {i} is out of range, expected 1..={}; see `rank-stores presets`",
                Preset::ALL.len()
            )),
        })
        .collect()
}

fn analyze(config: &Config, selected: &[usize], runs: usize, seed: u64) -> Result<()> {
    if runs == 0 {
        bail!("runs must be positive");
    }
    let presets = select_presets(selected)?;

    banner("PAGERANK PERFORMANCE ANALYSIS");
    let mut analyzer = Analyzer::new(config.clone(), runs, seed);
    for preset in presets.iter() {
        println!("testing {preset}");
        analyzer.run_preset(preset)?;
    }
    println!();
    print!("{}", analyzer.report());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_presets() {
        assert_eq!(select_presets(&[]).unwrap(), Preset::ALL[..4].to_vec());
    }

    #[test]
    fn presets_in_given_order() {
        assert_eq!(
            select_presets(&[3, 1]).unwrap(),
            vec![Preset::ALL[2], Preset::ALL[0]]
        );
    }

    #[test]
    fn any_bad_preset_is_rejected() {
        let err = select_presets(&[99, 1]).unwrap_err().to_string();
        assert!(err.contains("preset 99"), "{err}");
        assert!(err.contains(&format!("1..={}", Preset::ALL.len())), "{err}");
        assert!(select_presets(&[0]).is_err());
        assert!(select_presets(&[1, Preset::ALL.len() + 1]).is_err());
        assert!(select_presets(&[Preset::ALL.len()]).is_ok());
    }

    #[test]
    fn default_filter_shows_info() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
