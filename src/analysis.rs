//! Timing and memory comparison of rank stores across graph backends.

use crate::{
    generators::Preset,
    graph::{Graph, GraphKind, GraphStats, LinkedGraph, MapGraph, MatrixGraph, SparseGraph},
    page_rank::{
        ArrayStore, Config, HashTableStore, IteratedPageRank, MapStore, MatrixPageRank,
        PageRank, RankStore,
    },
    Result,
};
use std::{
    collections::BTreeMap,
    fmt,
    time::{Duration, Instant},
};
use tracing::{info, warn};

/// How the rank vector is held while iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKind {
    HashTable,
    Array,
    Map,
    /// Dense transition matrix with an array rank vector.
    Matrix,
}

impl StorageKind {
    pub const ALL: [StorageKind; 4] = [
        StorageKind::HashTable,
        StorageKind::Array,
        StorageKind::Map,
        StorageKind::Matrix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StorageKind::HashTable => HashTableStore::NAME,
            StorageKind::Array => ArrayStore::NAME,
            StorageKind::Map => MapStore::NAME,
            StorageKind::Matrix => "Matrix",
        }
    }

    /// One PageRank run, timed.
    pub fn run<G: Graph + ?Sized>(&self, graph: &G, config: &Config) -> Result<RunOutcome> {
        match self {
            StorageKind::HashTable => run_store::<HashTableStore, G>(graph, config),
            StorageKind::Array => run_store::<ArrayStore, G>(graph, config),
            StorageKind::Map => run_store::<MapStore, G>(graph, config),
            StorageKind::Matrix => {
                let start = Instant::now();
                let pr = MatrixPageRank::new(graph, config);
                let outcome = pr.calc()?;
                let elapsed = start.elapsed();
                let approx_bytes =
                    pr.approx_bytes() + outcome.ranks.approx_bytes() + graph.approx_bytes();
                Ok(RunOutcome {
                    ranks: outcome.ranks.into_vec(),
                    iterations: outcome.iterations,
                    elapsed,
                    approx_bytes,
                })
            }
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn run_store<S, G>(graph: &G, config: &Config) -> Result<RunOutcome>
where
    S: RankStore,
    G: Graph + ?Sized,
{
    let start = Instant::now();
    let outcome = IteratedPageRank::<G, S>::new(graph, config).calc()?;
    let elapsed = start.elapsed();
    Ok(RunOutcome {
        ranks: outcome.ranks.to_vec()?,
        iterations: outcome.iterations,
        elapsed,
        approx_bytes: outcome.ranks.approx_bytes() + graph.approx_bytes(),
    })
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub ranks: Vec<f64>,
    pub iterations: usize,
    pub elapsed: Duration,
    /// Rank store plus graph footprint, plus the transition matrix when one
    /// is built.
    pub approx_bytes: usize,
}

/// Aggregate over repeated runs of one graph/store pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub runs: usize,
    pub mean_secs: f64,
    /// Sample standard deviation, zero for a single run.
    pub std_secs: f64,
    pub mean_iterations: f64,
    pub mean_bytes: f64,
    pub all_secs: Vec<f64>,
}

impl Measurement {
    fn from_runs(outcomes: &[RunOutcome]) -> Self {
        let runs = outcomes.len();
        let all_secs: Vec<f64> = outcomes.iter().map(|o| o.elapsed.as_secs_f64()).collect();
        let iterations: Vec<f64> = outcomes.iter().map(|o| o.iterations as f64).collect();
        let bytes: Vec<f64> = outcomes.iter().map(|o| o.approx_bytes as f64).collect();
        Self {
            runs,
            mean_secs: mean(&all_secs),
            std_secs: std_dev(&all_secs),
            mean_iterations: mean(&iterations),
            mean_bytes: mean(&bytes),
            all_secs,
        }
    }
}

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        0.0
    } else {
        xs.iter().sum::<f64>() / xs.len() as f64
    }
}

pub fn std_dev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64;
    var.sqrt()
}

/// Runs `kind` on `graph` `runs` times.
pub fn measure<G: Graph + ?Sized>(
    graph: &G,
    kind: StorageKind,
    runs: usize,
    config: &Config,
) -> Result<Measurement> {
    assert!(runs > 0, "runs={runs}");
    let outcomes = (0..runs)
        .map(|_| kind.run(graph, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(Measurement::from_runs(&outcomes))
}

/// Sweeps presets, graph backends and storage kinds.
pub struct Analyzer {
    config: Config,
    runs: usize,
    seed: u64,
    results: BTreeMap<String, BTreeMap<StorageKind, Measurement>>,
}

impl Analyzer {
    pub fn new(config: Config, runs: usize, seed: u64) -> Self {
        assert!(runs > 0, "runs={runs}");
        Self {
            config,
            runs,
            seed,
            results: BTreeMap::new(),
        }
    }

    pub fn results(&self) -> &BTreeMap<String, BTreeMap<StorageKind, Measurement>> {
        &self.results
    }

    pub fn run_preset(&mut self, preset: &Preset) -> Result<()> {
        for kind in GraphKind::ALL {
            match kind {
                GraphKind::Linked => self.run_on::<LinkedGraph>(preset, kind)?,
                GraphKind::Matrix => self.run_on::<MatrixGraph>(preset, kind)?,
                GraphKind::Map => self.run_on::<MapGraph>(preset, kind)?,
                GraphKind::Sparse => self.run_on::<SparseGraph>(preset, kind)?,
            }
        }
        Ok(())
    }

    fn run_on<G: Graph>(&mut self, preset: &Preset, kind: GraphKind) -> Result<()> {
        let graph: G = preset.build(self.seed)?;
        let stats = GraphStats::of(&graph);
        info!(
            preset = %preset,
            graph = %kind,
            nodes = stats.num_nodes,
            edges = stats.num_edges,
            "measuring"
        );
        let mut row = BTreeMap::new();
        for storage in StorageKind::ALL {
            match measure(&graph, storage, self.runs, &self.config) {
                Ok(m) => {
                    row.insert(storage, m);
                }
                Err(e) => warn!(preset = %preset, graph = %kind, storage = %storage, "{e}"),
            }
        }
        self.results.insert(format!("{preset}_{kind}"), row);
        Ok(())
    }

    pub fn report(&self) -> Report<'_> {
        Report { analyzer: self }
    }
}

/// Text summary of an [`Analyzer`] sweep.
pub struct Report<'a> {
    analyzer: &'a Analyzer,
}

impl Report<'_> {
    /// Storage kinds ordered by mean time across all tests, with test count.
    pub fn ranking(&self) -> Vec<(StorageKind, f64, usize)> {
        let mut times: BTreeMap<StorageKind, Vec<f64>> = BTreeMap::new();
        for row in self.analyzer.results.values() {
            for (kind, m) in row.iter() {
                times.entry(*kind).or_default().push(m.mean_secs);
            }
        }
        let mut res: Vec<_> = times
            .into_iter()
            .map(|(kind, ts)| (kind, mean(&ts), ts.len()))
            .collect();
        res.sort_by(|a, b| a.1.total_cmp(&b.1));
        res
    }

    pub fn fastest(&self, test: &str) -> Option<(StorageKind, f64)> {
        self.analyzer
            .results
            .get(test)?
            .iter()
            .min_by(|a, b| a.1.mean_secs.total_cmp(&b.1.mean_secs))
            .map(|(kind, m)| (*kind, m.mean_secs))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = &self.analyzer.results;
        if results.values().all(|row| row.is_empty()) {
            return writeln!(f, "No successful test results to analyze.");
        }

        writeln!(f, "--- FASTEST STORAGE BY TEST ---")?;
        for test in results.keys() {
            if let Some((kind, secs)) = self.fastest(test) {
                writeln!(f, "{test:<40} | {:<12} | {secs:.6}s", kind.name())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- OVERALL STORAGE RANKING ---")?;
        writeln!(
            f,
            "{:<4} | {:<12} | {:<12} | {:<6}",
            "Rank", "Storage", "Avg Time (s)", "Tests"
        )?;
        writeln!(f, "{}", "-".repeat(44))?;
        for (i, (kind, secs, tests)) in self.ranking().into_iter().enumerate() {
            writeln!(f, "{:<4} | {:<12} | {secs:<12.6} | {tests:<6}", i + 1, kind.name())?;
        }

        writeln!(f)?;
        writeln!(f, "--- MEMORY USAGE ---")?;
        writeln!(f, "{:<40} | {:<12} | {:<15}", "Test", "Storage", "Memory (bytes)")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for (test, row) in results.iter() {
            for (kind, m) in row.iter() {
                writeln!(f, "{test:<40} | {:<12} | {:<15.0}", kind.name(), m.mean_bytes)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- CONVERGENCE ---")?;
        writeln!(f, "{:<40} | {:<12} | {:<15}", "Test", "Storage", "Avg Iterations")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for (test, row) in results.iter() {
            for (kind, m) in row.iter() {
                writeln!(f, "{test:<40} | {:<12} | {:<15.1}", kind.name(), m.mean_iterations)?;
            }
        }
        Ok(())
    }
}

/// Every storage kind once on the reference graph held as linked lists.
pub fn quick_demo(config: &Config) -> Result<Vec<(StorageKind, RunOutcome)>> {
    let graph: LinkedGraph = crate::generators::reference()?;
    StorageKind::ALL
        .iter()
        .map(|kind| -> Result<_> { Ok((*kind, kind.run(&graph, config)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    #[test]
    fn every_storage_kind_agrees() {
        let g: SparseGraph = generators::reference().unwrap();
        let cfg = Config::default();
        let oracle = StorageKind::Array.run(&g, &cfg).unwrap();
        for kind in StorageKind::ALL {
            let trial = kind.run(&g, &cfg).unwrap();
            assert_eq!(trial.ranks.len(), 10);
            for (a, b) in trial.ranks.iter().zip(oracle.ranks.iter()) {
                assert!((a - b).abs() < 1e-5, "{kind}: {a} vs {b}");
            }
            assert!(trial.approx_bytes > 0);
        }
    }

    #[test]
    fn memory_counts_the_graph_for_every_kind() {
        let g: LinkedGraph = generators::reference().unwrap();
        let cfg = Config::default();
        for kind in StorageKind::ALL {
            let trial = kind.run(&g, &cfg).unwrap();
            assert!(trial.approx_bytes > g.approx_bytes(), "{kind}");
        }
        let matrix = StorageKind::Matrix.run(&g, &cfg).unwrap();
        let transitions = MatrixPageRank::new(&g, &cfg).approx_bytes();
        assert!(matrix.approx_bytes >= g.approx_bytes() + transitions);
    }

    #[test]
    fn statistics() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(std_dev(&[4.0]), 0.0);
        assert!((std_dev(&[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn measure_repeats() {
        let g: MapGraph = generators::chain(8).unwrap();
        let m = measure(&g, StorageKind::HashTable, 3, &Config::default()).unwrap();
        assert_eq!(m.runs, 3);
        assert_eq!(m.all_secs.len(), 3);
        assert_eq!(m.mean_iterations, 1.0);
        assert!(m.mean_bytes > 0.0);
    }

    #[test]
    fn analyzer_sweep() {
        let mut analyzer = Analyzer::new(Config::default(), 1, generators::DEFAULT_SEED);
        analyzer.run_preset(&Preset::Reference).unwrap();
        analyzer.run_preset(&Preset::Chain { nodes: 5 }).unwrap();
        assert_eq!(analyzer.results().len(), 8);
        for row in analyzer.results().values() {
            assert_eq!(row.len(), StorageKind::ALL.len());
        }
        let report = analyzer.report();
        let ranking = report.ranking();
        assert_eq!(ranking.len(), 4);
        assert!(ranking.iter().all(|(_, _, tests)| *tests == 8));
        assert!(report.fastest("Reference (10 nodes)_LinkedList").is_some());
        let text = report.to_string();
        assert!(text.contains("OVERALL STORAGE RANKING"));
        assert!(text.contains("Chain (5 nodes)_Sparse"));
    }

    #[test]
    fn empty_report() {
        let analyzer = Analyzer::new(Config::default(), 1, 0);
        assert_eq!(
            analyzer.report().to_string(),
            "No successful test results to analyze.\n"
        );
    }

    #[test]
    fn quick_demo_covers_all_kinds() {
        let rows = quick_demo(&Config::default()).unwrap();
        assert_eq!(rows.len(), 4);
        for (_, outcome) in rows.iter() {
            assert!(outcome.iterations < 100);
        }
    }
}
