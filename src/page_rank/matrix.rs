use super::*;
use crate::{graph::Graph, Result};
use tracing::debug;

/// PageRank as repeated dense matrix-vector products.
///
/// `transitions[v * n + u]` is the probability of stepping from `u` to `v`.
/// Column `u` of a dangling node is uniform.
pub struct MatrixPageRank {
    num_nodes: usize,
    damping: f64,
    max_iterations: usize,
    tolerance: f64,
    transitions: Vec<f64>,
}

impl MatrixPageRank {
    pub fn new<G: Graph + ?Sized>(g: &G, config: &Config) -> Self {
        config.validate();
        let n = g.num_nodes();
        let transitions = {
            let mut transitions = vec![0.0; n * n];
            for u in g.iter_nodes() {
                let d = g.out_degree(u);
                if d > 0 {
                    let unit = 1.0 / d as f64;
                    for v in g.neighbors(u) {
                        transitions[v * n + u] += unit;
                    }
                } else {
                    let unit = 1.0 / n as f64;
                    for v in g.iter_nodes() {
                        transitions[v * n + u] = unit;
                    }
                }
            }
            transitions
        };
        Self {
            num_nodes: n,
            damping: config.damping,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            transitions,
        }
    }

    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.transitions.capacity() * std::mem::size_of::<f64>()
    }
}

impl PageRank for MatrixPageRank {
    type Result = Outcome<ArrayStore>;

    fn calc(&self) -> Result<Self::Result> {
        let n = self.num_nodes;
        if n == 0 {
            return Ok(Outcome {
                ranks: ArrayStore::filled(0, 0.0),
                iterations: 0,
                delta: 0.0,
                converged: true,
            });
        }
        let teleport = (1.0 - self.damping) / n as f64;
        let mut ranks = vec![1.0 / n as f64; n];
        let mut delta = f64::INFINITY;
        for iteration in 0..self.max_iterations {
            let next: Vec<f64> = self
                .transitions
                .chunks_exact(n)
                .map(|row| {
                    let dot: f64 = row.iter().zip(ranks.iter()).map(|(m, r)| m * r).sum();
                    teleport + self.damping * dot
                })
                .collect();
            delta = next.iter().zip(ranks.iter()).map(|(a, b)| (a - b).abs()).sum();
            ranks = next;
            if delta < self.tolerance {
                debug!(iterations = iteration + 1, delta, "matrix power iteration converged");
                return Ok(Outcome {
                    ranks: ranks.into(),
                    iterations: iteration + 1,
                    delta,
                    converged: true,
                });
            }
        }
        debug!(delta, "matrix power iteration hit the cap");
        Ok(Outcome {
            ranks: ranks.into(),
            iterations: self.max_iterations,
            delta,
            converged: false,
        })
    }
}
