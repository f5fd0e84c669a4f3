use super::*;
use crate::{graph::Graph, NodeId, Result};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Power iteration with teleportation and uniform redistribution of
/// dangling mass, run over the rank container `S`.
pub struct IteratedPageRank<'a, G, S>
where
    G: Graph + ?Sized,
{
    graph: &'a G,
    damping: f64,
    max_iterations: usize,
    tolerance: f64,
    _store: PhantomData<fn() -> S>,
}

#[derive(Debug, Clone)]
pub struct Outcome<S> {
    pub ranks: S,
    pub iterations: usize,
    /// L1 distance between the last two rank vectors.
    pub delta: f64,
    pub converged: bool,
}

impl<'a, G, S> IteratedPageRank<'a, G, S>
where
    G: Graph + ?Sized,
    S: RankStore,
{
    pub fn new(g: &'a G, config: &Config) -> Self {
        config.validate();
        Self {
            graph: g,
            damping: config.damping,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            _store: PhantomData,
        }
    }

    fn step(&self, ranks: &S, teleport: f64) -> Result<S> {
        let g = self.graph;
        let n = g.num_nodes();
        let mut next = S::filled(n, teleport);
        for u in g.iter_nodes() {
            let r_u = ranks.get(u)?;
            let d = g.out_degree(u);
            if d > 0 {
                let share = self.damping * r_u / d as f64;
                for v in g.neighbors(u) {
                    next.add(v, share)?;
                }
            } else {
                // the dangling node keeps its own share too
                let share = self.damping * r_u / n as f64;
                for v in g.iter_nodes() {
                    next.add(v, share)?;
                }
            }
        }
        Ok(next)
    }
}

impl<G, S> PageRank for IteratedPageRank<'_, G, S>
where
    G: Graph + ?Sized,
    S: RankStore,
{
    type Result = Outcome<S>;

    fn calc(&self) -> Result<Self::Result> {
        let n = self.graph.num_nodes();
        if n == 0 {
            return Ok(Outcome {
                ranks: S::filled(0, 0.0),
                iterations: 0,
                delta: 0.0,
                converged: true,
            });
        }
        debug!(
            store = S::NAME,
            nodes = n,
            damping = self.damping,
            "start power iteration"
        );
        let teleport = (1.0 - self.damping) / n as f64;
        let mut ranks = S::filled(n, 1.0 / n as f64);
        let mut delta = f64::INFINITY;
        for iteration in 0..self.max_iterations {
            let next = self.step(&ranks, teleport)?;
            delta = l1_distance(&ranks, &next)?;
            ranks = next;
            trace!(iteration, delta, "step");
            if delta < self.tolerance {
                debug!(store = S::NAME, iterations = iteration + 1, delta, "converged");
                return Ok(Outcome {
                    ranks,
                    iterations: iteration + 1,
                    delta,
                    converged: true,
                });
            }
        }
        debug!(
            store = S::NAME,
            max_iterations = self.max_iterations,
            delta,
            "iteration cap reached"
        );
        Ok(Outcome {
            ranks,
            iterations: self.max_iterations,
            delta,
            converged: false,
        })
    }
}

fn l1_distance<S: RankStore>(a: &S, b: &S) -> Result<f64> {
    let mut sum = 0.0;
    for u in 0..a.len() {
        sum += (b.get(u)? - a.get(u)?).abs();
    }
    Ok(sum)
}

/// Runs [`IteratedPageRank`] with store `S`, returning the ranks and the
/// number of iterations used.
pub fn pagerank<S, G>(graph: &G, config: &Config) -> Result<(S, usize)>
where
    S: RankStore,
    G: Graph + ?Sized,
{
    let outcome = IteratedPageRank::<G, S>::new(graph, config).calc()?;
    Ok((outcome.ranks, outcome.iterations))
}

impl<S: RankStore> PageRankResult for Outcome<S> {
    fn ranks(&self) -> Result<Vec<f64>> {
        self.ranks.to_vec()
    }

    fn rank(&self, node: NodeId) -> Result<f64> {
        self.ranks.get(node)
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn converged(&self) -> bool {
        self.converged
    }

    fn debug<'a, G: Graph + ?Sized>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, G: Graph + ?Sized, S> {
    graph: &'a G,
    result: &'a Outcome<S>,
}

impl<G: Graph + ?Sized, S: RankStore> std::fmt::Debug for ResultDebug<'_, G, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_nodes() {
            let d = self.graph.out_degree(v);
            match self.result.ranks.get(v) {
                Ok(p) => writeln!(f, "{v}: {p:?}, out_degree={d}")?,
                Err(e) => writeln!(f, "{v}: {e}, out_degree={d}")?,
            }
        }
        Ok(())
    }
}
