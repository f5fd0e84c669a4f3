//! Deterministic graph builders for tests and benchmarks.
//!
//! Randomized builders draw from the generator they are handed, so the same
//! seed always yields the same graph regardless of what else is running.

use crate::{graph::Graph, NodeId, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::fmt;

/// Edges of the fixed ten-node reference topology.
pub const REFERENCE_EDGES: [(NodeId, NodeId); 15] = [
    (0, 1),
    (0, 3),
    (1, 2),
    (1, 4),
    (2, 5),
    (3, 4),
    (3, 6),
    (4, 5),
    (4, 7),
    (5, 8),
    (6, 7),
    (7, 8),
    (7, 9),
    (8, 9),
    (9, 6),
];

pub const DEFAULT_SEED: u64 = 42;

pub fn from_edges<G: Graph>(num_nodes: usize, edges: &[(NodeId, NodeId)]) -> Result<G> {
    let mut g = G::new(num_nodes);
    for (u, v) in edges.iter() {
        g.add_edge(*u, *v)?;
    }
    Ok(g)
}

pub fn reference<G: Graph>() -> Result<G> {
    from_edges(10, &REFERENCE_EDGES)
}

/// Every ordered pair of distinct nodes gets an edge with probability `p`.
pub fn random<G, R>(rng: &mut R, num_nodes: usize, p: f64) -> Result<G>
where
    G: Graph,
    R: Rng,
{
    assert!((0.0..=1.0).contains(&p), "p={p}");
    let mut g = G::new(num_nodes);
    for u in 0..num_nodes {
        for v in 0..num_nodes {
            if u != v && rng.random::<f64>() < p {
                g.add_edge(u, v)?;
            }
        }
    }
    Ok(g)
}

/// Preferential attachment.
///
/// Starts from a complete graph on `m + 1` nodes; each later node sends `m`
/// edges to earlier nodes picked with probability proportional to their
/// out-degree, with replacement. Graphs smaller than `m + 1` are complete.
pub fn scale_free<G, R>(rng: &mut R, num_nodes: usize, m: usize) -> Result<G>
where
    G: Graph,
    R: Rng,
{
    if num_nodes < m + 1 {
        return complete(num_nodes);
    }
    let mut g = G::new(num_nodes);
    for u in 0..=m {
        for v in 0..=m {
            if u != v {
                g.add_edge(u, v)?;
            }
        }
    }
    let mut degrees = vec![m; m + 1];
    for new_node in (m + 1)..num_nodes {
        let total: usize = degrees.iter().sum();
        let mut targets = Vec::with_capacity(m);
        for _ in 0..m {
            let target = if total == 0 {
                rng.random_range(0..degrees.len())
            } else {
                pick_weighted(&degrees, rng.random_range(0..total))
            };
            targets.push(target);
        }
        degrees.push(0);
        for target in targets {
            g.add_edge(new_node, target)?;
            degrees[new_node] += 1;
        }
    }
    Ok(g)
}

// Index whose cumulative weight first exceeds `ticket`.
fn pick_weighted(weights: &[usize], mut ticket: usize) -> usize {
    for (i, w) in weights.iter().enumerate() {
        if ticket < *w {
            return i;
        }
        ticket -= w;
    }
    weights.len() - 1
}

/// `0 -> 1 -> ... -> n-1 -> 0`.
pub fn chain<G: Graph>(num_nodes: usize) -> Result<G> {
    let mut g = G::new(num_nodes);
    for u in 0..num_nodes {
        g.add_edge(u, (u + 1) % num_nodes)?;
    }
    Ok(g)
}

/// Node 0 linked both ways with every other node.
pub fn star<G: Graph>(num_nodes: usize) -> Result<G> {
    let mut g = G::new(num_nodes);
    for u in 1..num_nodes {
        g.add_edge(0, u)?;
        g.add_edge(u, 0)?;
    }
    Ok(g)
}

pub fn complete<G: Graph>(num_nodes: usize) -> Result<G> {
    let mut g = G::new(num_nodes);
    for u in 0..num_nodes {
        for v in 0..num_nodes {
            if u != v {
                g.add_edge(u, v)?;
            }
        }
    }
    Ok(g)
}

/// The graph configurations the analyzer sweeps over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preset {
    Reference,
    Random { nodes: usize, p: f64 },
    Chain { nodes: usize },
    Star { nodes: usize },
    ScaleFree { nodes: usize, m: usize },
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Reference,
        Preset::Random { nodes: 50, p: 0.1 },
        Preset::Random {
            nodes: 200,
            p: 0.05,
        },
        Preset::Random {
            nodes: 500,
            p: 0.02,
        },
        Preset::Chain { nodes: 100 },
        Preset::Star { nodes: 100 },
        Preset::ScaleFree { nodes: 100, m: 3 },
    ];

    pub fn num_nodes(&self) -> usize {
        match self {
            Preset::Reference => 10,
            Preset::Random { nodes, .. }
            | Preset::Chain { nodes }
            | Preset::Star { nodes }
            | Preset::ScaleFree { nodes, .. } => *nodes,
        }
    }

    /// Builds the preset, seeding a fresh generator with `seed`.
    pub fn build<G: Graph>(&self, seed: u64) -> Result<G> {
        let mut rng = SmallRng::seed_from_u64(seed);
        match *self {
            Preset::Reference => reference(),
            Preset::Random { nodes, p } => random(&mut rng, nodes, p),
            Preset::Chain { nodes } => chain(nodes),
            Preset::Star { nodes } => star(nodes),
            Preset::ScaleFree { nodes, m } => scale_free(&mut rng, nodes, m),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Reference => write!(f, "Reference (10 nodes)"),
            Preset::Random { nodes, .. } => {
                let size = match *nodes {
                    0..=99 => "Small",
                    100..=299 => "Medium",
                    _ => "Large",
                };
                write!(f, "{size} Random ({nodes} nodes)")
            }
            Preset::Chain { nodes } => write!(f, "Chain ({nodes} nodes)"),
            Preset::Star { nodes } => write!(f, "Star ({nodes} nodes)"),
            Preset::ScaleFree { nodes, .. } => write!(f, "Scale-Free ({nodes} nodes)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::*;

    fn edge_list<G: Graph>(g: &G) -> Vec<(NodeId, NodeId)> {
        let mut es: Vec<_> = g
            .iter_nodes()
            .flat_map(|u| g.neighbors(u).map(move |v| (u, v)))
            .collect();
        es.sort();
        es.dedup();
        es
    }

    #[test]
    fn reference_shape() {
        let g: SparseGraph = reference().unwrap();
        assert_eq!(g.num_nodes(), 10);
        assert_eq!(g.edges(), &REFERENCE_EDGES);
        assert!(GraphStats::dangling(&g).is_empty());
    }

    #[test]
    fn chain_wraps() {
        let g: LinkedGraph = chain(4).unwrap();
        assert_eq!(edge_list(&g), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        let g: LinkedGraph = chain(0).unwrap();
        assert_eq!(g.num_nodes(), 0);
    }

    #[test]
    fn star_is_bidirectional() {
        let g: MapGraph = star(4).unwrap();
        assert_eq!(g.out_degree(0), 3);
        for u in 1..4 {
            assert_eq!(g.neighbors(u).collect::<Vec<_>>(), vec![0]);
        }
    }

    #[test]
    fn complete_has_every_pair() {
        let g: MatrixGraph = complete(5).unwrap();
        assert_eq!(g.edge_count(), 20);
        assert_eq!(GraphStats::of(&g).density, 1.0);
    }

    #[test]
    fn random_is_reproducible() {
        let a: SparseGraph = Preset::Random { nodes: 30, p: 0.2 }.build(7).unwrap();
        let b: SparseGraph = Preset::Random { nodes: 30, p: 0.2 }.build(7).unwrap();
        assert_eq!(a.edges(), b.edges());
        assert!(a.edges().iter().all(|(u, v)| u != v));
    }

    #[test]
    fn random_extremes() {
        let mut rng = SmallRng::seed_from_u64(DEFAULT_SEED);
        let g: SparseGraph = random(&mut rng, 6, 0.0).unwrap();
        assert_eq!(g.edge_count(), 0);
        let g: SparseGraph = random(&mut rng, 6, 1.0).unwrap();
        assert_eq!(g.edge_count(), 30);
    }

    #[test]
    fn scale_free_degrees() {
        const N: usize = 40;
        const M: usize = 3;
        let mut rng = SmallRng::seed_from_u64(DEFAULT_SEED);
        let g: SparseGraph = scale_free(&mut rng, N, M).unwrap();
        assert_eq!(g.edge_count(), (M + 1) * M + (N - M - 1) * M);
        for u in (M + 1)..N {
            assert_eq!(g.out_degree(u), M);
            assert!(g.neighbors(u).all(|v| v < u), "node {u}");
        }
    }

    #[test]
    fn scale_free_small_is_complete() {
        let mut rng = SmallRng::seed_from_u64(DEFAULT_SEED);
        let g: SparseGraph = scale_free(&mut rng, 3, 3).unwrap();
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn presets_build_every_backend() {
        for preset in Preset::ALL.iter() {
            let a: LinkedGraph = preset.build(DEFAULT_SEED).unwrap();
            let b: MatrixGraph = preset.build(DEFAULT_SEED).unwrap();
            assert_eq!(a.num_nodes(), preset.num_nodes());
            assert_eq!(edge_list(&a), edge_list(&b), "{preset}");
        }
    }

    #[test]
    fn pick_weighted_bounds() {
        assert_eq!(pick_weighted(&[2, 0, 1], 0), 0);
        assert_eq!(pick_weighted(&[2, 0, 1], 1), 0);
        assert_eq!(pick_weighted(&[2, 0, 1], 2), 2);
    }
}
