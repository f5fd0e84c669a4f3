//! Fixed-size directed graphs over node ids `0..n`.
//!
//! Every backend stores the same edges differently, so PageRank can be timed
//! against each representation. Neighbor order is backend specific, the
//! neighbor sets are not.

use crate::{Error, NodeId, Result};

mod convert;
pub use self::convert::import;
mod linked;
pub use self::linked::LinkedGraph;
mod map;
pub use self::map::MapGraph;
mod matrix;
pub use self::matrix::MatrixGraph;
mod sparse;
pub use self::sparse::SparseGraph;
mod stats;
pub use self::stats::GraphStats;

pub trait Graph {
    /// A graph of `num_nodes` isolated nodes.
    fn new(num_nodes: usize) -> Self
    where
        Self: Sized;

    fn num_nodes(&self) -> usize;

    /// Number of recorded edges, duplicates included where the backend keeps them.
    fn edge_count(&self) -> usize;

    /// Records the directed edge `from -> to`.
    ///
    /// Fails with [`Error::OutOfRange`] and leaves the graph untouched when
    /// either endpoint is not a node of this graph.
    fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()>;

    /// Out-neighbors of `node`. Yields nothing for an unknown node.
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }

    /// Rough heap and inline footprint in bytes.
    fn approx_bytes(&self) -> usize;

    fn iter_nodes(&self) -> std::ops::Range<NodeId> {
        0..self.num_nodes()
    }
}

/// Runtime tag for the four backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphKind {
    Linked,
    Matrix,
    Map,
    Sparse,
}

impl GraphKind {
    pub const ALL: [GraphKind; 4] = [
        GraphKind::Linked,
        GraphKind::Matrix,
        GraphKind::Map,
        GraphKind::Sparse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Linked => "LinkedList",
            GraphKind::Matrix => "Matrix",
            GraphKind::Map => "Map",
            GraphKind::Sparse => "Sparse",
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn check_node(node: NodeId, num_nodes: usize) -> Result<()> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(Error::OutOfRange { node, num_nodes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeMap;

    fn neighbor_sets<G: Graph>(g: &G) -> Vec<Vec<NodeId>> {
        g.iter_nodes()
            .map(|u| {
                let mut vs: Vec<_> = g.neighbors(u).collect();
                vs.sort();
                vs.dedup();
                vs
            })
            .collect()
    }

    fn build<G: Graph>(n: usize, edges: &[(NodeId, NodeId)]) -> G {
        let mut g = G::new(n);
        for (u, v) in edges.iter() {
            g.add_edge(*u, *v).unwrap();
        }
        g
    }

    #[test]
    fn empty() {
        fn check<G: Graph>() {
            let g = G::new(0);
            assert_eq!(g.num_nodes(), 0);
            assert_eq!(g.edge_count(), 0);
            assert_eq!(g.neighbors(0).count(), 0);
        }
        check::<LinkedGraph>();
        check::<MatrixGraph>();
        check::<MapGraph>();
        check::<SparseGraph>();
    }

    #[test]
    fn out_of_range_is_rejected() {
        fn check<G: Graph>() {
            let mut g = G::new(3);
            assert_eq!(
                g.add_edge(0, 3),
                Err(Error::OutOfRange {
                    node: 3,
                    num_nodes: 3
                })
            );
            assert_eq!(
                g.add_edge(7, 1),
                Err(Error::OutOfRange {
                    node: 7,
                    num_nodes: 3
                })
            );
            assert_eq!(g.edge_count(), 0);
            assert_eq!(g.out_degree(0), 0);
        }
        check::<LinkedGraph>();
        check::<MatrixGraph>();
        check::<MapGraph>();
        check::<SparseGraph>();
    }

    #[test]
    fn out_degree_matches_neighbors() {
        let edges = [(0, 1), (0, 2), (1, 2), (2, 0), (2, 1), (3, 3)];
        fn check<G: Graph>(edges: &[(NodeId, NodeId)]) {
            let g: G = build(5, edges);
            for u in g.iter_nodes() {
                assert_eq!(g.out_degree(u), g.neighbors(u).count(), "node {u}");
            }
            assert_eq!(g.out_degree(4), 0);
        }
        check::<LinkedGraph>(&edges);
        check::<MatrixGraph>(&edges);
        check::<MapGraph>(&edges);
        check::<SparseGraph>(&edges);
    }

    #[quickcheck]
    fn backends_agree_on_neighbor_sets(edges: Vec<(u8, u8)>) {
        const N: usize = 12;
        let edges: Vec<_> = edges
            .into_iter()
            .map(|(u, v)| (u as usize % N, v as usize % N))
            .collect();
        let oracle = {
            let mut oracle: BTreeMap<NodeId, Vec<NodeId>> = (0..N).map(|u| (u, vec![])).collect();
            for (u, v) in edges.iter() {
                oracle.get_mut(u).unwrap().push(*v);
            }
            oracle
                .into_values()
                .map(|mut vs| {
                    vs.sort();
                    vs.dedup();
                    vs
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(neighbor_sets(&build::<LinkedGraph>(N, &edges)), oracle);
        assert_eq!(neighbor_sets(&build::<MatrixGraph>(N, &edges)), oracle);
        assert_eq!(neighbor_sets(&build::<MapGraph>(N, &edges)), oracle);
        assert_eq!(neighbor_sets(&build::<SparseGraph>(N, &edges)), oracle);
    }
}
