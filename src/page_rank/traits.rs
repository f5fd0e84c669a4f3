use crate::{graph::Graph, NodeId, Result};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> Result<Self::Result>;
}

pub trait PageRankResult {
    /// Ranks indexed by node id.
    fn ranks(&self) -> Result<Vec<f64>>;
    fn rank(&self, node: NodeId) -> Result<f64>;
    fn iterations(&self) -> usize;
    fn converged(&self) -> bool;
    fn debug<'a, G: Graph + ?Sized>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a;
}
