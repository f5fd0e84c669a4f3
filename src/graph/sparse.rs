use super::*;
use std::fmt;

/// Global edge list plus per-node out-neighbor vectors.
#[derive(Debug, Clone, Default)]
pub struct SparseGraph {
    edges: Vec<(NodeId, NodeId)>,
    out_neighbors: Vec<Vec<NodeId>>,
}

impl SparseGraph {
    /// Edges in insertion order.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}

impl Graph for SparseGraph {
    fn new(num_nodes: usize) -> Self {
        Self {
            edges: vec![],
            out_neighbors: vec![vec![]; num_nodes],
        }
    }

    fn num_nodes(&self) -> usize {
        self.out_neighbors.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        check_node(from, self.num_nodes())?;
        check_node(to, self.num_nodes())?;
        self.edges.push((from, to));
        self.out_neighbors[from].push(to);
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match self.out_neighbors.get(node) {
            Some(sinks) => Box::new(sinks.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.out_neighbors.get(node).map_or(0, Vec::len)
    }

    fn approx_bytes(&self) -> usize {
        let sinks: usize = self
            .out_neighbors
            .iter()
            .map(|vs| vs.capacity() * std::mem::size_of::<NodeId>())
            .sum();
        std::mem::size_of::<Self>()
            + self.edges.capacity() * std::mem::size_of::<(NodeId, NodeId)>()
            + self.out_neighbors.capacity() * std::mem::size_of::<Vec<NodeId>>()
            + sinks
    }
}

impl fmt::Display for SparseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edges: {:?}", self.edges)?;
        writeln!(f, "Adjacency representation:")?;
        for (u, sinks) in self.out_neighbors.iter().enumerate() {
            writeln!(f, "Node {u}: {sinks:?}")?;
        }
        Ok(())
    }
}
