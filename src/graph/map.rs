use super::*;
use std::{collections::HashMap, fmt};

/// Node id to out-neighbor vector, kept in a hash map.
#[derive(Debug, Clone, Default)]
pub struct MapGraph {
    num_nodes: usize,
    adjacency: HashMap<NodeId, Vec<NodeId>, ahash::RandomState>,
    edges: usize,
}

impl Graph for MapGraph {
    fn new(num_nodes: usize) -> Self {
        let mut adjacency = HashMap::with_capacity_and_hasher(num_nodes, ahash::RandomState::new());
        for u in 0..num_nodes {
            adjacency.insert(u, vec![]);
        }
        Self {
            num_nodes,
            adjacency,
            edges: 0,
        }
    }

    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        check_node(to, self.num_nodes)?;
        let sinks = self.adjacency.get_mut(&from).ok_or(Error::OutOfRange {
            node: from,
            num_nodes: self.num_nodes,
        })?;
        sinks.push(to);
        self.edges += 1;
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        match self.adjacency.get(&node) {
            Some(sinks) => Box::new(sinks.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, Vec::len)
    }

    fn approx_bytes(&self) -> usize {
        let slots = self.adjacency.capacity()
            * (std::mem::size_of::<NodeId>() + std::mem::size_of::<Vec<NodeId>>());
        let sinks: usize = self
            .adjacency
            .values()
            .map(|vs| vs.capacity() * std::mem::size_of::<NodeId>())
            .sum();
        std::mem::size_of::<Self>() + slots + sinks
    }
}

impl fmt::Display for MapGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.iter_nodes() {
            let sinks: Vec<_> = self.neighbors(u).collect();
            writeln!(f, "Node {u}: {sinks:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order() {
        let mut g = MapGraph::new(3);
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![2, 1, 2]);
        assert_eq!(g.out_degree(0), 3);
        assert_eq!(g.out_degree(5), 0);
        assert_eq!(g.to_string(), "Node 0: [2, 1, 2]\nNode 1: []\nNode 2: []\n");
    }
}
