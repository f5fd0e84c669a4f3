use super::*;
use std::fmt;

/// Dense `n * n` adjacency matrix, row-major.
///
/// A repeated edge sets an already set cell, so this backend is the only one
/// that stores an edge set rather than a multiset.
#[derive(Debug, Clone, Default)]
pub struct MatrixGraph {
    num_nodes: usize,
    cells: Vec<bool>,
    degrees: Vec<usize>,
    edges: usize,
}

impl MatrixGraph {
    fn row(&self, node: NodeId) -> &[bool] {
        if node < self.num_nodes {
            let start = node * self.num_nodes;
            &self.cells[start..start + self.num_nodes]
        } else {
            &[]
        }
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.row(from).get(to).copied().unwrap_or(false)
    }
}

impl Graph for MatrixGraph {
    fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            cells: vec![false; num_nodes * num_nodes],
            degrees: vec![0; num_nodes],
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
        check_node(from, self.num_nodes)?;
        check_node(to, self.num_nodes)?;
        let cell = &mut self.cells[from * self.num_nodes + to];
        if !*cell {
            *cell = true;
            self.degrees[from] += 1;
            self.edges += 1;
        }
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(
            self.row(node)
                .iter()
                .enumerate()
                .filter_map(|(v, connected)| if *connected { Some(v) } else { None }),
        )
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.degrees.get(node).copied().unwrap_or(0)
    }

    fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.cells.capacity() * std::mem::size_of::<bool>()
            + self.degrees.capacity() * std::mem::size_of::<usize>()
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency Matrix:")?;
        for u in self.iter_nodes() {
            let row: Vec<u8> = self.row(u).iter().map(|x| *x as u8).collect();
            writeln!(f, "Node {u}: {row:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_neighbors() {
        let mut g = MatrixGraph::new(4);
        g.add_edge(1, 3).unwrap();
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert!(g.has_edge(1, 3));
        assert!(!g.has_edge(3, 1));
        assert!(!g.has_edge(9, 1));
    }

    #[test]
    fn duplicates_collapse() {
        let mut g = MatrixGraph::new(2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(0), 1);
    }

    #[test]
    fn display() {
        let mut g = MatrixGraph::new(2);
        g.add_edge(0, 1).unwrap();
        assert_eq!(
            g.to_string(),
            "Adjacency Matrix:\nNode 0: [0, 1]\nNode 1: [0, 0]\n"
        );
    }
}
