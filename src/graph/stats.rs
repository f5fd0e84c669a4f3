use super::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub avg_out_degree: f64,
    pub max_out_degree: usize,
    pub min_out_degree: usize,
    /// `edges / (n * (n - 1))`, zero for graphs with fewer than two nodes.
    pub density: f64,
}

impl GraphStats {
    pub fn of<G: Graph + ?Sized>(graph: &G) -> Self {
        let num_nodes = graph.num_nodes();
        let mut num_edges = 0;
        let mut max_out_degree = 0;
        let mut min_out_degree = None;
        for u in graph.iter_nodes() {
            let d = graph.out_degree(u);
            num_edges += d;
            max_out_degree = max_out_degree.max(d);
            min_out_degree = Some(min_out_degree.map_or(d, |m: usize| m.min(d)));
        }
        let avg_out_degree = if num_nodes > 0 {
            num_edges as f64 / num_nodes as f64
        } else {
            0.0
        };
        let density = if num_nodes > 1 {
            num_edges as f64 / (num_nodes * (num_nodes - 1)) as f64
        } else {
            0.0
        };
        Self {
            num_nodes,
            num_edges,
            avg_out_degree,
            max_out_degree,
            min_out_degree: min_out_degree.unwrap_or(0),
            density,
        }
    }

    /// Nodes without out-edges.
    pub fn dangling<G: Graph + ?Sized>(graph: &G) -> Vec<NodeId> {
        graph
            .iter_nodes()
            .filter(|u| graph.out_degree(*u) == 0)
            .collect()
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Nodes: {}", self.num_nodes)?;
        writeln!(f, "  Edges: {}", self.num_edges)?;
        writeln!(f, "  Average Out-Degree: {:.2}", self.avg_out_degree)?;
        writeln!(f, "  Max Out-Degree: {}", self.max_out_degree)?;
        writeln!(f, "  Min Out-Degree: {}", self.min_out_degree)?;
        writeln!(f, "  Density: {:.4}", self.density)
    }
}
