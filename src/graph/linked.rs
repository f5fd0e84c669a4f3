use super::*;
use std::fmt;

/// Adjacency lists as singly-linked chains of edge records.
///
/// Records live in one arena and link to each other by index, so an insert
/// is a constant-time prepend and neighbors come out newest first.
#[derive(Debug, Clone, Default)]
pub struct LinkedGraph {
    heads: Vec<Option<usize>>,
    records: Vec<EdgeRecord>,
}

#[derive(Debug, Clone)]
struct EdgeRecord {
    sink: NodeId,
    next: Option<usize>,
}

impl Graph for LinkedGraph {
    fn new(num_nodes: usize) -> Self {
        Self {
            heads: vec![None; num_nodes],
            records: vec![],
        }
    }

    fn num_nodes(&self) -> usize {
        self.heads.len()
    }

    fn edge_count(&self) -> usize {
        self.records.len()
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        check_node(from, self.num_nodes())?;
        check_node(to, self.num_nodes())?;
        let idx = self.records.len();
        self.records.push(EdgeRecord {
            sink: to,
            next: self.heads[from],
        });
        self.heads[from] = Some(idx);
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(Chain {
            records: &self.records,
            cursor: self.heads.get(node).copied().flatten(),
        })
    }

    fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.heads.capacity() * std::mem::size_of::<Option<usize>>()
            + self.records.capacity() * std::mem::size_of::<EdgeRecord>()
    }
}

struct Chain<'a> {
    records: &'a [EdgeRecord],
    cursor: Option<usize>,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let rec = &self.records[self.cursor?];
        self.cursor = rec.next;
        Some(rec.sink)
    }
}

impl fmt::Display for LinkedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.iter_nodes() {
            write!(f, "Node {u}: ")?;
            for v in self.neighbors(u) {
                write!(f, "{v} -> ")?;
            }
            writeln!(f, "None")?;
        }
        Ok(())
    }
}
