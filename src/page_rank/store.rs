//! Containers realizing the node-to-rank mapping.

use crate::{hash_table::HashTable, Error, NodeId, Result};
use std::collections::HashMap;

pub trait RankStore: Sized {
    /// Label used in reports.
    const NAME: &'static str;

    /// Every node in `0..num_nodes` mapped to `value`.
    fn filled(num_nodes: usize, value: f64) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, node: NodeId) -> Result<f64>;

    fn add(&mut self, node: NodeId, delta: f64) -> Result<()>;

    fn to_vec(&self) -> Result<Vec<f64>> {
        (0..self.len()).map(|u| self.get(u)).collect()
    }

    fn approx_bytes(&self) -> usize;
}

/// Ranks in the chained [`HashTable`], one bucket per node.
#[derive(Debug, Clone)]
pub struct HashTableStore {
    table: HashTable<NodeId, f64>,
}

impl HashTableStore {
    pub fn table(&self) -> &HashTable<NodeId, f64> {
        &self.table
    }
}

impl RankStore for HashTableStore {
    const NAME: &'static str = "HashTable";

    fn filled(num_nodes: usize, value: f64) -> Self {
        let mut table = HashTable::new(num_nodes.max(1));
        for u in 0..num_nodes {
            table.set(u, value);
        }
        Self { table }
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn get(&self, node: NodeId) -> Result<f64> {
        self.table.get(&node).copied()
    }

    fn add(&mut self, node: NodeId, delta: f64) -> Result<()> {
        *self.table.get_mut(&node)? += delta;
        Ok(())
    }

    fn approx_bytes(&self) -> usize {
        self.table.approx_bytes()
    }
}

/// Ranks in a plain vector indexed by node id.
#[derive(Debug, Clone)]
pub struct ArrayStore {
    ranks: Vec<f64>,
}

impl ArrayStore {
    pub fn as_slice(&self) -> &[f64] {
        &self.ranks
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.ranks
    }
}

impl From<Vec<f64>> for ArrayStore {
    fn from(ranks: Vec<f64>) -> Self {
        Self { ranks }
    }
}

impl RankStore for ArrayStore {
    const NAME: &'static str = "Array";

    fn filled(num_nodes: usize, value: f64) -> Self {
        Self {
            ranks: vec![value; num_nodes],
        }
    }

    fn len(&self) -> usize {
        self.ranks.len()
    }

    fn get(&self, node: NodeId) -> Result<f64> {
        self.ranks.get(node).copied().ok_or(Error::OutOfRange {
            node,
            num_nodes: self.ranks.len(),
        })
    }

    fn add(&mut self, node: NodeId, delta: f64) -> Result<()> {
        let num_nodes = self.ranks.len();
        let r = self
            .ranks
            .get_mut(node)
            .ok_or(Error::OutOfRange { node, num_nodes })?;
        *r += delta;
        Ok(())
    }

    fn to_vec(&self) -> Result<Vec<f64>> {
        Ok(self.ranks.clone())
    }

    fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.ranks.capacity() * std::mem::size_of::<f64>()
    }
}

/// Ranks in a `HashMap` keyed by node id.
#[derive(Debug, Clone)]
pub struct MapStore {
    ranks: HashMap<NodeId, f64, ahash::RandomState>,
}

impl MapStore {
    pub fn as_map(&self) -> &HashMap<NodeId, f64, ahash::RandomState> {
        &self.ranks
    }
}

impl RankStore for MapStore {
    const NAME: &'static str = "Map";

    fn filled(num_nodes: usize, value: f64) -> Self {
        let mut ranks = HashMap::with_capacity_and_hasher(num_nodes, ahash::RandomState::new());
        for u in 0..num_nodes {
            ranks.insert(u, value);
        }
        Self { ranks }
    }

    fn len(&self) -> usize {
        self.ranks.len()
    }

    fn get(&self, node: NodeId) -> Result<f64> {
        self.ranks
            .get(&node)
            .copied()
            .ok_or_else(|| Error::KeyNotFound(node.to_string()))
    }

    fn add(&mut self, node: NodeId, delta: f64) -> Result<()> {
        let r = self
            .ranks
            .get_mut(&node)
            .ok_or_else(|| Error::KeyNotFound(node.to_string()))?;
        *r += delta;
        Ok(())
    }

    fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.ranks.capacity() * (std::mem::size_of::<NodeId>() + std::mem::size_of::<f64>())
    }
}
