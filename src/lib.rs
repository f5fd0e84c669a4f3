mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};

pub mod analysis;
pub mod generators;
pub mod graph;
pub use self::graph::{Graph, GraphKind, GraphStats, LinkedGraph, MapGraph, MatrixGraph, SparseGraph};
pub mod hash_table;
pub use self::hash_table::HashTable;
pub mod page_rank;
pub use self::page_rank::{pagerank, Config};

pub type NodeId = usize;
