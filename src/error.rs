use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("node {node} is out of range for a graph of {num_nodes} nodes")]
    OutOfRange { node: NodeId, num_nodes: usize },
    #[error("key {0} not found")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
