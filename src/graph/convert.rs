use super::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;

/// Copies an `algograph` graph into one of our backends.
///
/// Vertices are numbered in the source's iteration order; the returned
/// vector maps each node id back to its vertex. Every out-edge of every
/// vertex becomes a directed edge, so an undirected source yields both
/// directions.
pub fn import<G, Q>(source: &Q) -> Result<(G, Vec<VertexId>)>
where
    G: Graph,
    Q: QueryableGraph,
{
    let vertices: Vec<VertexId> = source.iter_vertices().collect();
    let ids: HashMap<VertexId, NodeId, ahash::RandomState> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (*v, i))
        .collect();
    let mut graph = G::new(vertices.len());
    for (u, vert) in vertices.iter().enumerate() {
        for e in source.out_edges(vert) {
            let v = *ids
                .get(&e.sink)
                .ok_or_else(|| Error::KeyNotFound(format!("{:?}", e.sink)))?;
            graph.add_edge(u, v)?;
        }
    }
    Ok((graph, vertices))
}
