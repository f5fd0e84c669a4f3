use crate::NodeId;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::{Ordering, Reverse};

pub fn norm_1(v: &[f64]) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// The `k` highest ranked nodes, best first. Equal ranks go to the lower id.
pub fn top_n(ranks: &[f64], k: usize) -> Vec<(NodeId, f64)> {
    let mut q = KeyedPriorityQueue::new();
    for (u, r) in ranks.iter().enumerate() {
        q.push(u, (FullOrdFloat(*r), Reverse(u)));
    }
    let mut res = Vec::with_capacity(k.min(ranks.len()));
    while res.len() < k {
        let Some((u, (FullOrdFloat(r), _))) = q.pop() else {
            break;
        };
        res.push((u, r));
    }
    res
}

/// Node ids sorted by descending rank.
pub fn ordering(ranks: &[f64]) -> Vec<NodeId> {
    top_n(ranks, ranks.len()).into_iter().map(|(u, _)| u).collect()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FullOrdFloat(pub f64);
impl PartialOrd for FullOrdFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FullOrdFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialEq for FullOrdFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for FullOrdFloat {}
