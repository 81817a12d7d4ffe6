use std::{cmp::Ordering, collections::BinaryHeap};

use crate::constants::Distance;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest weight
/// first, ties are broken by the smaller node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node_idx: NodeIndex,
    pub weight: Distance,
}

impl Candidate {
    pub fn new(node_idx: NodeIndex, weight: Distance) -> Self {
        Self { node_idx, weight }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Runs a single source, single target Dijkstra search.
    ///
    /// Returns `None` if `target` cannot be reached from `source` or if either
    /// node does not exist.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if !self.g.contains(source) || !self.g.contains(target) {
            debug!(
                "Invalid query {} -> {}: graph has {} nodes",
                source,
                target,
                self.g.num_nodes()
            );
            self.stats.finish();
            return None;
        }

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0));
        }

        let num_nodes = self.g.num_nodes();
        let mut distances: Vec<Option<Distance>> = vec![None; num_nodes];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        distances[source.index()] = Some(0);

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Stale entry, node was already settled with a smaller weight
            if distances[node_idx.index()].is_some_and(|best| weight > best) {
                continue;
            }

            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (neighbor, edge_weight) in self.g.neighbors(node_idx) {
                let new_distance = weight + Distance::from(edge_weight);
                if distances[neighbor.index()].map_or(true, |current| new_distance < current) {
                    distances[neighbor.index()] = Some(new_distance);
                    predecessors[neighbor.index()] = Some(node_idx);
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &distances, &predecessors);
        let duration = self.stats.duration.unwrap_or_default();
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                duration, self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                duration, self.stats.nodes_settled
            );
        }

        sp
    }
}
