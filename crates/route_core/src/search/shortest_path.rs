use crate::{constants::Distance, graph::NodeIndex};

/// A minimum weight path. `nodes` starts with the source and ends with the
/// target, `weight` is the sum of the edge weights along it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Distance,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Distance) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }
}
