use crate::{
    constants::Distance,
    graph::{Graph, NodeIndex},
};

use self::{dijkstra::Dijkstra, shortest_path::ShortestPath};

pub mod dijkstra;
pub mod shortest_path;

/// Computes a minimum weight path from `source` to `target`.
///
/// Returns `None` if there is no such path or if one of the nodes is not part
/// of the graph.
pub fn find_route(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
    Dijkstra::new(g).search(source, target)
}

/// Walks the predecessor slots back from `target` and returns the path in
/// source to target order. `distances[n]` is `None` for nodes never reached.
pub(crate) fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    distances: &[Option<Distance>],
    predecessors: &[Option<NodeIndex>],
) -> Option<ShortestPath> {
    let weight = (*distances.get(target.index())?)?;

    let mut path = vec![target];
    let mut node = target;
    while node != source {
        node = predecessors[node.index()]?;
        path.push(node);
    }
    path.reverse();

    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Distance,
    path: Option<ShortestPath>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(
        Some(ShortestPath::new(expected_path, expected_weight)),
        path
    );
}

/// Sum of the cheapest edges between consecutive nodes of `path`, `None` if
/// two consecutive nodes are not adjacent.
#[cfg(test)]
pub(crate) fn path_weight(g: &Graph, path: &[NodeIndex]) -> Option<Distance> {
    path.windows(2).try_fold(0, |acc, pair| {
        g.neighbors(pair[0])
            .filter(|(n, _)| *n == pair[1])
            .map(|(_, w)| w)
            .min()
            .map(|w| acc + Distance::from(w))
    })
}
