use crate::constants::Weight;
use anyhow::Context;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash, path::Path};

/// Default integer typer for node and edge indices
/// Needs to be increased for very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    /// Values that do not fit map to `u32::MAX`, which is never a valid index
    #[inline(always)]
    fn new(x: usize) -> Self {
        u32::try_from(x).unwrap_or(u32::MAX)
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Node identifier. A node is nothing more than its position in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// Undirected weighted edge. `source` and `target` only record the order in
/// which the endpoints were given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint of the edge which is not `node_idx`.
    #[inline]
    pub fn opposite(&self, node_idx: NodeIndex) -> NodeIndex {
        if self.source == node_idx {
            self.target
        } else {
            self.source
        }
    }
}

/// Graph with a fixed number of nodes and undirected weighted edges.
///
/// Edges are stored once in `edges`, `adjacency[n]` holds the indices of all
/// edges incident to node `n`. Edges can only be added, never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<Idx = DefaultIdx> {
    pub adjacency: Vec<Vec<EdgeIndex<Idx>>>,
    pub edges: Vec<Edge<Idx>>,
}

impl Graph {
    /// Creates a graph with `num_nodes` isolated nodes.
    pub fn new(num_nodes: usize) -> Self {
        assert!(
            num_nodes < NodeIndex::end().index(),
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        Self {
            adjacency: vec![Vec::new(); num_nodes],
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        let mut g = Self::new(num_nodes);
        g.edges.reserve(num_edges);
        g
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if `node_idx` is a valid node of this graph.
    #[inline]
    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.num_nodes()
    }

    /// Connects `u` and `v` with an undirected edge of the given weight.
    ///
    /// If either endpoint is not a node of the graph the call is ignored and
    /// `None` is returned. The adjacency lists are left untouched in that case.
    pub fn connect(&mut self, u: usize, v: usize, weight: Weight) -> Option<EdgeIndex> {
        if u >= self.num_nodes() || v >= self.num_nodes() {
            warn!(
                "Ignoring edge ({}, {}, {}): graph has only {} nodes",
                u,
                v,
                weight,
                self.num_nodes()
            );
            return None;
        }

        self.add_edge(Edge::new(node_index(u), node_index(v), weight))
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its index
    /// type
    ///
    /// Returns the index of the new created edge or `None` if the source or
    /// target node does not exist.
    pub fn add_edge(&mut self, edge: Edge) -> Option<EdgeIndex> {
        if !self.contains(edge.source) || !self.contains(edge.target) {
            warn!(
                "Ignoring edge ({}, {}, {}): graph has only {} nodes",
                edge.source,
                edge.target,
                edge.weight,
                self.num_nodes()
            );
            return None;
        }

        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency[edge.source.index()].push(edge_idx);
        // Self loops are only listed once
        if edge.source != edge.target {
            self.adjacency[edge.target.index()].push(edge_idx);
        }

        self.edges.push(edge);

        Some(edge_idx)
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns all `(neighbor, weight)` pairs of `node_idx`. Unknown nodes
    /// have no neighbors.
    pub fn neighbors(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency
            .get(node_idx.index())
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |edge_idx| {
                let edge = &self.edges[edge_idx.index()];
                (edge.opposite(node_idx), edge.weight)
            })
    }

    /// Reads an edge list with the columns `source,target,weight` into a graph
    /// with `num_nodes` nodes. Rows with unknown endpoints are skipped.
    pub fn from_csv(path_to_edges: &Path, num_nodes: usize) -> anyhow::Result<Self> {
        info!("Reading edges from {:?}", path_to_edges);

        let mut reader = csv::Reader::from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;

        let mut g = Graph::new(num_nodes);
        for result in reader.deserialize() {
            let edge: Edge = result.context("Failed to parse Edge")?;
            g.add_edge(edge);
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Writes all edges as `source,target,weight` rows.
    pub fn export_csv(&self, path_to_edges: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path_to_edges)
            .with_context(|| format!("Could not create {:?}", path_to_edges))?;

        debug!("BEGIN writing edges");
        for edge in self.edges() {
            wtr.serialize(edge)?;
        }

        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Macro to create an undirected edge between source and target with a weight
///
/// edge!(0, 1, 3)
#[macro_export]
macro_rules! edge {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new(
            $crate::graph::node_index($source),
            $crate::graph::node_index($target),
            $weight,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(g: &Graph, n: usize) -> Vec<(usize, Weight)> {
        let mut neighbors: Vec<_> = g
            .neighbors(node_index(n))
            .map(|(v, w)| (v.index(), w))
            .collect();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn new_graph_has_isolated_nodes() {
        let g = Graph::new(4);

        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 0);
        for n in 0..4 {
            assert!(neighbors_of(&g, n).is_empty());
        }
    }

    #[test]
    fn connect_is_symmetric() {
        let mut g = Graph::new(3);
        let e = g.connect(0, 2, 5);

        assert!(e.is_some());
        assert_eq!(neighbors_of(&g, 0), vec![(2, 5)]);
        assert_eq!(neighbors_of(&g, 2), vec![(0, 5)]);
        assert!(neighbors_of(&g, 1).is_empty());
    }

    #[test]
    fn connect_out_of_range_is_ignored() {
        let mut g = Graph::new(3);
        g.connect(0, 1, 1);

        assert_eq!(g.connect(0, 3, 1), None);
        assert_eq!(g.connect(7, 1, 1), None);
        assert_eq!(g.connect(usize::MAX, 0, 1), None);

        assert_eq!(g.num_edges(), 1);
        assert_eq!(neighbors_of(&g, 0), vec![(1, 1)]);
        assert_eq!(neighbors_of(&g, 1), vec![(0, 1)]);
        assert!(neighbors_of(&g, 2).is_empty());
    }

    #[test]
    fn add_edge_out_of_range_is_ignored() {
        let mut g = Graph::new(2);

        assert_eq!(g.add_edge(edge!(0, 2, 3)), None);
        assert_eq!(g.num_edges(), 0);
        assert!(g.adjacency.iter().all(|edges| edges.is_empty()));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = Graph::new(2);
        g.add_edges(vec![edge!(0, 1, 3), edge!(1, 0, 1)]);

        assert_eq!(neighbors_of(&g, 0), vec![(1, 1), (1, 3)]);
        assert_eq!(neighbors_of(&g, 1), vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn self_loop_listed_once() {
        let mut g = Graph::new(1);
        g.connect(0, 0, 2);

        assert_eq!(neighbors_of(&g, 0), vec![(0, 2)]);
    }

    #[test]
    fn oversized_index_is_not_truncated() {
        let too_large = u32::MAX as usize + 5;

        assert_eq!(node_index(too_large), NodeIndex::end());
        assert_ne!(node_index(too_large), node_index(4));
        assert!(!Graph::new(8).contains(node_index(too_large)));
        assert_eq!(node_index(u32::MAX as usize - 1).index(), u32::MAX as usize - 1);
    }

    #[test]
    fn neighbors_of_unknown_node_is_empty() {
        let g = Graph::new(2);

        assert_eq!(g.neighbors(node_index(5)).count(), 0);
        assert_eq!(Graph::default().neighbors(node_index(0)).count(), 0);
    }

    #[test]
    fn csv_round_trip() {
        let mut g = Graph::new(4);
        g.connect(0, 1, 4);
        g.connect(1, 2, 8);
        g.connect(3, 2, 7);

        let path =
            std::env::temp_dir().join(format!("route_core_edges_{}.csv", std::process::id()));
        g.export_csv(&path).unwrap();
        let read = Graph::from_csv(&path, 4).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.edges, g.edges);
        for n in 0..4 {
            assert_eq!(neighbors_of(&read, n), neighbors_of(&g, n));
        }
    }

    #[test]
    fn csv_skips_unknown_nodes() {
        let path =
            std::env::temp_dir().join(format!("route_core_bad_edges_{}.csv", std::process::id()));
        std::fs::write(&path, "source,target,weight\n0,1,2\n1,9,3\n").unwrap();
        let g = Graph::from_csv(&path, 2).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(g.num_edges(), 1);
        assert_eq!(neighbors_of(&g, 1), vec![(0, 2)]);
    }

    #[test]
    fn csv_missing_file_is_an_error() {
        let path = Path::new("does/not/exist.csv");
        assert!(Graph::from_csv(path, 2).is_err());
    }
}
