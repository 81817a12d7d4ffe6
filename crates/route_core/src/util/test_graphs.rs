use crate::{edge, graph::Graph};

/// Demonstration network of 8 nodes and 12 undirected edges. The edge
/// between 0 and 7 is given twice.
pub fn graph_city_network() -> Graph {
    let mut g = Graph::new(8);

    g.add_edges(vec![
        edge!(0, 1, 4),
        edge!(0, 7, 8),
        edge!(1, 2, 8),
        edge!(1, 7, 11),
        edge!(2, 3, 7),
        edge!(2, 5, 4),
        edge!(3, 4, 9),
        edge!(3, 5, 14),
        edge!(4, 5, 10),
        edge!(5, 6, 2),
        edge!(6, 7, 1),
        edge!(7, 0, 8),
    ]);

    g
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -- A -- C
    //      |  /
    //      D
    let mut g = Graph::new(5);

    let (a, b, c, d, e) = (0, 1, 2, 3, 4);

    g.add_edges(vec![
        edge!(a, c, 1),
        edge!(a, d, 1),
        edge!(e, a, 1),
        edge!(c, b, 1),
        edge!(c, d, 1),
    ]);

    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn city_network_shape() {
        let g = graph_city_network();

        assert_eq!(g.num_nodes(), 8);
        assert_eq!(g.num_edges(), 12);
        // 0 -- 7 is listed twice
        assert_eq!(
            g.neighbors(node_index(0))
                .filter(|(n, w)| n.index() == 7 && *w == 8)
                .count(),
            2
        );
    }

    #[test]
    fn simple_graph_shape() {
        let g = generate_simple_graph();

        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.neighbors(node_index(2)).count(), 3);
        assert_eq!(g.neighbors(node_index(1)).count(), 1);
    }
}
