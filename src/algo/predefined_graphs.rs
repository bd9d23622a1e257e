use crate::edge::Edge;
use crate::implementation::{Digraph, EdgeWeightedGraph};
use rand::Rng;

/// A small undirected graph with 6 vertices and 8 edges, in the textual graph format.
pub const TINY_CG: &str = "6
8
0 5
2 4
2 3
1 2
0 1
3 4
3 5
0 2
";

/// A small digraph with 13 vertices, 22 edges and five strongly connected components, in the textual graph format.
pub const TINY_DG: &str = "13
22
4 2
2 3
3 2
6 0
0 1
2 0
11 12
12 9
9 10
9 11
7 9
10 12
11 4
4 3
3 5
6 8
8 6
5 4
0 5
6 4
6 9
7 6
";

/// A small directed acyclic graph with 13 vertices and 15 edges, in the textual graph format.
pub const TINY_DAG: &str = "13
15
2 3
0 6
0 1
2 0
11 12
9 12
9 10
9 11
3 5
8 7
5 4
0 5
6 4
6 9
7 6
";

/// A small connected edge-weighted graph with 8 vertices and 16 edges, in the textual graph format.
pub const TINY_EWG: &str = "8
16
4 5 0.35
4 7 0.37
5 7 0.28
0 7 0.16
1 5 0.32
0 4 0.38
2 3 0.17
1 7 0.19
0 2 0.26
1 2 0.36
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

/// Creates a digraph containing a complete binary tree with edges directed away from the root.
/// The root is vertex 0, and the subtree of the left child is numbered before the subtree of the right child.
/// A negative depth creates an empty digraph, a depth of 0 just the root, a depth of 1 the root and its children, and so on.
pub fn create_binary_tree(depth: i32) -> Digraph {
    if depth < 0 {
        return Digraph::new(0);
    }

    let vertex_count = (1usize << (depth + 1)) - 1;
    let mut graph = Digraph::new(vertex_count);
    let mut next_vertex = 1;
    create_binary_tree_recursively(&mut graph, depth - 1, 0, &mut next_vertex);
    debug_assert_eq!(next_vertex, vertex_count);
    graph
}

fn create_binary_tree_recursively(
    graph: &mut Digraph,
    depth: i32,
    root: usize,
    next_vertex: &mut usize,
) {
    if depth < 0 {
        return;
    }

    let l = *next_vertex;
    let r = l + 1;
    *next_vertex += 2;
    let added = graph.add_edge(root, l).and_then(|()| graph.add_edge(root, r));
    debug_assert!(added.is_ok());
    create_binary_tree_recursively(graph, depth - 1, l, next_vertex);
    create_binary_tree_recursively(graph, depth - 1, r, next_vertex);
}

/// Creates a random digraph with `vertex_count` vertices and `edge_count` edges, chosen uniformly.
/// Self-loops and parallel edges may occur.
/// If there are no vertices, the digraph has no edges either.
pub fn create_random_digraph<Random: Rng>(
    vertex_count: usize,
    edge_count: usize,
    random: &mut Random,
) -> Digraph {
    let mut graph = Digraph::new(vertex_count);
    if vertex_count == 0 {
        return graph;
    }

    for _ in 0..edge_count {
        let v = random.gen_range(0, vertex_count);
        let w = random.gen_range(0, vertex_count);
        let added = graph.add_edge(v, w);
        debug_assert!(added.is_ok());
    }
    graph
}

/// Creates a random edge-weighted graph with `vertex_count` vertices and `edge_count` edges, chosen uniformly.
/// The weights are multiples of `0.01` in `[0, 1]`, so ties between edges are likely.
/// Self-loops and parallel edges may occur.
/// If there are no vertices, the graph has no edges either.
pub fn create_random_edge_weighted_graph<Random: Rng>(
    vertex_count: usize,
    edge_count: usize,
    random: &mut Random,
) -> EdgeWeightedGraph {
    let mut graph = EdgeWeightedGraph::new(vertex_count);
    if vertex_count == 0 {
        return graph;
    }

    for _ in 0..edge_count {
        let v = random.gen_range(0, vertex_count);
        let w = random.gen_range(0, vertex_count);
        let weight = f64::from(random.gen_range(0u32, 101)) / 100.0;
        let added = graph.add_edge(Edge::new(v, w, weight));
        debug_assert!(added.is_ok());
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::{
        create_binary_tree, create_random_digraph, create_random_edge_weighted_graph, TINY_CG,
        TINY_DAG, TINY_DG, TINY_EWG,
    };
    use crate::interface::{GraphBase, NavigableGraph};
    use crate::io::{read_digraph, read_edge_weighted_graph, read_graph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_create_binary_tree_2() {
        let graph = create_binary_tree(2);
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        let children: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(children, vec![2, 1]);
        let children: Vec<_> = graph.neighbors(1).collect();
        assert_eq!(children, vec![4, 3]);
        let children: Vec<_> = graph.neighbors(2).collect();
        assert_eq!(children, vec![6, 5]);
        assert_eq!(graph.in_degree(0).unwrap(), 0);
        assert!((1..7).all(|v| graph.in_degree(v).unwrap() == 1));
    }

    #[test]
    fn test_create_binary_tree_small_depths() {
        assert_eq!(create_binary_tree(-1).vertex_count(), 0);
        let root_only = create_binary_tree(0);
        assert_eq!(root_only.vertex_count(), 1);
        assert_eq!(root_only.edge_count(), 0);
        assert_eq!(create_binary_tree(10).vertex_count(), 2047);
    }

    #[test]
    fn test_random_generators() {
        let mut random = StdRng::seed_from_u64(3);
        let graph = create_random_digraph(10, 25, &mut random);
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 25);
        assert_eq!(create_random_digraph(0, 25, &mut random).edge_count(), 0);

        let graph = create_random_edge_weighted_graph(10, 25, &mut random);
        assert_eq!(graph.edge_count(), 25);
        assert!(graph
            .edges()
            .iter()
            .all(|edge| edge.weight() >= 0.0 && edge.weight() <= 1.0));
    }

    #[test]
    fn test_fixtures_parse() {
        let graph = read_graph(TINY_CG.as_bytes()).unwrap();
        assert_eq!((graph.vertex_count(), graph.edge_count()), (6, 8));
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        assert_eq!((graph.vertex_count(), graph.edge_count()), (13, 22));
        let graph = read_digraph(TINY_DAG.as_bytes()).unwrap();
        assert_eq!((graph.vertex_count(), graph.edge_count()), (13, 15));
        let graph = read_edge_weighted_graph(TINY_EWG.as_bytes()).unwrap();
        assert_eq!((graph.vertex_count(), graph.edge_count()), (8, 16));
    }
}
