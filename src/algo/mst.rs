use crate::algo::queue::IndexMinPriorityQueue;
use crate::algo::union_find::UnionFind;
use crate::edge::{Edge, WeightedEdge};
use crate::implementation::EdgeWeightedGraph;
use crate::interface::{EdgeWeightedNavigableGraph, GraphBase};

/// The tolerance used when comparing the total weight of a spanning forest to the sum of its edge weights.
pub const FLOATING_POINT_EPSILON: f64 = 1e-12;

/// A minimum spanning forest computed with Kruskal's algorithm.
///
/// The edges are processed by ascending weight, and each edge is added if it connects two different trees of the forest.
#[derive(Debug, Clone)]
pub struct Kruskal {
    edges: Vec<Edge>,
    weight: f64,
}

impl Kruskal {
    /// Computes a minimum spanning forest of `graph`.
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let mut candidates = graph.edges();
        candidates.sort();
        let target_edge_count = graph.vertex_count().saturating_sub(1);
        let mut union_find = UnionFind::new(graph.vertex_count());
        let mut edges = Vec::with_capacity(target_edge_count);
        let mut weight = 0.0;

        for edge in candidates {
            if edges.len() == target_edge_count {
                break;
            }

            let v = edge.either();
            let w = edge.opposite(v);
            if union_find.union_unchecked(v, w) {
                trace!("Adding edge {} to the spanning forest", edge);
                edges.push(edge);
                weight += edge.weight();
            }
        }

        debug!(
            "Kruskal found spanning forest with {} edges and weight {:.5}",
            edges.len(),
            weight
        );
        let result = Self { edges, weight };
        self_check!(check_minimum_spanning_forest(graph, &result.edges, result.weight));
        result
    }

    /// Returns the edges of the minimum spanning forest, in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the edge weights of the minimum spanning forest.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A minimum spanning forest computed with the eager variant of Prim's algorithm.
///
/// For each vertex not yet in the forest, the priority queue holds the weight of the cheapest edge connecting it to the current tree.
/// Once a tree cannot be extended anymore, a new tree is grown from the next vertex not yet in the forest.
#[derive(Debug, Clone)]
pub struct Prim {
    edges: Vec<Edge>,
    weight: f64,
}

impl Prim {
    /// Computes a minimum spanning forest of `graph`.
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut edge_to: Vec<Option<Edge>> = vec![None; vertex_count];
        let mut dist_to = vec![f64::INFINITY; vertex_count];
        let mut marked = vec![false; vertex_count];
        let mut queue = IndexMinPriorityQueue::new(vertex_count);

        for root in 0..vertex_count {
            if marked[root] {
                continue;
            }

            dist_to[root] = 0.0;
            let inserted = queue.insert(root, 0.0);
            debug_assert!(inserted.is_ok());
            while let Some(v) = queue.del_min() {
                marked[v] = true;
                for edge in graph.incident_edges(v) {
                    let w = edge.opposite(v);
                    if marked[w] {
                        continue;
                    }
                    if edge.weight() < dist_to[w] {
                        dist_to[w] = edge.weight();
                        edge_to[w] = Some(edge);
                        let updated = if queue.contains(w) {
                            queue.decrease_key(w, edge.weight())
                        } else {
                            queue.insert(w, edge.weight())
                        };
                        debug_assert!(updated.is_ok());
                    }
                }
            }
        }

        let edges: Vec<_> = edge_to.into_iter().flatten().collect();
        let weight: f64 = edges.iter().map(Edge::weight).sum();
        debug!(
            "Prim found spanning forest with {} edges and weight {:.5}",
            edges.len(),
            weight
        );
        let result = Self { edges, weight };
        self_check!(check_minimum_spanning_forest(graph, &result.edges, result.weight));
        result
    }

    /// Returns the edges of the minimum spanning forest, ordered by the vertex they connect to the forest.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the edge weights of the minimum spanning forest.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Certifies that `edges` is a minimum spanning forest of `graph` with total weight `weight`.
///
/// The optimality condition is checked by rebuilding the forest without each of its edges, which takes quadratic time.
#[cfg(any(debug_assertions, feature = "self-check"))]
fn check_minimum_spanning_forest(graph: &EdgeWeightedGraph, edges: &[Edge], weight: f64) -> bool {
    let total: f64 = edges.iter().map(Edge::weight).sum();
    if (total - weight).abs() > FLOATING_POINT_EPSILON {
        error!(
            "weight of edges does not equal weight(): {} vs. {}",
            total, weight
        );
        return false;
    }

    let mut union_find = UnionFind::new(graph.vertex_count());
    for edge in edges {
        let v = edge.either();
        if !union_find.union_unchecked(v, edge.opposite(v)) {
            error!("not a forest, edge {} closes a cycle", edge);
            return false;
        }
    }

    let graph_edges = graph.edges();
    for edge in &graph_edges {
        let v = edge.either();
        if !union_find.connected_unchecked(v, edge.opposite(v)) {
            error!("not a spanning forest, edge {} connects two trees", edge);
            return false;
        }
    }

    for (index, edge) in edges.iter().enumerate() {
        let mut union_find = UnionFind::new(graph.vertex_count());
        for (other_index, other) in edges.iter().enumerate() {
            if other_index != index {
                let x = other.either();
                union_find.union_unchecked(x, other.opposite(x));
            }
        }

        for crossing in &graph_edges {
            let x = crossing.either();
            let y = crossing.opposite(x);
            if !union_find.connected_unchecked(x, y) && crossing.weight() < edge.weight() {
                error!(
                    "edge {} violates cut optimality conditions of tree edge {}",
                    crossing, edge
                );
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{Kruskal, Prim, FLOATING_POINT_EPSILON};
    use crate::algo::predefined_graphs::{create_random_edge_weighted_graph, TINY_EWG};
    use crate::edge::Edge;
    use crate::implementation::EdgeWeightedGraph;
    use crate::io::read_edge_weighted_graph;
    use petgraph::data::FromElements;
    use petgraph::graph::UnGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_tiny_ewg() {
        let graph = read_edge_weighted_graph(TINY_EWG.as_bytes()).unwrap();
        let kruskal = Kruskal::new(&graph);
        let prim = Prim::new(&graph);
        assert_close(kruskal.weight(), 1.81);
        assert_close(prim.weight(), 1.81);
        assert_eq!(kruskal.edges().len(), 7);
        assert_eq!(prim.edges().len(), 7);

        let mut kruskal_edges = kruskal.edges().to_vec();
        let mut prim_edges = prim.edges().to_vec();
        kruskal_edges.sort();
        prim_edges.sort();
        let kruskal_weights: Vec<_> = kruskal_edges.iter().map(Edge::weight).collect();
        let prim_weights: Vec<_> = prim_edges.iter().map(Edge::weight).collect();
        assert_eq!(kruskal_weights, vec![0.16, 0.17, 0.19, 0.26, 0.28, 0.35, 0.40]);
        assert_eq!(kruskal_weights, prim_weights);
    }

    #[test]
    fn test_tree_is_its_own_spanning_tree() {
        let mut graph = EdgeWeightedGraph::new(8);
        for &(v, w, weight) in &[
            (0, 7, 0.16),
            (1, 7, 0.19),
            (0, 2, 0.26),
            (2, 3, 0.17),
            (4, 5, 0.35),
            (5, 7, 0.28),
            (6, 2, 0.40),
        ] {
            graph.add_edge(Edge::new(v, w, weight)).unwrap();
        }
        assert_close(Kruskal::new(&graph).weight(), 1.81);
        assert_close(Prim::new(&graph).weight(), 1.81);
    }

    #[test]
    fn test_disconnected_forest() {
        let mut graph = EdgeWeightedGraph::new(6);
        graph.add_edge(Edge::new(0, 1, 2.0)).unwrap();
        graph.add_edge(Edge::new(1, 2, 1.0)).unwrap();
        graph.add_edge(Edge::new(0, 2, 3.0)).unwrap();
        graph.add_edge(Edge::new(3, 4, 0.5)).unwrap();
        graph.add_edge(Edge::new(4, 4, 0.1)).unwrap();

        let kruskal = Kruskal::new(&graph);
        let prim = Prim::new(&graph);
        assert_eq!(kruskal.edges().len(), 3);
        assert_eq!(prim.edges().len(), 3);
        assert_close(kruskal.weight(), 3.5);
        assert_close(prim.weight(), 3.5);
    }

    #[test]
    fn test_prim_replaces_queued_connection() {
        let mut graph = EdgeWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 2, 5.0)).unwrap();
        graph.add_edge(Edge::new(1, 2, 2.0)).unwrap();
        graph.add_edge(Edge::new(0, 1, 1.0)).unwrap();

        // Vertex 2 is queued with key 5.0 from vertex 0 and decreased to 2.0 from vertex 1.
        let prim = Prim::new(&graph);
        let weights: Vec<_> = prim.edges().iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![1.0, 2.0]);
        assert_close(prim.weight(), 3.0);
    }

    #[test]
    fn test_empty_graphs() {
        for vertex_count in 0..3 {
            let graph = EdgeWeightedGraph::new(vertex_count);
            assert!(Kruskal::new(&graph).edges().is_empty());
            assert_eq!(Prim::new(&graph).weight(), 0.0);
        }
    }

    #[test]
    fn test_random_graphs_agree() {
        let mut random = StdRng::seed_from_u64(42);
        for _ in 0..30 {
            let graph = create_random_edge_weighted_graph(25, 60, &mut random);
            let kruskal = Kruskal::new(&graph);
            let prim = Prim::new(&graph);
            assert!((kruskal.weight() - prim.weight()).abs() < FLOATING_POINT_EPSILON * 100.0);
            assert_eq!(kruskal.edges().len(), prim.edges().len());

            let mut oracle = UnGraph::<(), f64>::new_undirected();
            let nodes: Vec<_> = (0..25).map(|_| oracle.add_node(())).collect();
            for edge in graph.edges() {
                let v = edge.either();
                let w = edge.other(v).unwrap();
                oracle.add_edge(nodes[v], nodes[w], edge.weight());
            }
            let oracle_tree =
                UnGraph::<(), f64>::from_elements(petgraph::algo::min_spanning_tree(&oracle));
            let oracle_weight: f64 = oracle_tree
                .raw_edges()
                .iter()
                .map(|edge| edge.weight)
                .sum();
            assert_close(kruskal.weight(), oracle_weight);
        }
    }
}
