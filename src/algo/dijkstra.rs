use crate::algo::queue::IndexMinPriorityQueue;
use crate::edge::WeightedEdge;
use crate::error::{ErrorKind, Result};
use crate::interface::StaticEdgeWeightedGraph;

/// Shortest paths from a single source vertex in a graph with non-negative edge weights.
///
/// The algorithm is generic over the edge type, such that it runs on undirected graphs as well as on digraphs.
/// In undirected graphs, each edge can be used in both directions.
#[derive(Debug, Clone)]
pub struct Dijkstra<EdgeType> {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<EdgeType>>,
}

impl<EdgeType: WeightedEdge> Dijkstra<EdgeType> {
    /// Computes the shortest paths from `source` in `graph`.
    /// Fails if `source` is not a vertex of `graph` or if `graph` has an edge with negative weight.
    pub fn new<Graph: StaticEdgeWeightedGraph<EdgeType>>(
        graph: &Graph,
        source: usize,
    ) -> Result<Self> {
        graph.validate_vertex(source)?;
        for v in 0..graph.vertex_count() {
            for edge in graph.incident_edges(v) {
                ensure!(
                    edge.weight() >= 0.0,
                    ErrorKind::NegativeWeight(v, edge.opposite(v), edge.weight())
                );
            }
        }

        let mut dist_to = vec![f64::INFINITY; graph.vertex_count()];
        let mut edge_to = vec![None; graph.vertex_count()];
        let mut queue = IndexMinPriorityQueue::new(graph.vertex_count());
        dist_to[source] = 0.0;
        let inserted = queue.insert(source, 0.0);
        debug_assert!(inserted.is_ok());

        while let Some(v) = queue.del_min() {
            for edge in graph.incident_edges(v) {
                let w = edge.opposite(v);
                let distance = dist_to[v] + edge.weight();
                if distance < dist_to[w] {
                    dist_to[w] = distance;
                    edge_to[w] = Some(edge);
                    let updated = if queue.contains(w) {
                        queue.decrease_key(w, distance)
                    } else {
                        queue.insert(w, distance)
                    };
                    debug_assert!(updated.is_ok());
                }
            }
        }

        debug!(
            "Dijkstra from {} reached {} vertices",
            source,
            dist_to.iter().filter(|distance| distance.is_finite()).count()
        );
        let result = Self {
            source,
            dist_to,
            edge_to,
        };
        self_check!(result.check(graph));
        Ok(result)
    }

    /// Returns the length of a shortest path from the source to `v`, or `f64::INFINITY` if there is none.
    pub fn dist_to(&self, v: usize) -> Result<f64> {
        crate::algo::validate_vertex(v, self.dist_to.len())?;
        Ok(self.dist_to[v])
    }

    /// Returns true if there is a path from the source to `v`.
    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)? < f64::INFINITY)
    }

    /// Returns the edges of a shortest path from the source to `v`, or `None` if there is none.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<EdgeType>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = v;
        while let Some(edge) = self.edge_to[current] {
            path.push(edge);
            current = edge.opposite(current);
        }
        debug_assert_eq!(current, self.source);
        path.reverse();
        Ok(Some(path))
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check<Graph: StaticEdgeWeightedGraph<EdgeType>>(&self, graph: &Graph) -> bool {
        if self.dist_to[self.source] != 0.0 || self.edge_to[self.source].is_some() {
            error!("distance of source {} is not 0", self.source);
            return false;
        }

        for v in 0..graph.vertex_count() {
            for edge in graph.incident_edges(v) {
                let w = edge.opposite(v);
                if self.dist_to[v] + edge.weight() < self.dist_to[w] {
                    error!("edge {:?} is not relaxed", edge);
                    return false;
                }
            }
        }

        for (w, edge) in self.edge_to.iter().enumerate() {
            if let Some(edge) = edge {
                let v = edge.opposite(w);
                if self.dist_to[v] + edge.weight() != self.dist_to[w] {
                    error!("tree edge {:?} is not tight", edge);
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::Dijkstra;
    use crate::algo::predefined_graphs::{create_random_edge_weighted_graph, TINY_EWG};
    use crate::edge::{DirectedEdge, Edge, WeightedEdge};
    use crate::error::ErrorKind;
    use crate::implementation::{
        AdjMatrixEdgeWeightedDigraph, EdgeWeightedDigraph, EdgeWeightedGraph,
    };
    use crate::interface::GraphBase;
    use crate::io::read_edge_weighted_graph;
    use petgraph::graph::UnGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tiny_ewg_from_6() {
        let graph = read_edge_weighted_graph(TINY_EWG.as_bytes()).unwrap();
        let dijkstra = Dijkstra::new(&graph, 6).unwrap();
        let expected = [0.58, 0.76, 0.40, 0.52, 0.93, 1.02, 0.0, 0.74];
        for (v, &distance) in expected.iter().enumerate() {
            assert!((dijkstra.dist_to(v).unwrap() - distance).abs() < 1e-9);
        }

        let path: Vec<Edge> = dijkstra.path_to(5).unwrap().unwrap();
        let weights: Vec<_> = path.iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![0.40, 0.34, 0.28]);
        let mut vertex = 6;
        let mut vertices = vec![vertex];
        for edge in &path {
            vertex = edge.other(vertex).unwrap();
            vertices.push(vertex);
        }
        assert_eq!(vertices, vec![6, 2, 7, 5]);
        assert_eq!(dijkstra.path_to(6).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_directed() {
        let mut graph = EdgeWeightedDigraph::new(4);
        graph.add_edge(DirectedEdge::new(0, 1, 5.0)).unwrap();
        graph.add_edge(DirectedEdge::new(0, 3, 10.0)).unwrap();
        graph.add_edge(DirectedEdge::new(1, 2, 3.0)).unwrap();
        graph.add_edge(DirectedEdge::new(2, 3, 1.0)).unwrap();
        let dijkstra = Dijkstra::new(&graph, 0).unwrap();
        assert_eq!(dijkstra.dist_to(3).unwrap(), 9.0);
        let path = dijkstra.path_to(3).unwrap().unwrap();
        let heads: Vec<_> = path.iter().map(DirectedEdge::to).collect();
        assert_eq!(heads, vec![1, 2, 3]);

        let dijkstra = Dijkstra::new(&graph, 3).unwrap();
        assert!(!dijkstra.has_path_to(0).unwrap());
        assert_eq!(dijkstra.dist_to(0).unwrap(), f64::INFINITY);
        assert_eq!(dijkstra.path_to(0).unwrap(), None);
        assert!(dijkstra.dist_to(4).is_err());
    }

    #[test]
    fn test_matrix_representation() {
        let mut graph = AdjMatrixEdgeWeightedDigraph::new(3);
        graph.add_edge(DirectedEdge::new(0, 2, 4.0)).unwrap();
        graph.add_edge(DirectedEdge::new(0, 1, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(1, 2, 1.5)).unwrap();
        let dijkstra = Dijkstra::new(&graph, 0).unwrap();
        assert_eq!(dijkstra.dist_to(2).unwrap(), 2.5);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut graph = EdgeWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 1.0)).unwrap();
        graph.add_edge(Edge::new(1, 2, -0.5)).unwrap();
        let error = Dijkstra::new(&graph, 0).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::NegativeWeight(..)));
        assert!(error.kind().is_invalid_argument());
        assert!(Dijkstra::new(&graph, 3).is_err());
    }

    #[test]
    fn test_random_graphs_agree_with_petgraph() {
        let mut random = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let graph = create_random_edge_weighted_graph(30, 50, &mut random);
            let mut oracle = UnGraph::<(), f64>::new_undirected();
            let nodes: Vec<_> = (0..graph.vertex_count())
                .map(|_| oracle.add_node(()))
                .collect();
            for edge in graph.edges() {
                let v = edge.either();
                oracle.add_edge(nodes[v], nodes[edge.opposite(v)], edge.weight());
            }

            let dijkstra = Dijkstra::new(&graph, 0).unwrap();
            let expected =
                petgraph::algo::dijkstra(&oracle, nodes[0], None, |edge| *edge.weight());
            for v in 0..graph.vertex_count() {
                match expected.get(&nodes[v]) {
                    Some(distance) => {
                        assert!((dijkstra.dist_to(v).unwrap() - distance).abs() < 1e-9)
                    }
                    None => assert!(!dijkstra.has_path_to(v).unwrap()),
                }
            }
        }
    }
}
