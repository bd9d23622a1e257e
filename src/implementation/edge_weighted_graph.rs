use crate::edge::{validate_weight, Edge, WeightedEdge};
use crate::error::Result;
use crate::interface::{EdgeWeightedNavigableGraph, GraphBase};
use std::fmt;

/// An iterator over the edges incident to a vertex, most recently added first.
pub type IncidentEdges<'a, EdgeType> =
    std::iter::Copied<std::iter::Rev<std::slice::Iter<'a, EdgeType>>>;

/// An undirected graph with weighted edges and vertices `0..V`.
///
/// Each edge is stored in the adjacency lists of both of its endpoints.
/// A self-loop is stored twice in the adjacency list of its vertex.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeightedGraph {
    edge_count: usize,
    adjacency: Vec<Vec<Edge>>,
}

impl EdgeWeightedGraph {
    /// Creates an edge-weighted graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds the undirected edge `edge` to this graph.
    /// Fails if an endpoint is not a vertex of this graph or if the weight is not finite.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let v = edge.either();
        let w = edge.opposite(v);
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        validate_weight(v, w, edge.weight())?;
        self.adjacency[v].push(edge);
        self.adjacency[w].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the edges incident to `v`.
    pub fn adj(&self, v: usize) -> Result<IncidentEdges<'_, Edge>> {
        self.validate_vertex(v)?;
        Ok(self.incident_edges(v))
    }

    /// Returns the degree of `v`.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Returns each edge of this graph exactly once.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for v in 0..self.vertex_count() {
            let mut self_loops = 0;
            for edge in self.incident_edges(v) {
                let w = edge.opposite(v);
                if w > v {
                    edges.push(edge);
                } else if w == v {
                    // The two copies of a self-loop are consecutive.
                    if self_loops % 2 == 0 {
                        edges.push(edge);
                    }
                    self_loops += 1;
                }
            }
        }
        debug_assert_eq!(edges.len(), self.edge_count);
        edges
    }
}

impl GraphBase for EdgeWeightedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<'a> EdgeWeightedNavigableGraph<'a> for EdgeWeightedGraph {
    type Edge = Edge;
    type IncidentEdges = IncidentEdges<'a, Edge>;

    fn incident_edges(&'a self, vertex: usize) -> Self::IncidentEdges {
        debug_assert!(vertex < self.vertex_count());
        self.adjacency[vertex].iter().rev().copied()
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count)?;
        for v in 0..self.vertex_count() {
            write!(f, "{}: ", v)?;
            for edge in self.incident_edges(v) {
                write!(f, "{}  ", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeWeightedGraph;
    use crate::edge::Edge;
    use crate::interface::GraphBase;

    #[test]
    fn test_edges_are_listed_once() {
        let mut graph = EdgeWeightedGraph::new(4);
        graph.add_edge(Edge::new(0, 1, 0.5)).unwrap();
        graph.add_edge(Edge::new(2, 1, 0.25)).unwrap();
        graph.add_edge(Edge::new(3, 3, 1.0)).unwrap();
        graph.add_edge(Edge::new(0, 1, 0.75)).unwrap();

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(1).unwrap(), 3);
        assert_eq!(graph.degree(3).unwrap(), 2);

        let mut edges = graph.edges();
        edges.sort();
        let weights: Vec<_> = edges.iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_invalid_edge_is_rejected() {
        let mut graph = EdgeWeightedGraph::new(2);
        assert!(graph.add_edge(Edge::new(0, 2, 1.0)).is_err());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0).unwrap(), 0);
        assert!(graph.adj(2).is_err());
    }
}
