use crate::edge::{validate_weight, DirectedEdge};
use crate::error::Result;
use crate::implementation::edge_weighted_graph::IncidentEdges;
use crate::interface::{EdgeWeightedNavigableGraph, GraphBase, NavigableGraph};
use std::fmt;

/// An iterator over the heads of the edges leaving a vertex.
pub type EdgeHeads<'a> = std::iter::Map<
    std::iter::Rev<std::slice::Iter<'a, DirectedEdge>>,
    fn(&'a DirectedEdge) -> usize,
>;

/// A directed graph with weighted edges and vertices `0..V`.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeightedDigraph {
    edge_count: usize,
    adjacency: Vec<Vec<DirectedEdge>>,
    in_degree: Vec<usize>,
}

impl EdgeWeightedDigraph {
    /// Creates an edge-weighted digraph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
        }
    }

    /// Adds the directed edge `edge` to this digraph.
    /// Fails if an endpoint is not a vertex of this digraph or if the weight is not finite.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;
        validate_weight(edge.from(), edge.to(), edge.weight())?;
        self.adjacency[edge.from()].push(edge);
        self.in_degree[edge.to()] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the edges leaving `v`.
    pub fn adj(&self, v: usize) -> Result<IncidentEdges<'_, DirectedEdge>> {
        self.validate_vertex(v)?;
        Ok(self.incident_edges(v))
    }

    /// Returns the amount of edges leaving `v`.
    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Returns the amount of edges entering `v`.
    pub fn in_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.in_degree[v])
    }

    /// Returns all edges of this digraph, grouped by their tail.
    pub fn edges(&self) -> Vec<DirectedEdge> {
        (0..self.vertex_count())
            .flat_map(|v| self.incident_edges(v))
            .collect()
    }
}

impl GraphBase for EdgeWeightedDigraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<'a> EdgeWeightedNavigableGraph<'a> for EdgeWeightedDigraph {
    type Edge = DirectedEdge;
    type IncidentEdges = IncidentEdges<'a, DirectedEdge>;

    fn incident_edges(&'a self, vertex: usize) -> Self::IncidentEdges {
        debug_assert!(vertex < self.vertex_count());
        self.adjacency[vertex].iter().rev().copied()
    }
}

impl<'a> NavigableGraph<'a> for EdgeWeightedDigraph {
    type Neighbors = EdgeHeads<'a>;

    fn neighbors(&'a self, vertex: usize) -> Self::Neighbors {
        debug_assert!(vertex < self.vertex_count());
        self.adjacency[vertex]
            .iter()
            .rev()
            .map(DirectedEdge::to as fn(&'a DirectedEdge) -> usize)
    }

    fn out_degree(&'a self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }
}

impl fmt::Display for EdgeWeightedDigraph {
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
