//! The graph traits.
//!
//! The traits are split up by access type:
//!  - plain queries for the size of a graph and validation of vertex references (`GraphBase`)
//!  - iteration over the successor vertices of a vertex (`NavigableGraph`)
//!  - iteration over the weighted edges incident to a vertex (`EdgeWeightedNavigableGraph`)
//!
//! The iteration methods do not validate their arguments, since they are meant to be called by algorithms that already validated their input.
//! The concrete representations additionally offer validating accessors.

use crate::edge::WeightedEdge;
use crate::error::{ErrorKind, Result};

/// Contains the size of a graph.
/// Vertices are the integers `0..vertex_count()`.
pub trait GraphBase {
    /// Returns the amount of vertices in this graph.
    fn vertex_count(&self) -> usize;

    /// Returns the amount of edges in this graph.
    fn edge_count(&self) -> usize;

    /// Returns an error if `vertex` is not a vertex of this graph.
    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        ensure!(
            vertex < self.vertex_count(),
            ErrorKind::InvalidVertex(vertex, self.vertex_count())
        );
        Ok(())
    }

    /// Returns true if the graph has no vertices.
    fn is_empty(&self) -> bool {
        // Zero vertices must imply zero edges.
        debug_assert!(self.vertex_count() != 0 || self.edge_count() == 0);
        self.vertex_count() == 0
    }
}

/// A graph that can be navigated, i.e. that can iterate the successors of its vertices.
/// For undirected graphs, the successors of a vertex are all of its neighbors.
pub trait NavigableGraph<'a>: GraphBase + Sized {
    /// The iterator type used to iterate over the successors of a vertex.
    type Neighbors: Iterator<Item = usize>;

    /// Returns an iterator over the successors of the given vertex, most recently added first.
    fn neighbors(&'a self, vertex: usize) -> Self::Neighbors;

    /// Returns the amount of edges leaving the given vertex.
    fn out_degree(&'a self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }
}

/// A graph whose vertices have incident weighted edges.
/// For undirected graphs, these are all edges touching a vertex, and for directed graphs only the outgoing ones.
pub trait EdgeWeightedNavigableGraph<'a>: GraphBase + Sized {
    /// The type of the edges.
    type Edge: WeightedEdge;
    /// The iterator type used to iterate over the edges incident to a vertex.
    type IncidentEdges: Iterator<Item = Self::Edge>;

    /// Returns an iterator over the edges leaving the given vertex, most recently added first.
    fn incident_edges(&'a self, vertex: usize) -> Self::IncidentEdges;
}

/// A graph implementing all traits needed by the unweighted traversal algorithms.
/// This is a useful shortcut for generic type bounds.
pub trait StaticGraph: GraphBase + for<'a> NavigableGraph<'a> {}
impl<T: GraphBase + for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// A graph implementing all traits needed by the weighted shortest path algorithms, with edges of type `Edge`.
/// This is a useful shortcut for generic type bounds.
pub trait StaticEdgeWeightedGraph<Edge: WeightedEdge>:
    GraphBase + for<'a> EdgeWeightedNavigableGraph<'a, Edge = Edge>
{
}
impl<Edge: WeightedEdge, T: GraphBase + for<'a> EdgeWeightedNavigableGraph<'a, Edge = Edge>>
    StaticEdgeWeightedGraph<Edge> for T
{
}
