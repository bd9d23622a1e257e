use crate::error::{ErrorKind, Result};

/// Kosaraju's algorithm for the strongly connected components of a digraph.
pub mod components;
/// Directed cycle detection, for unweighted and edge-weighted digraphs.
pub mod cycle;
/// Dijkstra's single-source shortest path algorithm for graphs with non-negative edge weights.
pub mod dijkstra;
/// Algorithms related to Eulerian graphs, i.e. Eulerian cycles and paths in undirected graphs.
pub mod eulerian;
/// The Floyd-Warshall all-pairs shortest path algorithm.
pub mod floyd_warshall;
/// Minimum spanning forests using Kruskal's and Prim's algorithm.
pub mod mst;
/// Algorithms to create certain parameterisable graph classes, like binary trees or random graphs, as well as small fixture graphs.
pub mod predefined_graphs;
/// An indexed minimum priority queue.
pub mod queue;
/// Topological sorting of acyclic digraphs.
pub mod topological;
/// Algorithms for graph traversals, i.e. depth and breadth first search as well as depth first orders.
pub mod traversal;
/// A disjoint-set forest.
pub mod union_find;

/// Checks a vertex given to a query method of an algorithm against the vertex count of the graph the algorithm ran on.
pub(crate) fn validate_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    ensure!(
        vertex < vertex_count,
        ErrorKind::InvalidVertex(vertex, vertex_count)
    );
    Ok(())
}
