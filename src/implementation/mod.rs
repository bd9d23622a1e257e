/// A dense edge-weighted digraph based on an adjacency matrix.
pub mod adj_matrix_digraph;
/// A directed graph based on adjacency lists.
pub mod digraph;
/// An edge-weighted directed graph based on adjacency lists.
pub mod edge_weighted_digraph;
/// An edge-weighted undirected graph based on adjacency lists.
pub mod edge_weighted_graph;
/// An undirected graph based on adjacency lists.
pub mod graph;
/// Conversions from graphs of the `petgraph` crate.
pub mod petgraph_impl;

pub use adj_matrix_digraph::AdjMatrixEdgeWeightedDigraph;
pub use digraph::Digraph;
pub use edge_weighted_digraph::EdgeWeightedDigraph;
pub use edge_weighted_graph::EdgeWeightedGraph;
pub use graph::Graph;
