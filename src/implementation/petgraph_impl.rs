//! Conversions from [petgraph](petgraph) graphs into the representations of this crate.
//!
//! Vertex `i` of the converted graph is the node with index `i` of the petgraph graph.
//! Edges are added in the order of their petgraph edge indices.
//! Weighted edges whose weight is not finite are skipped with a warning.

use crate::edge::{DirectedEdge, Edge};
use crate::implementation::{
    AdjMatrixEdgeWeightedDigraph, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph,
};
use petgraph::graph::{DiGraph, UnGraph};
use petgraph::visit::EdgeRef;

impl<NodeData, EdgeData> From<&UnGraph<NodeData, EdgeData>> for Graph {
    fn from(source: &UnGraph<NodeData, EdgeData>) -> Self {
        let mut graph = Graph::new(source.node_count());
        for edge in source.edge_references() {
            let added = graph.add_edge(edge.source().index(), edge.target().index());
            debug_assert!(added.is_ok(), "petgraph node indices are dense");
        }
        graph
    }
}

impl<NodeData, EdgeData> From<&DiGraph<NodeData, EdgeData>> for Digraph {
    fn from(source: &DiGraph<NodeData, EdgeData>) -> Self {
        let mut graph = Digraph::new(source.node_count());
        for edge in source.edge_references() {
            let added = graph.add_edge(edge.source().index(), edge.target().index());
            debug_assert!(added.is_ok(), "petgraph node indices are dense");
        }
        graph
    }
}

impl<NodeData> From<&UnGraph<NodeData, f64>> for EdgeWeightedGraph {
    fn from(source: &UnGraph<NodeData, f64>) -> Self {
        let mut graph = EdgeWeightedGraph::new(source.node_count());
        for edge in source.edge_references() {
            let added = graph.add_edge(Edge::new(
                edge.source().index(),
                edge.target().index(),
                *edge.weight(),
            ));
            if let Err(error) = added {
                warn!("Skipping petgraph edge {}: {}", edge.id().index(), error);
            }
        }
        graph
    }
}

impl<NodeData> From<&DiGraph<NodeData, f64>> for EdgeWeightedDigraph {
    fn from(source: &DiGraph<NodeData, f64>) -> Self {
        let mut graph = EdgeWeightedDigraph::new(source.node_count());
        for edge in source.edge_references() {
            let added = graph.add_edge(DirectedEdge::new(
                edge.source().index(),
                edge.target().index(),
                *edge.weight(),
            ));
            if let Err(error) = added {
                warn!("Skipping petgraph edge {}: {}", edge.id().index(), error);
            }
        }
        graph
    }
}

impl<NodeData> From<&DiGraph<NodeData, f64>> for AdjMatrixEdgeWeightedDigraph {
    fn from(source: &DiGraph<NodeData, f64>) -> Self {
        let mut graph = AdjMatrixEdgeWeightedDigraph::new(source.node_count());
        for edge in source.edge_references() {
            let added = graph.add_edge(DirectedEdge::new(
                edge.source().index(),
                edge.target().index(),
                *edge.weight(),
            ));
            if let Err(error) = added {
                warn!("Skipping petgraph edge {}: {}", edge.id().index(), error);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use crate::implementation::{
        AdjMatrixEdgeWeightedDigraph, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph,
    };
    use crate::interface::GraphBase;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn test_convert_directed() {
        let source = DiGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let graph = Digraph::from(&source);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.in_degree(0).unwrap(), 1);
        assert_eq!(graph.adj(2).unwrap().collect::<Vec<_>>(), vec![3, 0]);
    }

    #[test]
    fn test_convert_undirected() {
        let source = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 1)]);
        let graph = Graph::from(&source);
        assert_eq!(graph.degree(1).unwrap(), 3);

        let weighted = UnGraph::<(), f64>::from_edges(&[(0, 1, 0.5), (1, 2, 1.5)]);
        let graph = EdgeWeightedGraph::from(&weighted);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_non_finite_weights_are_skipped() {
        let source = DiGraph::<(), f64>::from_edges(&[(0, 1, 1.0), (1, 2, f64::NAN), (2, 0, 2.0)]);
        let graph = EdgeWeightedDigraph::from(&source);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let matrix = AdjMatrixEdgeWeightedDigraph::from(&source);
        assert_eq!(matrix.edge(1, 2).unwrap(), None);
        assert_eq!(matrix.edge_count(), 2);
    }
}
