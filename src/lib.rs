//! Classical graph algorithms over dense, zero-based graph representations.
//!
//! The representations (`Graph`, `Digraph`, `EdgeWeightedGraph`, `EdgeWeightedDigraph` and `AdjMatrixEdgeWeightedDigraph`) are built once and then handed immutably to the algorithms.
//! Each algorithm computes its result eagerly when it is constructed and owns all derived data.
//!
//! In debug builds, and in release builds with the `self-check` feature, every algorithm certifies its own result after the computation.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Runs a verification routine and panics if it fails.
/// Compiled out unless `debug_assertions` or the `self-check` feature is enabled.
macro_rules! self_check {
    ($check:expr) => {
        #[cfg(any(debug_assertions, feature = "self-check"))]
        {
            assert!($check, "self-check failed: {}", stringify!($check));
        }
    };
}

/// The graph algorithms.
pub mod algo;
/// The edge value types.
pub mod edge;
/// Contains the error types used by this crate.
pub mod error;
/// The concrete graph representations.
pub mod implementation;
/// The graph traits used by the generic algorithms.
pub mod interface;
/// Reading and writing graphs in the textual graph format.
pub mod io;

pub use edge::{DirectedEdge, Edge, WeightedEdge};
pub use error::{Error, ErrorKind, Result};
pub use implementation::{
    AdjMatrixEdgeWeightedDigraph, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph,
};
pub use interface::{
    EdgeWeightedNavigableGraph, GraphBase, NavigableGraph, StaticEdgeWeightedGraph, StaticGraph,
};
pub use petgraph;
