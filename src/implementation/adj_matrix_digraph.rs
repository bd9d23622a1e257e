use crate::edge::{validate_weight, DirectedEdge};
use crate::error::{ErrorKind, Result};
use crate::interface::{EdgeWeightedNavigableGraph, GraphBase};
use std::convert::TryFrom;
use std::fmt;

/// An iterator over the edges leaving a vertex of an [AdjMatrixEdgeWeightedDigraph](AdjMatrixEdgeWeightedDigraph), ordered by head.
pub type MatrixRow<'a> =
    std::iter::Copied<std::iter::Flatten<std::slice::Iter<'a, Option<DirectedEdge>>>>;

/// A dense edge-weighted digraph storing a `V×V` matrix with at most one edge per ordered pair of vertices.
/// Gives constant-time access to the edge between two vertices.
#[derive(Debug, Clone, Default)]
pub struct AdjMatrixEdgeWeightedDigraph {
    vertex_count: usize,
    edge_count: usize,
    matrix: Vec<Option<DirectedEdge>>,
}

impl AdjMatrixEdgeWeightedDigraph {
    /// Creates a digraph with `vertex_count` vertices and no edges.
    ///
    /// Panics if `vertex_count * vertex_count` overflows. Use [try_new](AdjMatrixEdgeWeightedDigraph::try_new) for untrusted vertex counts.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            matrix: vec![None; vertex_count * vertex_count],
        }
    }

    /// Creates a digraph with `vertex_count` vertices and no edges.
    /// Fails if the matrix would have more than `usize::MAX` entries.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        match vertex_count.checked_mul(vertex_count) {
            Some(entry_count) => Ok(Self {
                vertex_count,
                edge_count: 0,
                matrix: vec![None; entry_count],
            }),
            None => bail!(ErrorKind::InvalidSize(
                "vertices",
                i64::try_from(vertex_count).unwrap_or(i64::MAX)
            )),
        }
    }

    /// Adds the directed edge `edge` to this digraph, unless an edge between the same ordered pair of vertices already exists.
    /// Returns true if the edge was added.
    /// Fails if an endpoint is not a vertex of this digraph or if the weight is not finite.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<bool> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())?;
        validate_weight(edge.from(), edge.to(), edge.weight())?;
        let entry = &mut self.matrix[edge.from() * self.vertex_count + edge.to()];
        if entry.is_none() {
            *entry = Some(edge);
            self.edge_count += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the edges leaving `v`, ordered by their head.
    pub fn adj(&self, v: usize) -> Result<MatrixRow<'_>> {
        self.validate_vertex(v)?;
        Ok(self.incident_edges(v))
    }

    /// Returns the edge `v->w`, if it exists.
    pub fn edge(&self, v: usize, w: usize) -> Result<Option<DirectedEdge>> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        Ok(self.matrix[v * self.vertex_count + w])
    }
}

impl GraphBase for AdjMatrixEdgeWeightedDigraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<'a> EdgeWeightedNavigableGraph<'a> for AdjMatrixEdgeWeightedDigraph {
    type Edge = DirectedEdge;
    type IncidentEdges = MatrixRow<'a>;

    fn incident_edges(&'a self, vertex: usize) -> Self::IncidentEdges {
        debug_assert!(vertex < self.vertex_count);
        let row_start = vertex * self.vertex_count;
        self.matrix[row_start..row_start + self.vertex_count]
            .iter()
            .flatten()
            .copied()
    }
}

impl fmt::Display for AdjMatrixEdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count, self.edge_count)?;
        for v in 0..self.vertex_count {
            write!(f, "{}: ", v)?;
            for edge in self.incident_edges(v) {
                write!(f, "{}  ", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
