use crate::error::{ErrorKind, Result};
use std::cmp::Ordering;
use std::fmt;

/// An edge whose weight can be used for shortest path and spanning tree computations.
pub trait WeightedEdge: Copy + fmt::Debug {
    /// The weight of the edge.
    fn weight(&self) -> f64;

    /// Returns the endpoint of this edge that is not `vertex`.
    /// For directed edges, this maps the tail to the head and the head to the tail.
    ///
    /// Callers must pass one of the endpoints of the edge.
    fn opposite(&self, vertex: usize) -> usize;
}

/// Fails if `weight` is not a finite number.
pub(crate) fn validate_weight(from: usize, to: usize, weight: f64) -> Result<()> {
    ensure!(
        weight.is_finite(),
        ErrorKind::InvalidWeight(from, to, weight)
    );
    Ok(())
}

/// An undirected weighted edge `v-w`.
///
/// Edges are ordered by weight.
/// Edges of equal weight are ordered by their endpoints, such that sorting is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    /// Creates a new undirected edge between `v` and `w` with the given weight.
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// Returns one of the endpoints of this edge.
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint of this edge that is not `vertex`.
    pub fn other(&self, vertex: usize) -> Result<usize> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            bail!(ErrorKind::InvalidVertex(vertex, self.v.max(self.w) + 1))
        }
    }

    /// Returns the weight of this edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns true if both endpoints of this edge are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

impl WeightedEdge for Edge {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn opposite(&self, vertex: usize) -> usize {
        debug_assert!(vertex == self.v || vertex == self.w);
        if vertex == self.v {
            self.w
        } else {
            self.v
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.v.cmp(&other.v))
            .then(self.w.cmp(&other.w))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// A directed weighted edge `from->to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    /// Creates a new directed edge from `from` to `to` with the given weight.
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// The tail of this edge.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The head of this edge.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the weight of this edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl WeightedEdge for DirectedEdge {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn opposite(&self, vertex: usize) -> usize {
        debug_assert!(vertex == self.from || vertex == self.to);
        if vertex == self.from {
            self.to
        } else {
            self.from
        }
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, self.weight)
    }
}
