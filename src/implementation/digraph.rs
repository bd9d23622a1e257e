use crate::error::Result;
use crate::implementation::graph::AdjacentVertices;
use crate::interface::{GraphBase, NavigableGraph};
use std::fmt;

/// A directed, unweighted graph with vertices `0..V`.
/// Additionally to the adjacency lists, the in-degree of each vertex is tracked.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    edge_count: usize,
    adjacency: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
}

impl Digraph {
    /// Creates a digraph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
        }
    }

    /// Adds the directed edge `v->w` to this digraph.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adjacency[v].push(w);
        self.in_degree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the successors of `v`.
    pub fn adj(&self, v: usize) -> Result<AdjacentVertices<'_>> {
        self.validate_vertex(v)?;
        Ok(self.neighbors(v))
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

    /// Returns the reverse of this digraph, i.e. the digraph with all edges flipped.
    pub fn reverse(&self) -> Self {
        let mut reverse = Self::new(self.vertex_count());
        for v in 0..self.vertex_count() {
            for w in self.neighbors(v) {
                reverse.adjacency[w].push(v);
                reverse.in_degree[v] += 1;
                reverse.edge_count += 1;
            }
        }
        reverse
    }

    pub(crate) fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }
}

impl GraphBase for Digraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<'a> NavigableGraph<'a> for Digraph {
    type Neighbors = AdjacentVertices<'a>;

    fn neighbors(&'a self, vertex: usize) -> Self::Neighbors {
        debug_assert!(vertex < self.vertex_count());
        self.adjacency[vertex].iter().rev().copied()
    }

    fn out_degree(&'a self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges ",
            self.vertex_count(),
            self.edge_count
        )?;
        for v in 0..self.vertex_count() {
            write!(f, "{}: ", v)?;
            for w in self.neighbors(v) {
                write!(f, "{} ", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
