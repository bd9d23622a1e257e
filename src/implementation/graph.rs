use crate::error::Result;
use crate::interface::{GraphBase, NavigableGraph};
use std::fmt;

/// An iterator over the adjacency list of a vertex, most recently added first.
pub type AdjacentVertices<'a> = std::iter::Copied<std::iter::Rev<std::slice::Iter<'a, usize>>>;

/// An undirected, unweighted graph with vertices `0..V`.
///
/// Parallel edges and self-loops are permitted.
/// A self-loop `v-v` appears twice in the adjacency list of `v` and therefore counts twice towards its degree.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edge_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds the undirected edge `v-w` to this graph.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.edge_count += 1;
        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        Ok(())
    }

    /// Returns the vertices adjacent to `v`.
    pub fn adj(&self, v: usize) -> Result<AdjacentVertices<'_>> {
        self.validate_vertex(v)?;
        Ok(self.neighbors(v))
    }

    /// Returns the degree of `v`.
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Returns the maximum degree over all vertices, or zero if the graph has no vertices.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the amount of self-loops in this graph.
    pub fn self_loop_count(&self) -> usize {
        let count: usize = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, neighbors)| neighbors.iter().filter(|&&w| w == v).count())
            .sum();
        // Each self-loop is contained twice in the adjacency list of its vertex.
        count / 2
    }

    /// Returns each edge of this graph exactly once, as pair `(v, w)` with `v <= w`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for v in 0..self.vertex_count() {
            let mut self_loops = 0;
            for w in self.neighbors(v) {
                if w > v {
                    edges.push((v, w));
                } else if w == v {
                    // The two copies of a self-loop are consecutive.
                    if self_loops % 2 == 0 {
                        edges.push((v, w));
                    }
                    self_loops += 1;
                }
            }
        }
        debug_assert_eq!(edges.len(), self.edge_count);
        edges
    }
}

impl GraphBase for Graph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<'a> NavigableGraph<'a> for Graph {
    type Neighbors = AdjacentVertices<'a>;

    fn neighbors(&'a self, vertex: usize) -> Self::Neighbors {
        debug_assert!(vertex < self.vertex_count());
        self.adjacency[vertex].iter().rev().copied()
    }

    fn out_degree(&'a self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }
}

impl fmt::Display for Graph {
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
