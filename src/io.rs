//! The textual graph format consists of whitespace-separated tokens:
//!
//! ```text
//! <vertex count> <edge count>
//! <from vertex> <to vertex> [<weight>]
//! ```
//!
//! The second line is repeated for each edge, and the weight is present only for edge-weighted graphs.
//! Line breaks carry no meaning.

use crate::edge::{DirectedEdge, Edge};
use crate::error::{ErrorKind, Result, ResultExt};
use crate::implementation::{
    AdjMatrixEdgeWeightedDigraph, Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph,
};
use crate::interface::{GraphBase, StaticGraph};
use num_traits::NumCast;
use std::io::{Read, Write};
use std::str::SplitWhitespace;

struct Tokens<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        match self.tokens.next() {
            Some(token) => Ok(token),
            None => bail!(ErrorKind::BadFormat(format!(
                "input ended while expecting {}",
                what
            ))),
        }
    }

    fn next_integer(&mut self, what: &str) -> Result<i64> {
        let token = self.next_token(what)?;
        token
            .parse()
            .chain_err(|| ErrorKind::BadFormat(format!("expected {}, found '{}'", what, token)))
    }

    fn next_count(&mut self, what: &'static str) -> Result<usize> {
        let value = self.next_integer(what)?;
        match <usize as NumCast>::from(value) {
            Some(count) => Ok(count),
            None => bail!(ErrorKind::InvalidSize(what, value)),
        }
    }

    fn next_vertex(&mut self) -> Result<usize> {
        let value = self.next_integer("vertex")?;
        match <usize as NumCast>::from(value) {
            Some(vertex) => Ok(vertex),
            None => bail!(ErrorKind::NegativeVertex(value)),
        }
    }

    fn next_weight(&mut self) -> Result<f64> {
        let token = self.next_token("edge weight")?;
        token
            .parse()
            .chain_err(|| {
                ErrorKind::BadFormat(format!("expected edge weight, found '{}'", token))
            })
    }

    fn finish(mut self) {
        if let Some(token) = self.tokens.next() {
            warn!(
                "Ignoring trailing data after the last edge, starting with '{}'",
                token
            );
        }
    }
}

/// Reads the whole input and calls `add_edge` once for each of the declared edges.
/// The graph is created by `new_graph` from the vertex count.
fn read_edges<Reader: Read, GraphType>(
    mut reader: Reader,
    new_graph: impl FnOnce(usize) -> Result<GraphType>,
    mut add_edge: impl FnMut(&mut GraphType, &mut Tokens<'_>) -> Result<()>,
) -> Result<GraphType> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = Tokens::new(&input);

    let vertex_count = tokens.next_count("vertices")?;
    let edge_count = tokens.next_count("edges")?;
    let mut graph = new_graph(vertex_count)?;
    for _ in 0..edge_count {
        add_edge(&mut graph, &mut tokens)?;
    }
    tokens.finish();

    debug!(
        "Read graph with {} vertices and {} edges",
        vertex_count, edge_count
    );
    Ok(graph)
}

/// Reads an undirected graph in the textual graph format.
pub fn read_graph<Reader: Read>(reader: Reader) -> Result<Graph> {
    read_edges(
        reader,
        |vertex_count| Ok(Graph::new(vertex_count)),
        |graph, tokens| {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            graph.add_edge(v, w)
        },
    )
}

/// Reads a digraph in the textual graph format.
pub fn read_digraph<Reader: Read>(reader: Reader) -> Result<Digraph> {
    read_edges(
        reader,
        |vertex_count| Ok(Digraph::new(vertex_count)),
        |graph, tokens| {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            graph.add_edge(v, w)
        },
    )
}

/// Reads an undirected edge-weighted graph in the textual graph format.
pub fn read_edge_weighted_graph<Reader: Read>(reader: Reader) -> Result<EdgeWeightedGraph> {
    read_edges(
        reader,
        |vertex_count| Ok(EdgeWeightedGraph::new(vertex_count)),
        |graph, tokens| {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            let weight = tokens.next_weight()?;
            graph.add_edge(Edge::new(v, w, weight))
        },
    )
}

/// Reads an edge-weighted digraph in the textual graph format.
pub fn read_edge_weighted_digraph<Reader: Read>(reader: Reader) -> Result<EdgeWeightedDigraph> {
    read_edges(
        reader,
        |vertex_count| Ok(EdgeWeightedDigraph::new(vertex_count)),
        |graph, tokens| {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            let weight = tokens.next_weight()?;
            graph.add_edge(DirectedEdge::new(v, w, weight))
        },
    )
}

/// Reads an edge-weighted digraph in the textual graph format into an adjacency matrix.
/// If the input contains multiple edges between the same ordered pair of vertices, only the first one is kept.
pub fn read_adj_matrix_edge_weighted_digraph<Reader: Read>(
    reader: Reader,
) -> Result<AdjMatrixEdgeWeightedDigraph> {
    read_edges(reader, AdjMatrixEdgeWeightedDigraph::try_new, |graph, tokens| {
        let v = tokens.next_vertex()?;
        let w = tokens.next_vertex()?;
        let weight = tokens.next_weight()?;
        if !graph.add_edge(DirectedEdge::new(v, w, weight))? {
            trace!("Ignoring parallel edge {}->{}", v, w);
        }
        Ok(())
    })
}

/// Write the graph in the following format.
///
/// ```text
/// <vertex count> <edge count>
/// <from vertex> <to vertex>
/// ```
///
/// The second line is repeated for each successor of each vertex, so this is meant for directed graphs.
/// Use [write_undirected_topology](write_undirected_topology) for undirected graphs.
pub fn write_topology<GraphType: StaticGraph, Writer: Write>(
    graph: &GraphType,
    writer: &mut Writer,
) -> Result<()> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for v in 0..graph.vertex_count() {
        for w in graph.neighbors(v) {
            writeln!(writer, "{} {}", v, w)?;
        }
    }
    Ok(())
}

/// Write the undirected graph in the same format as [write_topology](write_topology), listing each edge once.
pub fn write_undirected_topology<Writer: Write>(graph: &Graph, writer: &mut Writer) -> Result<()> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for (v, w) in graph.edges() {
        writeln!(writer, "{} {}", v, w)?;
    }
    Ok(())
}
