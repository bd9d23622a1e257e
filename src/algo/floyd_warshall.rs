use crate::algo::cycle::EdgeWeightedDirectedCycle;
use crate::edge::DirectedEdge;
use crate::error::{ErrorKind, Result};
use crate::implementation::{AdjMatrixEdgeWeightedDigraph, EdgeWeightedDigraph};
use crate::interface::{EdgeWeightedNavigableGraph, GraphBase};
use bitvector::BitVector;

/// All-pairs shortest paths in an edge-weighted digraph, where edge weights may be negative.
///
/// The computation stops as soon as a negative cycle is detected.
/// After that, distances and paths are undefined, but the negative cycle itself and reachability can be queried.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    has_negative_cycle: bool,
    dist_to: Vec<Vec<f64>>,
    edge_to: Vec<Vec<Option<DirectedEdge>>>,
    /// Filled only if a negative cycle stopped the computation, since `dist_to` is incomplete then.
    reachable: Vec<BitVector>,
}

impl FloydWarshall {
    /// Computes the shortest paths between all pairs of vertices of `graph`.
    pub fn new(graph: &AdjMatrixEdgeWeightedDigraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut result = Self {
            has_negative_cycle: false,
            dist_to: vec![vec![f64::INFINITY; vertex_count]; vertex_count],
            edge_to: vec![vec![None; vertex_count]; vertex_count],
            reachable: Vec::new(),
        };

        for v in 0..vertex_count {
            for edge in graph.incident_edges(v) {
                result.dist_to[v][edge.to()] = edge.weight();
                result.edge_to[v][edge.to()] = Some(edge);
            }
            // A negative self-loop is kept, such that it is detected as negative cycle.
            if result.dist_to[v][v] >= 0.0 {
                result.dist_to[v][v] = 0.0;
                result.edge_to[v][v] = None;
            }
        }

        for i in 0..vertex_count {
            for v in 0..vertex_count {
                if result.edge_to[v][i].is_none() {
                    continue;
                }

                for w in 0..vertex_count {
                    let distance = result.dist_to[v][i] + result.dist_to[i][w];
                    if result.dist_to[v][w] > distance {
                        result.dist_to[v][w] = distance;
                        result.edge_to[v][w] = result.edge_to[i][w];
                    }
                }

                if result.dist_to[v][v] < 0.0 {
                    trace!(
                        "Found negative cycle through {} while relaxing over {}",
                        v,
                        i
                    );
                    result.has_negative_cycle = true;
                    result.reachable = compute_reachability(graph);
                    debug!("Digraph with {} vertices has a negative cycle", vertex_count);
                    self_check!(result.negative_cycle().is_some());
                    return result;
                }
            }
        }

        debug!(
            "Computed all-pairs shortest paths for digraph with {} vertices",
            vertex_count
        );
        self_check!(result.check(graph));
        result
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        crate::algo::validate_vertex(v, self.dist_to.len())
    }

    /// Returns true if the digraph has a negative cycle.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Returns a negative cycle, or `None` if there is no such cycle.
    pub fn negative_cycle(&self) -> Option<Vec<DirectedEdge>> {
        let vertex_count = self.dist_to.len();
        for v in 0..vertex_count {
            if self.dist_to[v][v] >= 0.0 {
                continue;
            }

            // The last edges of the shortest paths starting in v form a graph in which v lies on a cycle.
            let mut shortest_path_tree = EdgeWeightedDigraph::new(vertex_count);
            for edge in self.edge_to[v].iter().flatten() {
                if shortest_path_tree.add_edge(*edge).is_err() {
                    return None;
                }
            }

            let finder = EdgeWeightedDirectedCycle::new(&shortest_path_tree);
            if let Some(cycle) = finder.cycle() {
                return Some(cycle.to_vec());
            }
        }
        None
    }

    /// Returns true if there is a path from `s` to `t`.
    /// This is well-defined even if the digraph has a negative cycle.
    pub fn has_path(&self, s: usize, t: usize) -> Result<bool> {
        self.validate_vertex(s)?;
        self.validate_vertex(t)?;
        if self.has_negative_cycle {
            Ok(self.reachable[s].contains(t))
        } else {
            Ok(self.dist_to[s][t] < f64::INFINITY)
        }
    }

    /// Returns the length of a shortest path from `s` to `t`, or `f64::INFINITY` if there is none.
    /// Fails if the digraph has a negative cycle.
    pub fn dist(&self, s: usize, t: usize) -> Result<f64> {
        self.validate_vertex(s)?;
        self.validate_vertex(t)?;
        ensure!(!self.has_negative_cycle, ErrorKind::NegativeCycle);
        Ok(self.dist_to[s][t])
    }

    /// Returns the edges of a shortest path from `s` to `t`, or `None` if there is none.
    /// Fails if the digraph has a negative cycle.
    pub fn path(&self, s: usize, t: usize) -> Result<Option<Vec<DirectedEdge>>> {
        let reachable = self.has_path(s, t)?;
        ensure!(!self.has_negative_cycle, ErrorKind::NegativeCycle);
        if !reachable {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut edge = self.edge_to[s][t];
        while let Some(current) = edge {
            path.push(current);
            edge = self.edge_to[s][current.from()];
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Certifies that no edge can be used to shorten a path.
    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self, graph: &AdjMatrixEdgeWeightedDigraph) -> bool {
        let vertex_count = graph.vertex_count();
        for v in 0..vertex_count {
            for edge in graph.incident_edges(v) {
                let w = edge.to();
                for i in 0..vertex_count {
                    let bound = self.dist_to[i][v] + edge.weight();
                    let tolerance =
                        crate::algo::mst::FLOATING_POINT_EPSILON * (1.0 + bound.abs());
                    if self.dist_to[i][w] > bound + tolerance {
                        error!(
                            "edge {} is eligible: dist[{}][{}] = {} > dist[{}][{}] + {}",
                            edge,
                            i,
                            w,
                            self.dist_to[i][w],
                            i,
                            v,
                            edge.weight()
                        );
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Computes for each vertex the set of vertices reachable from it, including itself.
fn compute_reachability(graph: &AdjMatrixEdgeWeightedDigraph) -> Vec<BitVector> {
    let vertex_count = graph.vertex_count();
    let mut reachable = Vec::with_capacity(vertex_count);
    let mut stack = Vec::new();
    for source in 0..vertex_count {
        let mut visited = BitVector::new(vertex_count);
        visited.insert(source);
        stack.push(source);
        while let Some(v) = stack.pop() {
            for edge in graph.incident_edges(v) {
                if visited.insert(edge.to()) {
                    stack.push(edge.to());
                }
            }
        }
        reachable.push(visited);
    }
    reachable
}
