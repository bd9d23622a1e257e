use crate::implementation::Graph;
use crate::interface::{GraphBase, NavigableGraph};
use bitvector::BitVector;
use std::collections::VecDeque;

/// Returns true if every vertex of the graph has even degree.
/// A self-loop counts twice towards the degree of its vertex.
pub fn has_only_even_degrees(graph: &Graph) -> bool {
    (0..graph.vertex_count()).all(|v| graph.out_degree(v) % 2 == 0)
}

/// Compute a vector of the vertices that have odd degree, in ascending order.
pub fn find_odd_degree_vertices(graph: &Graph) -> Vec<usize> {
    (0..graph.vertex_count())
        .filter(|&v| graph.out_degree(v) % 2 != 0)
        .collect()
}

/// Each undirected edge registered exactly once, such that both of its directions share one used flag.
struct EdgeModel {
    endpoints: Vec<(usize, usize)>,
    incident: Vec<VecDeque<usize>>,
}

impl EdgeModel {
    fn new(graph: &Graph) -> Self {
        let mut endpoints = Vec::with_capacity(graph.edge_count());
        let mut incident = vec![VecDeque::new(); graph.vertex_count()];
        for v in 0..graph.vertex_count() {
            let mut self_loops = 0;
            for w in graph.neighbors(v) {
                if v < w || (v == w && self_loops % 2 == 0) {
                    let id = endpoints.len();
                    endpoints.push((v, w));
                    incident[v].push_back(id);
                    incident[w].push_back(id);
                }
                if v == w {
                    self_loops += 1;
                }
            }
        }
        debug_assert_eq!(endpoints.len(), graph.edge_count());
        Self {
            endpoints,
            incident,
        }
    }

    /// Walks from `start` until all reachable edges are consumed.
    /// Returns the walk if it consumes every edge of the graph.
    fn walk(mut self, start: usize) -> Option<Vec<usize>> {
        let mut used = BitVector::new(self.endpoints.len());
        let mut stack = vec![start];
        let mut walk = Vec::with_capacity(self.endpoints.len() + 1);

        while let Some(mut v) = stack.pop() {
            while let Some(id) = self.incident[v].pop_front() {
                if used.contains(id) {
                    continue;
                }
                used.insert(id);
                stack.push(v);
                let (x, y) = self.endpoints[id];
                v = if x == v { y } else { x };
            }
            walk.push(v);
        }

        if walk.len() != self.endpoints.len() + 1 {
            trace!(
                "Walk from {} consumed only {} of {} edges",
                start,
                walk.len() - 1,
                self.endpoints.len()
            );
            return None;
        }
        walk.reverse();
        Some(walk)
    }
}

fn first_non_isolated_vertex(graph: &Graph) -> Option<usize> {
    (0..graph.vertex_count()).find(|&v| graph.out_degree(v) > 0)
}

/// Certifies that `walk` uses every edge of `graph` exactly once.
#[cfg(any(debug_assertions, feature = "self-check"))]
fn check_eulerian_walk(graph: &Graph, walk: &[usize]) -> bool {
    if walk.len() != graph.edge_count() + 1 {
        error!(
            "walk has {} vertices, but the graph has {} edges",
            walk.len(),
            graph.edge_count()
        );
        return false;
    }

    let mut walked: Vec<_> = walk
        .windows(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect();
    let mut edges = graph.edges();
    walked.sort_unstable();
    edges.sort_unstable();
    if walked != edges {
        error!("walk does not use every edge exactly once");
        return false;
    }
    true
}

/// An Eulerian cycle of an undirected graph, i.e. a closed walk that uses every edge exactly once.
///
/// The cycle exists if the graph has at least one edge, every vertex has even degree and all non-isolated vertices are connected.
#[derive(Debug, Clone)]
pub struct EulerianCycle {
    cycle: Option<Vec<usize>>,
}

impl EulerianCycle {
    /// Computes an Eulerian cycle of `graph`, if one exists.
    pub fn new(graph: &Graph) -> Self {
        let cycle = if graph.edge_count() == 0 || !has_only_even_degrees(graph) {
            None
        } else {
            first_non_isolated_vertex(graph).and_then(|start| EdgeModel::new(graph).walk(start))
        };

        match &cycle {
            Some(cycle) => debug!("Found Eulerian cycle with {} vertices", cycle.len()),
            None => debug!("Graph has no Eulerian cycle"),
        }
        let result = Self { cycle };
        self_check!(result.check(graph));
        result
    }

    /// Returns the vertices of the Eulerian cycle, with the start vertex repeated at the end, or `None` if there is none.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    /// Returns true if the graph has an Eulerian cycle.
    pub fn has_eulerian_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self, graph: &Graph) -> bool {
        let cycle = match &self.cycle {
            Some(cycle) => cycle,
            None => return true,
        };
        if cycle.first() != cycle.last() {
            error!("Eulerian cycle is not closed");
            return false;
        }
        check_eulerian_walk(graph, cycle)
    }
}

/// An Eulerian path of an undirected graph, i.e. a walk that uses every edge exactly once.
///
/// The path exists if at most two vertices have odd degree and all non-isolated vertices are connected.
/// If there are two vertices of odd degree, the path starts at one and ends at the other.
/// A graph with vertices but no edges has the path consisting only of vertex 0.
#[derive(Debug, Clone)]
pub struct EulerianPath {
    path: Option<Vec<usize>>,
}

impl EulerianPath {
    /// Computes an Eulerian path of `graph`, if one exists.
    pub fn new(graph: &Graph) -> Self {
        let odd_vertices = find_odd_degree_vertices(graph);
        let path = if graph.is_empty() || odd_vertices.len() > 2 {
            None
        } else {
            let start = odd_vertices
                .last()
                .copied()
                .or_else(|| first_non_isolated_vertex(graph))
                .unwrap_or(0);
            EdgeModel::new(graph).walk(start)
        };

        match &path {
            Some(path) => debug!("Found Eulerian path with {} vertices", path.len()),
            None => debug!(
                "Graph has no Eulerian path ({} vertices of odd degree)",
                odd_vertices.len()
            ),
        }
        let result = Self { path };
        self_check!(result.check(graph));
        result
    }

    /// Returns the vertices of the Eulerian path, or `None` if there is none.
    pub fn path(&self) -> Option<&[usize]> {
        self.path.as_deref()
    }

    /// Returns true if the graph has an Eulerian path.
    pub fn has_eulerian_path(&self) -> bool {
        self.path.is_some()
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self, graph: &Graph) -> bool {
        match &self.path {
            Some(path) => check_eulerian_walk(graph, path),
            None => true,
        }
    }
}
