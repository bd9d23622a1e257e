use crate::edge::DirectedEdge;
use crate::implementation::Digraph;
use crate::interface::{GraphBase, NavigableGraph, StaticEdgeWeightedGraph};
use std::collections::VecDeque;

/// Detects a directed cycle in a digraph by repeatedly removing vertices without incoming edges.
///
/// If vertices remain after no more vertices can be removed, each of them has an incoming edge from another remaining vertex.
/// Then a cycle is found by walking these edges backwards until a vertex repeats.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches for a directed cycle in `graph`.
    pub fn new(graph: &Digraph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut in_degree = graph.in_degrees().to_vec();
        let mut queue: VecDeque<_> = (0..vertex_count).filter(|&v| in_degree[v] == 0).collect();

        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(v) {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }

        let root = match (0..vertex_count).find(|&v| in_degree[v] > 0) {
            Some(root) => root,
            None => {
                debug!("Digraph with {} vertices is acyclic", vertex_count);
                return Self { cycle: None };
            }
        };

        // Every remaining vertex has a remaining predecessor.
        let mut edge_to = vec![None; vertex_count];
        for v in (0..vertex_count).filter(|&v| in_degree[v] > 0) {
            for w in graph.neighbors(v) {
                if in_degree[w] > 0 {
                    edge_to[w] = Some(v);
                }
            }
        }

        let mut visited = vec![false; vertex_count];
        let mut on_cycle = root;
        while !visited[on_cycle] {
            visited[on_cycle] = true;
            match edge_to[on_cycle] {
                Some(predecessor) => on_cycle = predecessor,
                None => break,
            }
        }

        let mut cycle = vec![on_cycle];
        let mut v = on_cycle;
        while let Some(predecessor) = edge_to[v] {
            cycle.push(predecessor);
            v = predecessor;
            if v == on_cycle {
                break;
            }
        }
        cycle.reverse();

        debug!("Found directed cycle of length {}", cycle.len() - 1);
        let result = Self { cycle: Some(cycle) };
        self_check!(result.check(graph));
        result
    }

    /// Returns true if the digraph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle as sequence of vertices whose first and last element are equal, or `None` if the digraph is acyclic.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self, graph: &Digraph) -> bool {
        if let Some(cycle) = &self.cycle {
            if cycle.len() < 2 || cycle.first() != cycle.last() {
                error!("cycle {:?} is not closed", cycle);
                return false;
            }
            for pair in cycle.windows(2) {
                if !graph.neighbors(pair[0]).any(|w| w == pair[1]) {
                    error!("cycle {:?} uses missing edge {}->{}", cycle, pair[0], pair[1]);
                    return false;
                }
            }
        }
        true
    }
}

/// Detects a directed cycle in an edge-weighted digraph using a depth-first search.
/// The search keeps track of the vertices on its current path, and stops at the first edge that leads back onto that path.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDirectedCycle {
    cycle: Option<Vec<DirectedEdge>>,
}

impl EdgeWeightedDirectedCycle {
    /// Searches for a directed cycle in `graph`.
    pub fn new<Graph: StaticEdgeWeightedGraph<DirectedEdge>>(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut on_stack = vec![false; vertex_count];
        let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertex_count];
        let mut cycle = None;

        for root in 0..vertex_count {
            if marked[root] || cycle.is_some() {
                continue;
            }

            marked[root] = true;
            on_stack[root] = true;
            let mut stack = vec![(root, graph.incident_edges(root))];
            loop {
                let next = match stack.last_mut() {
                    Some((_, edges)) => edges.next(),
                    None => break,
                };

                match next {
                    Some(edge) => {
                        let w = edge.to();
                        if !marked[w] {
                            edge_to[w] = Some(edge);
                            marked[w] = true;
                            on_stack[w] = true;
                            stack.push((w, graph.incident_edges(w)));
                        } else if on_stack[w] {
                            cycle = Some(Self::trace_cycle(&edge_to, edge));
                            break;
                        }
                    }
                    None => {
                        if let Some((v, _)) = stack.pop() {
                            on_stack[v] = false;
                        }
                    }
                }
            }
        }

        if let Some(cycle) = &cycle {
            debug!("Found directed cycle with {} edges", cycle.len());
        }
        let result = Self { cycle };
        self_check!(result.check());
        result
    }

    /// Walks the tree edges back from `closing_edge` until reaching its head.
    fn trace_cycle(
        edge_to: &[Option<DirectedEdge>],
        closing_edge: DirectedEdge,
    ) -> Vec<DirectedEdge> {
        let start = closing_edge.to();
        let mut cycle = vec![closing_edge];
        let mut current = closing_edge;
        while current.from() != start {
            match edge_to[current.from()] {
                Some(previous) => {
                    cycle.push(previous);
                    current = previous;
                }
                None => break,
            }
        }
        cycle.reverse();
        cycle
    }

    /// Returns true if the digraph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle as sequence of edges, where the head of each edge is the tail of the next edge, or `None` if the digraph is acyclic.
    pub fn cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self) -> bool {
        if let Some(cycle) = &self.cycle {
            let (first, last) = match (cycle.first(), cycle.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => {
                    error!("cycle is empty");
                    return false;
                }
            };
            if first.from() != last.to() {
                error!(
                    "cycle begins with {} and ends with {}, which are not incident",
                    first, last
                );
                return false;
            }
            for pair in cycle.windows(2) {
                if pair[0].to() != pair[1].from() {
                    error!("cycle edges {} and {} are not incident", pair[0], pair[1]);
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectedCycle, EdgeWeightedDirectedCycle};
    use crate::algo::predefined_graphs::{create_random_digraph, TINY_DAG, TINY_DG};
    use crate::algo::traversal::depth_first_order::DepthFirstOrder;
    use crate::edge::DirectedEdge;
    use crate::implementation::{AdjMatrixEdgeWeightedDigraph, Digraph, EdgeWeightedDigraph};
    use crate::interface::GraphBase;
    use crate::io::read_digraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_triangle() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        let cycle = DirectedCycle::new(&graph);
        assert!(cycle.has_cycle());
        assert_eq!(cycle.cycle(), Some(&[0, 1, 2, 0][..]));
    }

    #[test]
    fn test_cycle_behind_acyclic_part() {
        let mut graph = Digraph::new(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(3, 4).unwrap();
        graph.add_edge(4, 2).unwrap();
        graph.add_edge(4, 5).unwrap();
        let cycle = DirectedCycle::new(&graph);
        assert_eq!(cycle.cycle(), Some(&[2, 3, 4, 2][..]));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = Digraph::new(2);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 1).unwrap();
        assert_eq!(DirectedCycle::new(&graph).cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn test_tiny_graphs() {
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        let cycle = DirectedCycle::new(&graph);
        let cycle = cycle.cycle().unwrap();
        assert_eq!(cycle.first(), cycle.last());

        let graph = read_digraph(TINY_DAG.as_bytes()).unwrap();
        assert!(!DirectedCycle::new(&graph).has_cycle());
        assert!(!DirectedCycle::new(&Digraph::new(0)).has_cycle());
    }

    #[test]
    fn test_acyclic_iff_reverse_postorder_is_topological() {
        let mut random = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let graph = create_random_digraph(12, 14, &mut random);
            let order = DepthFirstOrder::new(&graph);
            let order_is_topological = (0..graph.vertex_count()).all(|v| {
                graph
                    .adj(v)
                    .unwrap()
                    .all(|w| order.post(v).unwrap() > order.post(w).unwrap())
            });
            assert_eq!(DirectedCycle::new(&graph).has_cycle(), !order_is_topological);
        }
    }

    #[test]
    fn test_edge_weighted_cycle() {
        let mut graph = EdgeWeightedDigraph::new(5);
        graph.add_edge(DirectedEdge::new(0, 1, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(1, 2, -1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(2, 3, 0.5)).unwrap();
        graph.add_edge(DirectedEdge::new(3, 1, 0.5)).unwrap();
        graph.add_edge(DirectedEdge::new(3, 4, 2.0)).unwrap();
        let cycle = EdgeWeightedDirectedCycle::new(&graph);
        let cycle = cycle.cycle().unwrap();
        assert_eq!(
            cycle,
            &[
                DirectedEdge::new(1, 2, -1.0),
                DirectedEdge::new(2, 3, 0.5),
                DirectedEdge::new(3, 1, 0.5)
            ]
        );
    }

    #[test]
    fn test_edge_weighted_acyclic() {
        let mut graph = AdjMatrixEdgeWeightedDigraph::new(4);
        graph.add_edge(DirectedEdge::new(0, 1, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(0, 2, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(1, 3, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(2, 3, 1.0)).unwrap();
        assert!(!EdgeWeightedDirectedCycle::new(&graph).has_cycle());

        graph.add_edge(DirectedEdge::new(3, 3, 0.0)).unwrap();
        let cycle = EdgeWeightedDirectedCycle::new(&graph);
        assert_eq!(cycle.cycle(), Some(&[DirectedEdge::new(3, 3, 0.0)][..]));
    }
}
