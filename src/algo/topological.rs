use crate::algo::cycle::DirectedCycle;
use crate::algo::traversal::depth_first_order::DepthFirstOrder;
use crate::error::Result;
use crate::implementation::Digraph;
use crate::interface::{GraphBase, NavigableGraph};

/// A topological order of a digraph, computed as reverse postorder of a depth-first search.
/// If the digraph has a directed cycle, there is no topological order.
#[derive(Debug, Clone)]
pub struct TarjanTopological {
    order: Option<Vec<usize>>,
    rank: Vec<Option<usize>>,
}

impl TarjanTopological {
    /// Computes a topological order of `graph`, if it is acyclic.
    pub fn new(graph: &Digraph) -> Self {
        let mut rank = vec![None; graph.vertex_count()];
        if DirectedCycle::new(graph).has_cycle() {
            debug!("Digraph has a cycle, so it has no topological order");
            return Self { order: None, rank };
        }

        let order = DepthFirstOrder::new(graph).reverse_postorder();
        for (position, &v) in order.iter().enumerate() {
            rank[v] = Some(position);
        }

        let result = Self {
            order: Some(order),
            rank,
        };
        self_check!(result.check(graph));
        result
    }

    /// Returns true if the digraph has a topological order, i.e. if it is acyclic.
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the vertices in topological order, or `None` if the digraph has a directed cycle.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the topological order, or `None` if the digraph has a directed cycle.
    pub fn rank(&self, v: usize) -> Result<Option<usize>> {
        crate::algo::validate_vertex(v, self.rank.len())?;
        Ok(self.rank[v])
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self, graph: &Digraph) -> bool {
        for v in 0..graph.vertex_count() {
            for w in graph.neighbors(v) {
                if self.rank[v] >= self.rank[w] {
                    error!(
                        "edge {}->{} goes backwards in the topological order: {:?} >= {:?}",
                        v, w, self.rank[v], self.rank[w]
                    );
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TarjanTopological;
    use crate::algo::predefined_graphs::{create_binary_tree, TINY_DAG, TINY_DG};
    use crate::interface::GraphBase;
    use crate::io::read_digraph;

    #[test]
    fn test_tiny_dag() {
        let graph = read_digraph(TINY_DAG.as_bytes()).unwrap();
        let topological = TarjanTopological::new(&graph);
        assert!(topological.has_order());
        assert_eq!(
            topological.order().unwrap(),
            &[8, 7, 2, 3, 0, 6, 9, 10, 11, 12, 1, 5, 4]
        );
        assert_eq!(topological.rank(8).unwrap(), Some(0));
        assert_eq!(topological.rank(4).unwrap(), Some(12));

        for v in 0..graph.vertex_count() {
            for w in graph.adj(v).unwrap() {
                assert!(topological.rank(v).unwrap() < topological.rank(w).unwrap());
            }
        }
        assert!(topological.rank(13).is_err());
    }

    #[test]
    fn test_cyclic_digraph_has_no_order() {
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        let topological = TarjanTopological::new(&graph);
        assert!(!topological.has_order());
        assert_eq!(topological.order(), None);
        for v in 0..graph.vertex_count() {
            assert_eq!(topological.rank(v).unwrap(), None);
        }
    }

    #[test]
    fn test_binary_tree() {
        let graph = create_binary_tree(5);
        let topological = TarjanTopological::new(&graph);
        assert_eq!(topological.order().unwrap()[0], 0);
        assert_eq!(topological.order().unwrap().len(), 63);
    }
}
