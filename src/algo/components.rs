use crate::algo::traversal::depth_first_order::DepthFirstOrder;
use crate::error::Result;
use crate::implementation::Digraph;
use crate::interface::{GraphBase, NavigableGraph};

/// The strongly connected components of a digraph, computed with Kosaraju's algorithm.
///
/// The first pass computes the reverse postorder of the reversed digraph.
/// The second pass runs depth-first searches on the digraph itself, starting from the unvisited vertices in that order.
/// Each of these searches visits exactly one strongly connected component.
#[derive(Debug, Clone)]
pub struct Kosaraju {
    id: Vec<usize>,
    count: usize,
}

impl Kosaraju {
    /// Computes the strongly connected components of `graph`.
    pub fn new(graph: &Digraph) -> Self {
        let order = DepthFirstOrder::new(&graph.reverse());
        let mut id = vec![0; graph.vertex_count()];
        let mut marked = vec![false; graph.vertex_count()];
        let mut count = 0;

        for root in order.reverse_postorder() {
            if marked[root] {
                continue;
            }

            marked[root] = true;
            id[root] = count;
            let mut stack = vec![graph.neighbors(root)];
            loop {
                let next = match stack.last_mut() {
                    Some(neighbors) => neighbors.next(),
                    None => break,
                };

                match next {
                    Some(w) => {
                        if !marked[w] {
                            marked[w] = true;
                            id[w] = count;
                            stack.push(graph.neighbors(w));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
            count += 1;
        }

        debug!("Found {} strongly connected components", count);
        Self { id, count }
    }

    /// Returns the amount of strongly connected components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the identifier of the strongly connected component containing `v`, an integer in `0..count()`.
    pub fn id(&self, v: usize) -> Result<usize> {
        crate::algo::validate_vertex(v, self.id.len())?;
        Ok(self.id[v])
    }

    /// Returns true if `v` and `w` are in the same strongly connected component.
    pub fn strongly_connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Returns the vertices of each strongly connected component, indexed by component identifier.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.count];
        for (v, &id) in self.id.iter().enumerate() {
            components[id].push(v);
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use super::Kosaraju;
    use crate::algo::predefined_graphs::{create_random_digraph, TINY_DAG, TINY_DG};
    use crate::algo::traversal::Dfs;
    use crate::implementation::Digraph;
    use crate::interface::GraphBase;
    use crate::io::read_digraph;
    use petgraph::graph::DiGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tiny_dg() {
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        let components = Kosaraju::new(&graph);
        assert_eq!(components.count(), 5);
        assert_eq!(
            components.components(),
            vec![
                vec![1],
                vec![0, 2, 3, 4, 5],
                vec![9, 10, 11, 12],
                vec![6, 8],
                vec![7]
            ]
        );
        assert!(components.strongly_connected(0, 4).unwrap());
        assert!(!components.strongly_connected(6, 7).unwrap());
        assert!(components.id(13).is_err());
    }

    #[test]
    fn test_dag_has_singleton_components() {
        let graph = read_digraph(TINY_DAG.as_bytes()).unwrap();
        assert_eq!(Kosaraju::new(&graph).count(), graph.vertex_count());
        assert_eq!(Kosaraju::new(&Digraph::new(0)).count(), 0);
    }

    #[test]
    fn test_mutual_reachability() {
        let mut random = StdRng::seed_from_u64(11);
        let graph = create_random_digraph(30, 45, &mut random);
        let components = Kosaraju::new(&graph);
        let searches: Vec<_> = (0..30).map(|v| Dfs::new(&graph, v).unwrap()).collect();
        for v in 0..30 {
            for w in 0..30 {
                let mutually_reachable =
                    searches[v].marked(w).unwrap() && searches[w].marked(v).unwrap();
                assert_eq!(
                    components.strongly_connected(v, w).unwrap(),
                    mutually_reachable
                );
            }
        }
    }

    #[test]
    fn test_component_count_agrees_with_petgraph() {
        let mut random = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let graph = create_random_digraph(40, 50, &mut random);
            let mut oracle = DiGraph::<(), ()>::new();
            let nodes: Vec<_> = (0..graph.vertex_count())
                .map(|_| oracle.add_node(()))
                .collect();
            for v in 0..graph.vertex_count() {
                for w in graph.adj(v).unwrap() {
                    oracle.add_edge(nodes[v], nodes[w], ());
                }
            }

            let components = Kosaraju::new(&Digraph::from(&oracle));
            assert_eq!(
                components.count(),
                petgraph::algo::kosaraju_scc(&oracle).len()
            );
        }
    }
}
