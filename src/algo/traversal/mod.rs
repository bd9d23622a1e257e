use crate::error::Result;
use crate::interface::StaticGraph;
use std::collections::VecDeque;

/// Depth-first preorder and postorder numbering of all vertices of a graph.
pub mod depth_first_order;

/// The distance reported for vertices that are unreachable from the source of a breadth-first search.
pub const INFINITY: usize = usize::MAX;

/// A depth-first search from a single source vertex.
///
/// The search uses an explicit stack of neighbor iterators, so its memory usage does not depend on the call stack.
/// Moreover, the search computes the preorder rank of each visited vertex.
#[derive(Debug, Clone)]
pub struct Dfs {
    rank: Vec<Option<usize>>,
    count: usize,
}

impl Dfs {
    /// Searches `graph` from `source`.
    pub fn new<Graph: StaticGraph>(graph: &Graph, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;
        let mut rank = vec![None; graph.vertex_count()];
        rank[source] = Some(0);
        let mut current_rank = 1;
        let mut stack = vec![graph.neighbors(source)];

        loop {
            let next = match stack.last_mut() {
                Some(neighbors) => neighbors.next(),
                None => break,
            };

            match next {
                Some(w) => {
                    if rank[w].is_none() {
                        rank[w] = Some(current_rank);
                        current_rank += 1;
                        stack.push(graph.neighbors(w));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        trace!(
            "Depth-first search from {} reached {} vertices",
            source,
            current_rank
        );
        Ok(Self {
            rank,
            count: current_rank,
        })
    }

    /// Returns true if `v` is reachable from the source.
    pub fn marked(&self, v: usize) -> Result<bool> {
        Ok(self.rank_of(v)?.is_some())
    }

    /// Returns the preorder rank of `v`, or `None` if `v` is not reachable from the source.
    pub fn rank_of(&self, v: usize) -> Result<Option<usize>> {
        crate::algo::validate_vertex(v, self.rank.len())?;
        Ok(self.rank[v])
    }

    /// Returns the amount of vertices reachable from the source, including the source itself.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// A breadth-first search from a single source vertex, computing shortest hop-count paths.
#[derive(Debug, Clone)]
pub struct Bfs {
    source: usize,
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<usize>,
}

impl Bfs {
    /// Searches `graph` from `source`.
    pub fn new<Graph: StaticGraph>(graph: &Graph, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;
        let mut edge_to = vec![None; graph.vertex_count()];
        let mut dist_to = vec![INFINITY; graph.vertex_count()];
        let mut queue = VecDeque::new();
        dist_to[source] = 0;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(v) {
                if dist_to[w] == INFINITY {
                    edge_to[w] = Some(v);
                    dist_to[w] = dist_to[v] + 1;
                    queue.push_back(w);
                }
            }
        }

        let bfs = Self {
            source,
            edge_to,
            dist_to,
        };
        self_check!(bfs.check(graph));
        Ok(bfs)
    }

    /// Returns true if there is a path from the source to `v`.
    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)? != INFINITY)
    }

    /// Returns the amount of edges of a shortest path from the source to `v`, or [INFINITY](INFINITY) if there is none.
    pub fn dist_to(&self, v: usize) -> Result<usize> {
        crate::algo::validate_vertex(v, self.dist_to.len())?;
        Ok(self.dist_to[v])
    }

    /// Returns the vertices of a shortest path from the source to `v`, starting with the source.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(predecessor) = self.edge_to[current] {
            path.push(predecessor);
            current = predecessor;
        }
        debug_assert_eq!(current, self.source);
        path.reverse();
        Ok(Some(path))
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check<Graph: StaticGraph>(&self, graph: &Graph) -> bool {
        if self.dist_to[self.source] != 0 {
            error!("distance of source {} to itself is not 0", self.source);
            return false;
        }

        for v in 0..graph.vertex_count() {
            if self.dist_to[v] == INFINITY {
                continue;
            }
            for w in graph.neighbors(v) {
                if self.dist_to[w] == INFINITY || self.dist_to[w] > self.dist_to[v] + 1 {
                    error!(
                        "edge {}-{} violates the shortest path property: dist[{}] = {}, dist[{}] = {}",
                        v, w, v, self.dist_to[v], w, self.dist_to[w]
                    );
                    return false;
                }
            }
        }

        for (w, predecessor) in self.edge_to.iter().enumerate() {
            if let Some(v) = *predecessor {
                if self.dist_to[w] != self.dist_to[v] + 1 {
                    error!(
                        "tree edge {}-{} is not tight: dist[{}] = {}, dist[{}] = {}",
                        v, w, v, self.dist_to[v], w, self.dist_to[w]
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
    use super::{Bfs, Dfs, INFINITY};
    use crate::algo::predefined_graphs::{create_binary_tree, TINY_CG, TINY_DG};
    use crate::implementation::{Digraph, Graph};
    use crate::interface::GraphBase;
    use crate::io::{read_digraph, read_graph};

    #[test]
    fn test_bfs_tiny_cg() {
        let graph = read_graph(TINY_CG.as_bytes()).unwrap();
        let bfs = Bfs::new(&graph, 0).unwrap();
        assert_eq!(bfs.dist_to(0).unwrap(), 0);
        assert_eq!(bfs.dist_to(3).unwrap(), 2);
        assert_eq!(bfs.path_to(3).unwrap(), Some(vec![0, 2, 3]));
        assert_eq!(bfs.path_to(0).unwrap(), Some(vec![0]));
        for v in 0..graph.vertex_count() {
            assert!(bfs.has_path_to(v).unwrap());
        }
        assert!(bfs.dist_to(6).is_err());
    }

    #[test]
    fn test_bfs_unreachable() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 3).unwrap();
        let bfs = Bfs::new(&graph, 1).unwrap();
        assert!(bfs.has_path_to(0).unwrap());
        assert!(!bfs.has_path_to(3).unwrap());
        assert_eq!(bfs.dist_to(2).unwrap(), INFINITY);
        assert_eq!(bfs.path_to(3).unwrap(), None);
        assert!(Bfs::new(&graph, 4).is_err());
    }

    #[test]
    fn test_bfs_directed() {
        let mut graph = Digraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        let bfs = Bfs::new(&graph, 1).unwrap();
        assert_eq!(bfs.dist_to(0).unwrap(), 2);
        assert_eq!(bfs.path_to(0).unwrap(), Some(vec![1, 2, 0]));
    }

    #[test]
    fn test_bfs_binary_tree_depths() {
        let graph = create_binary_tree(4);
        let bfs = Bfs::new(&graph, 0).unwrap();
        assert_eq!(bfs.dist_to(0).unwrap(), 0);
        assert_eq!(bfs.dist_to(1).unwrap(), 1);
        assert_eq!(bfs.dist_to(2).unwrap(), 1);
        assert_eq!(bfs.dist_to(3).unwrap(), 2);
        let max_depth = (0..graph.vertex_count())
            .map(|v| bfs.dist_to(v).unwrap())
            .max();
        assert_eq!(max_depth, Some(4));
    }

    #[test]
    fn test_dfs_reachability() {
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        let dfs = Dfs::new(&graph, 1).unwrap();
        assert_eq!(dfs.count(), 1);
        assert!(dfs.marked(1).unwrap());
        assert!(!dfs.marked(0).unwrap());

        let dfs = Dfs::new(&graph, 2).unwrap();
        let reachable: Vec<_> = (0..graph.vertex_count())
            .filter(|&v| dfs.marked(v).unwrap())
            .collect();
        assert_eq!(reachable, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(dfs.count(), 6);
        assert_eq!(dfs.rank_of(2).unwrap(), Some(0));
        assert!(dfs.marked(13).is_err());
    }

    #[test]
    fn test_dfs_agrees_with_bfs() {
        let graph = read_digraph(TINY_DG.as_bytes()).unwrap();
        for source in 0..graph.vertex_count() {
            let dfs = Dfs::new(&graph, source).unwrap();
            let bfs = Bfs::new(&graph, source).unwrap();
            for v in 0..graph.vertex_count() {
                assert_eq!(dfs.marked(v).unwrap(), bfs.has_path_to(v).unwrap());
            }
        }
    }

    #[test]
    fn test_dfs_deep_path() {
        let mut graph = Digraph::new(100_000);
        for v in 1..100_000 {
            graph.add_edge(v - 1, v).unwrap();
        }
        let dfs = Dfs::new(&graph, 0).unwrap();
        assert_eq!(dfs.count(), 100_000);
        assert_eq!(dfs.rank_of(99_999).unwrap(), Some(99_999));
    }
}
