use crate::error::Result;
use crate::interface::StaticGraph;

/// The preorder and postorder of a full depth-first search over a graph.
///
/// The search starts from each unvisited vertex in increasing order, and explores successors in the iteration order of the graph.
/// It uses an explicit stack of `(vertex, neighbor iterator)` pairs instead of recursion.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    /// Computes the depth-first orders of `graph`.
    pub fn new<Graph: StaticGraph>(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut order = Self {
            pre: vec![0; vertex_count],
            post: vec![0; vertex_count],
            preorder: Vec::with_capacity(vertex_count),
            postorder: Vec::with_capacity(vertex_count),
        };
        let mut marked = vec![false; vertex_count];

        for root in 0..vertex_count {
            if marked[root] {
                continue;
            }

            marked[root] = true;
            order.visit_pre(root);
            let mut stack = vec![(root, graph.neighbors(root))];
            loop {
                let next = match stack.last_mut() {
                    Some((_, neighbors)) => neighbors.next(),
                    None => break,
                };

                match next {
                    Some(w) => {
                        if !marked[w] {
                            marked[w] = true;
                            order.visit_pre(w);
                            stack.push((w, graph.neighbors(w)));
                        }
                    }
                    None => {
                        if let Some((v, _)) = stack.pop() {
                            order.visit_post(v);
                        }
                    }
                }
            }
        }

        self_check!(order.check());
        order
    }

    fn visit_pre(&mut self, v: usize) {
        self.pre[v] = self.preorder.len();
        self.preorder.push(v);
    }

    fn visit_post(&mut self, v: usize) {
        self.post[v] = self.postorder.len();
        self.postorder.push(v);
    }

    /// Returns the preorder number of `v`.
    pub fn pre(&self, v: usize) -> Result<usize> {
        crate::algo::validate_vertex(v, self.pre.len())?;
        Ok(self.pre[v])
    }

    /// Returns the postorder number of `v`.
    pub fn post(&self, v: usize) -> Result<usize> {
        crate::algo::validate_vertex(v, self.post.len())?;
        Ok(self.post[v])
    }

    /// Returns the vertices in preorder.
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Returns the vertices in postorder.
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    /// Returns the vertices in reverse postorder.
    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }

    #[cfg(any(debug_assertions, feature = "self-check"))]
    fn check(&self) -> bool {
        for (rank, &v) in self.postorder.iter().enumerate() {
            if self.post[v] != rank {
                error!("post({}) = {} and postorder rank are inconsistent", v, self.post[v]);
                return false;
            }
        }

        for (rank, &v) in self.preorder.iter().enumerate() {
            if self.pre[v] != rank {
                error!("pre({}) = {} and preorder rank are inconsistent", v, self.pre[v]);
                return false;
            }
        }

        true
    }
}
