use crate::error::{ErrorKind, Result};
use std::cmp::Ordering;

/// A disjoint-set forest over the elements `0..n`, using union by rank and path halving.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl UnionFind {
    /// Creates a union-find structure where each of the `n` elements is in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    fn validate(&self, element: usize) -> Result<()> {
        ensure!(
            element < self.parent.len(),
            ErrorKind::InvalidVertex(element, self.parent.len())
        );
        Ok(())
    }

    /// Returns the representative of the set containing `element`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.validate(element)?;
        Ok(self.find_unchecked(element))
    }

    pub(crate) fn find_unchecked(&mut self, mut element: usize) -> usize {
        debug_assert!(element < self.parent.len());
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }

    /// Merges the sets containing `v` and `w`.
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, v: usize, w: usize) -> Result<bool> {
        self.validate(v)?;
        self.validate(w)?;
        Ok(self.union_unchecked(v, w))
    }

    pub(crate) fn union_unchecked(&mut self, v: usize, w: usize) -> bool {
        let root_v = self.find_unchecked(v);
        let root_w = self.find_unchecked(w);
        if root_v == root_w {
            return false;
        }

        match self.rank[root_v].cmp(&self.rank[root_w]) {
            Ordering::Less => self.parent[root_v] = root_w,
            Ordering::Greater => self.parent[root_w] = root_v,
            Ordering::Equal => {
                self.parent[root_w] = root_v;
                self.rank[root_v] += 1;
            }
        }
        self.count -= 1;
        true
    }

    /// Returns true if `v` and `w` are in the same set.
    pub fn connected(&mut self, v: usize, w: usize) -> Result<bool> {
        Ok(self.find(v)? == self.find(w)?)
    }

    pub(crate) fn connected_unchecked(&mut self, v: usize, w: usize) -> bool {
        self.find_unchecked(v) == self.find_unchecked(w)
    }

    /// Returns the amount of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }
}
