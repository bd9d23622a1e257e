use crate::error::{ErrorKind, Result};

/// A minimum priority queue over the indices `0..capacity`, each associated with a key.
/// Supports decreasing the key of an index that is already in the queue.
///
/// Implemented as binary heap of indices, with a reverse map from index to heap position.
#[derive(Debug, Clone)]
pub struct IndexMinPriorityQueue<Key> {
    heap: Vec<usize>,
    positions: Vec<Option<usize>>,
    keys: Vec<Option<Key>>,
}

impl<Key: PartialOrd + Copy> IndexMinPriorityQueue<Key> {
    /// Creates an empty queue for the indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    fn validate_index(&self, index: usize) -> Result<()> {
        ensure!(
            index < self.positions.len(),
            ErrorKind::InvalidIndex(format!(
                "index {} is not in [0, {})",
                index,
                self.positions.len()
            ))
        );
        Ok(())
    }

    /// Returns true if `index` is in the queue.
    pub fn contains(&self, index: usize) -> bool {
        index < self.positions.len() && self.positions[index].is_some()
    }

    /// Returns the amount of indices in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue contains no indices.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `index` with the given key.
    pub fn insert(&mut self, index: usize, key: Key) -> Result<()> {
        self.validate_index(index)?;
        ensure!(
            !self.contains(index),
            ErrorKind::InvalidIndex(format!("index {} is already in the queue", index))
        );
        self.positions[index] = Some(self.heap.len());
        self.keys[index] = Some(key);
        self.heap.push(index);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Decreases the key of `index` to `key`.
    pub fn decrease_key(&mut self, index: usize, key: Key) -> Result<()> {
        self.validate_index(index)?;
        let position = match self.positions[index] {
            Some(position) => position,
            None => bail!(ErrorKind::InvalidIndex(format!(
                "index {} is not in the queue",
                index
            ))),
        };
        ensure!(
            self.keys[index].map_or(false, |old_key| key < old_key),
            ErrorKind::InvalidIndex(format!(
                "new key of index {} does not strictly decrease its key",
                index
            ))
        );
        self.keys[index] = Some(key);
        self.sift_up(position);
        Ok(())
    }

    /// Returns the smallest key in the queue, if any.
    pub fn min_key(&self) -> Option<Key> {
        self.heap.first().and_then(|&index| self.keys[index])
    }

    /// Removes the index with the smallest key and returns it.
    pub fn del_min(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.positions[min] = None;
        self.keys[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.keys[self.heap[a]] < self.keys[self.heap[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, position) {
                break;
            }
            self.swap(position, child);
            position = child;
        }
    }
}
