use std::fmt::Debug;

use crate::{Error, Result};

const NOT_IN_QUEUE: usize = usize::MAX;

/// Binary min-heap over dense integer indices `0..capacity` with decrease/increase-key
///
/// Three parallel arrays:
/// - `values[index]`: current priority of `index`
/// - `heap[pos]`: index stored at heap position `pos`
/// - `position_in_heap[index]`: inverse of `heap`, or `NOT_IN_QUEUE`
///
/// Equal priorities never trigger a swap.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    values: Vec<Option<P>>,
    heap: Vec<usize>,
    position_in_heap: Vec<usize>,
}

impl<P> IndexedPriorityQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty queue accepting indices `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexedPriorityQueue {
            values: vec![None; capacity],
            heap: Vec::with_capacity(capacity),
            position_in_heap: vec![NOT_IN_QUEUE; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// O(1) membership test; out-of-range indices are never contained
    pub fn contains(&self, index: usize) -> bool {
        self.position_in_heap
            .get(index)
            .map_or(false, |&pos| pos != NOT_IN_QUEUE)
    }

    /// Current priority of `index`, if queued
    pub fn value_of(&self, index: usize) -> Option<P> {
        if self.contains(index) {
            self.values[index]
        } else {
            None
        }
    }

    pub fn insert(&mut self, index: usize, value: P) -> Result<()> {
        self.check_range(index)?;
        if self.contains(index) {
            return Err(Error::DuplicateIndex(index));
        }

        let pos = self.heap.len();
        self.values[index] = Some(value);
        self.heap.push(index);
        self.position_in_heap[index] = pos;
        self.swim(pos);
        Ok(())
    }

    /// Changes the priority of a queued index, sifting in whichever direction restores order
    pub fn update_value(&mut self, index: usize, value: P) -> Result<()> {
        self.check_range(index)?;
        let old = self.value_of(index).ok_or(Error::MissingIndex(index))?;
        self.values[index] = Some(value);

        let pos = self.position_in_heap[index];
        if value < old {
            self.swim(pos);
        } else if value > old {
            self.sink(pos);
        }
        Ok(())
    }

    /// Inserts `index` or lowers its priority; never raises an existing priority.
    ///
    /// Returns true if the queue changed.
    pub fn insert_or_decrease(&mut self, index: usize, value: P) -> Result<bool> {
        match self.value_of(index) {
            None => self.insert(index, value).map(|_| true),
            Some(old) if value < old => self.update_value(index, value).map(|_| true),
            Some(_) => Ok(false),
        }
    }

    pub fn peek_min(&self) -> Result<(usize, P)> {
        let &index = self.heap.first().ok_or(Error::EmptyQueue)?;
        self.values[index]
            .map(|value| (index, value))
            .ok_or(Error::MissingIndex(index))
    }

    /// Removes and returns the index with the smallest priority
    pub fn pop_min(&mut self) -> Result<(usize, P)> {
        let min = self.peek_min()?;
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();
        self.position_in_heap[min.0] = NOT_IN_QUEUE;
        self.values[min.0] = None;
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min)
    }

    fn check_range(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange(index))
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.values[self.heap[a]] < self.values[self.heap[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = a;
        self.position_in_heap[self.heap[b]] = b;
    }

    fn swim(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sink(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) { right } else { left };
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    impl<P: Ord + Copy + Debug> IndexedPriorityQueue<P> {
        fn assert_invariants(&self) {
            for (pos, &index) in self.heap.iter().enumerate() {
                assert_eq!(self.position_in_heap[index], pos, "inverse mapping broken at {pos}");
                assert!(self.values[index].is_some(), "queued index {index} has no value");
                if pos > 0 {
                    let parent = (pos - 1) / 2;
                    assert!(
                        self.values[self.heap[parent]] <= self.values[index],
                        "heap order broken between {parent} and {pos}"
                    );
                }
            }
            let queued = self.position_in_heap.iter().filter(|&&p| p != NOT_IN_QUEUE).count();
            assert_eq!(queued, self.heap.len());
        }
    }

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = IndexedPriorityQueue::new(6);
        for (index, value) in [(0, 50), (1, 20), (2, 40), (3, 10), (4, 30), (5, 60)] {
            queue.insert(index, value).unwrap();
        }
        queue.update_value(5, 5).unwrap();
        queue.update_value(3, 45).unwrap();

        let mut order = Vec::new();
        while let Ok((index, value)) = queue.pop_min() {
            order.push((index, value));
        }
        assert_eq!(order, vec![(5, 5), (1, 20), (4, 30), (2, 40), (3, 45), (0, 50)]);
    }

    #[test]
    fn test_contract_errors() {
        let mut queue = IndexedPriorityQueue::new(2);
        assert_eq!(queue.pop_min(), Err(Error::EmptyQueue));
        assert_eq!(queue.peek_min(), Err(Error::EmptyQueue));
        assert_eq!(queue.update_value(0, 1), Err(Error::MissingIndex(0)));
        assert_eq!(queue.insert(2, 1), Err(Error::IndexOutOfRange(2)));
        queue.insert(0, 3).unwrap();
        assert_eq!(queue.insert(0, 4), Err(Error::DuplicateIndex(0)));
        assert!(queue.contains(0));
        assert!(!queue.contains(1));
        assert!(!queue.contains(99));
    }

    #[test]
    fn test_insert_or_decrease_never_raises() {
        let mut queue = IndexedPriorityQueue::new(3);
        assert!(queue.insert_or_decrease(1, 10).unwrap());
        assert!(!queue.insert_or_decrease(1, 12).unwrap());
        assert!(queue.insert_or_decrease(1, 7).unwrap());
        assert_eq!(queue.value_of(1), Some(7));
    }

    #[test]
    fn test_heap_invariant_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let capacity = 64;
        let mut queue = IndexedPriorityQueue::new(capacity);

        for _ in 0..5_000 {
            let index = rng.gen_range(0..capacity);
            let value: i32 = rng.gen_range(-100..100);
            match rng.gen_range(0..3) {
                0 if !queue.contains(index) => queue.insert(index, value).unwrap(),
                1 if queue.contains(index) => queue.update_value(index, value).unwrap(),
                2 if !queue.is_empty() => {
                    let (_, popped) = queue.pop_min().unwrap();
                    if let Ok((_, next)) = queue.peek_min() {
                        assert!(popped <= next);
                    }
                }
                _ => {}
            }
            queue.assert_invariants();
        }
    }
}
