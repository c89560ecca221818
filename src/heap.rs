//! The two halves of a [`RunningMedian`](crate::RunningMedian)
//!
//! Both are thin wrappers over [`BinaryHeap`], which is natively a max-heap.
//! The min-ordered half stores its elements behind [`Reverse`].

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::Sample;

/// Adapter giving any [`Sample`] the [`Ord`] impl required by [`BinaryHeap`]
#[derive(Debug, Clone)]
struct Ordered<T>(T);

impl<T: Sample> PartialEq for Ordered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Sample> Eq for Ordered<T> {}

impl<T: Sample> PartialOrd for Ordered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Sample> Ord for Ordered<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_sample(&other.0)
    }
}

/// Minimal priority queue interface: only the extreme element is ever visible
pub(crate) trait Heap<T> {
    fn len(&self) -> usize;

    /// The extreme element, without removing it
    fn peek(&self) -> Option<&T>;

    fn push(&mut self, value: T);

    /// Removes and returns the extreme element
    fn pop(&mut self) -> Option<T>;

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap exposing its largest element
#[derive(Debug, Clone)]
pub(crate) struct MaxHeap<T> {
    heap: BinaryHeap<Ordered<T>>,
}

impl<T: Sample> MaxHeap<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl<T: Sample> Heap<T> for MaxHeap<T> {
    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Ordered(v)| v)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.heap.push(Ordered(value));
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Ordered(v)| v)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Heap exposing its smallest element
#[derive(Debug, Clone)]
pub(crate) struct MinHeap<T> {
    heap: BinaryHeap<Reverse<Ordered<T>>>,
}

impl<T: Sample> MinHeap<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl<T: Sample> Heap<T> for MinHeap<T> {
    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(Ordered(v))| v)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.heap.push(Reverse(Ordered(value)));
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(Ordered(v))| v)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
