#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use std::cmp::Ordering;

mod heap;
mod sample;

use heap::{Heap, MaxHeap, MinHeap};
pub use sample::{Midpoint, Sample, WideMedian};

/// Errors returned when querying a [`RunningMedian`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MedianError {
    /// The median was requested before any sample was inserted
    #[error("median of an empty container is undefined")]
    EmptyContainer,
}

/// Exact median of every sample inserted so far
///
/// Samples are split between two heaps: a max-heap holding the lower half, and a min-heap holding the upper half.
/// Each call to [`Self::insert`] routes the new sample to one half and, if needed, moves a single element
/// across so the halves never differ in size by more than one.
/// The median is then read off the tops of the two heaps, so [`Self::median`] never scans the data.
///
/// | Operation        | Cost       |
/// |------------------|------------|
/// | [`Self::insert`] | O(log n)   |
/// | [`Self::median`] | O(1)       |
/// | memory           | O(n)       |
///
/// Mutation takes `&mut self`. To share a container between threads, put the whole thing behind one lock:
/// the two halves must always be updated together.
#[derive(Debug, Clone)]
pub struct RunningMedian<T> {
    /// Smaller half of the samples; its top is the largest of them
    lower: MaxHeap<T>,
    /// Larger half of the samples; its top is the smallest of them
    upper: MinHeap<T>,
}

impl<T: Sample> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> RunningMedian<T> {
    /// Constructs an empty [`Self`]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs an empty [`Self`] with room for at least `capacity` samples before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        let half = capacity / 2 + 1;
        Self {
            lower: MaxHeap::with_capacity(half),
            upper: MinHeap::with_capacity(half),
        }
    }

    /// Total number of samples inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no samples have been inserted yet
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Removes every sample, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }

    /// Adds a new sample from the stream, updating the running median
    ///
    /// Float NaNs are accepted and ordered with [`f64::total_cmp`], which places them past the infinities.
    /// A warning is emitted when one is seen.
    pub fn insert(&mut self, value: T) {
        if value.is_nan() {
            #[cfg(feature = "log")]
            log::warn!("Got NaN sample. It will be ordered past every other value and skew the median.");

            #[cfg(not(feature = "log"))]
            eprintln!("Got NaN sample. It will be ordered past every other value and skew the median.");
        }

        // The first sample lands in the lower half, and so does anything strictly below its top.
        // Equal values go up, which keeps the lower half's top stable under repeats.
        let into_lower = match self.lower.peek() {
            Some(top) => value.cmp_sample(top) == Ordering::Less,
            None => true,
        };

        if into_lower {
            self.lower.push(value);
        } else {
            self.upper.push(value);
        }

        self.rebalance();
    }

    /// Restores `|lower - upper| <= 1`
    ///
    /// Every insert grows one half by exactly one, so a single transfer is always enough.
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            transfer(&mut self.lower, &mut self.upper);

            #[cfg(feature = "log")]
            log::trace!(
                "Moved lower top to upper half ({} / {})",
                self.lower.len(),
                self.upper.len()
            );
        } else if self.upper.len() > self.lower.len() + 1 {
            transfer(&mut self.upper, &mut self.lower);

            #[cfg(feature = "log")]
            log::trace!(
                "Moved upper top to lower half ({} / {})",
                self.lower.len(),
                self.upper.len()
            );
        }
    }

    /// Gets the median of all samples inserted so far
    ///
    /// For an odd count this is the middle sample. For an even count it is the mean of the two middle samples,
    /// as computed by [`Midpoint::average`].
    ///
    /// Returns [`MedianError::EmptyContainer`] if nothing has been inserted.
    ///
    /// ```
    /// use running_median::RunningMedian;
    ///
    /// let mut median = RunningMedian::new();
    /// median.insert(5);
    /// assert_eq!(median.median(), Ok(5.));
    /// median.insert(60);
    /// assert_eq!(median.median(), Ok(32.5));
    /// ```
    pub fn median(&self) -> Result<T::Median, MedianError>
    where
        T: Midpoint,
    {
        let median = match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => self.lower.peek().map(Midpoint::to_median),
            Ordering::Less => self.upper.peek().map(Midpoint::to_median),
            Ordering::Equal => self
                .lower
                .peek()
                .zip(self.upper.peek())
                .map(|(low, high)| low.average(high)),
        };

        median.ok_or(MedianError::EmptyContainer)
    }

    /// Gets the lower of the two middle samples
    ///
    /// Equal to [`Self::median_high`] when the count is odd.
    /// Unlike [`Self::median`], this works for any [`Sample`], including types with no meaningful midpoint.
    pub fn median_low(&self) -> Result<&T, MedianError> {
        let low = if self.upper.len() > self.lower.len() {
            self.upper.peek()
        } else {
            self.lower.peek()
        };

        low.ok_or(MedianError::EmptyContainer)
    }

    /// Gets the higher of the two middle samples
    ///
    /// Equal to [`Self::median_low`] when the count is odd.
    pub fn median_high(&self) -> Result<&T, MedianError> {
        let high = if self.lower.len() > self.upper.len() {
            self.lower.peek()
        } else {
            self.upper.peek()
        };

        high.ok_or(MedianError::EmptyContainer)
    }
}

fn transfer<T>(from: &mut impl Heap<T>, to: &mut impl Heap<T>) {
    if let Some(value) = from.pop() {
        to.push(value);
    }
}

impl<T: Sample> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Sample> FromIterator<T> for RunningMedian<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut median = Self::new();
        median.extend(iter);
        median
    }
}

impl<T: Sample, const N: usize> From<[T; N]> for RunningMedian<T> {
    fn from(array: [T; N]) -> Self {
        let mut median = Self::with_capacity(N);
        median.extend(array);
        median
    }
}
