//! Element traits for values fed into a [`RunningMedian`](crate::RunningMedian)

use std::cmp::Ordering;

/// A value that can be placed in a running median
///
/// Implementors must provide a strict total order through [`Self::cmp_sample`].
/// An inconsistent ordering will not cause memory unsafety, but the reported medians are then unspecified.
///
/// Integers, floats, [`char`], [`bool`] and [`String`] are supported out of the box.
/// Floats are ordered with [`f64::total_cmp`], so NaN is accepted and sorts at the extremes.
pub trait Sample {
    /// Total order over samples
    fn cmp_sample(&self, other: &Self) -> Ordering;

    /// Whether this sample is a NaN
    ///
    /// Only floats override this. It is used to warn about NaN samples, which are accepted but rarely intended.
    fn is_nan(&self) -> bool {
        false
    }
}

/// A [`Sample`] with a defined midpoint, needed for the mean of the two middle values on even counts
///
/// Types without a sensible midpoint (enums, strings) can still use
/// [`RunningMedian::median_low`](crate::RunningMedian::median_low) and
/// [`RunningMedian::median_high`](crate::RunningMedian::median_high).
pub trait Midpoint: Sample {
    /// Type the median is reported in
    ///
    /// Integers up to 32 bits report in [`f64`], which holds every mean of two of them exactly.
    /// Wider integers report in [`WideMedian`], since [`f64`] cannot hold them past 2^53.
    type Median;

    /// Arithmetic mean of `self` and `other`
    fn average(&self, other: &Self) -> Self::Median;

    /// Converts a single middle value into the median type
    fn to_median(&self) -> Self::Median;
}

macro_rules! impl_ord_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn cmp_sample(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_int_midpoint {
    ($($t:ty),*) => {
        $(
            impl_ord_sample!($t);

            impl Midpoint for $t {
                type Median = f64;

                #[inline]
                fn average(&self, other: &Self) -> f64 {
                    // Both sides and their sum fit in f64's mantissa, so this is exact
                    (*self as f64 + *other as f64) / 2.
                }

                #[inline]
                fn to_median(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

/// Exact median of two wide integers: `floor`, plus one half when [`Self::is_half`] is set
///
/// Reported by [`RunningMedian::median`](crate::RunningMedian::median) for 64 and 128 bit integers,
/// whose values cannot all be represented as [`f64`].
///
/// ```
/// use running_median::RunningMedian;
///
/// let v = (1i64 << 53) + 1;
/// let median = RunningMedian::from([v]).median().unwrap();
/// assert_eq!(median.floor(), v);
/// assert!(!median.is_half());
///
/// let median = RunningMedian::from([-3i64, -2]).median().unwrap();
/// assert_eq!(median.to_f64(), -2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideMedian<T> {
    floor: T,
    half: bool,
}

impl<T: Copy> WideMedian<T> {
    /// Largest integer not above the median
    pub fn floor(&self) -> T {
        self.floor
    }

    /// Whether the median lies halfway between [`Self::floor`] and the next integer
    pub fn is_half(&self) -> bool {
        self.half
    }
}

macro_rules! impl_wide_midpoint {
    ($($t:ty),*) => {
        $(
            impl_ord_sample!($t);

            impl Midpoint for $t {
                type Median = WideMedian<$t>;

                #[inline]
                fn average(&self, other: &Self) -> WideMedian<$t> {
                    // a + b == 2 * (a & b) + (a ^ b), with the shift rounding toward negative infinity
                    WideMedian {
                        floor: (self & other) + ((self ^ other) >> 1),
                        half: (self ^ other) & 1 == 1,
                    }
                }

                #[inline]
                fn to_median(&self) -> WideMedian<$t> {
                    WideMedian {
                        floor: *self,
                        half: false,
                    }
                }
            }

            impl WideMedian<$t> {
                /// Nearest [`f64`] to the median
                pub fn to_f64(&self) -> f64 {
                    let floor = self.floor as f64;
                    if self.half {
                        floor + 0.5
                    } else {
                        floor
                    }
                }
            }

            impl From<WideMedian<$t>> for f64 {
                fn from(median: WideMedian<$t>) -> f64 {
                    median.to_f64()
                }
            }
        )*
    };
}

macro_rules! impl_float_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn cmp_sample(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn is_nan(&self) -> bool {
                    <$t>::is_nan(*self)
                }
            }

            impl Midpoint for $t {
                type Median = $t;

                #[inline]
                fn average(&self, other: &Self) -> $t {
                    let sum = *self + *other;
                    if sum.is_finite() {
                        sum / 2.
                    } else {
                        // Sum overflowed, so halve each side first
                        *self / 2. + *other / 2.
                    }
                }

                #[inline]
                fn to_median(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_int_midpoint!(i8, i16, i32, u8, u16, u32);
impl_wide_midpoint!(i64, i128, isize, u64, u128, usize);
impl_float_sample!(f32, f64);
impl_ord_sample!(char, bool, String);
