//! An example showcasing tracking the median of a custom data type

use std::cmp::Ordering;

use running_median::{RunningMedian, Sample};

/// Our custom data type: a classification enum
///
/// There is no sensible "average" of two classes, so this only implements [`Sample`].
/// That still gives access to [`RunningMedian::median_low`] and [`RunningMedian::median_high`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Sample for Class {
    fn cmp_sample(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the exact median is [`Class::Medium`]
const DATA: [Class; 15] = [
    Class::Medium,
    Class::Low,
    Class::High,
    Class::Medium,
    Class::Low,
    Class::Medium,
    Class::VeryHigh,
    Class::Medium,
    Class::High,
    Class::Low,
    Class::Medium,
    Class::VeryHigh,
    Class::High,
    Class::High,
    Class::Low,
];

fn main() {
    let median = RunningMedian::from(DATA);

    match (median.median_low(), median.median_high()) {
        (Ok(low), Ok(high)) if low == high => println!("The median is {low:?}"),
        (Ok(low), Ok(high)) => println!("The median lies between {low:?} and {high:?}"),
        _ => println!("No data"),
    }
}
