//! A more fully-fledged example, showcasing logging, error handling, and the other methods on [`RunningMedian`]
//!
//! Run with `RUST_LOG=trace` to see each rebalance between the two halves.

use running_median::{MedianError, RunningMedian};

/// Some sample data to calculate the median for
///
/// The NaN is there on purpose, to show the warning it produces
const DATA: [f64; 8] = [18.6, 83.1, 21.5, f64::NAN, 63.4, 64.1, 4.6, 92.7];

fn main() -> Result<(), MedianError> {
    env_logger::init();

    // Preallocate for the known stream length
    let mut median = RunningMedian::<f64>::with_capacity(DATA.len());

    // Querying before any data is an error, not a silent zero
    match median.median() {
        Ok(m) => println!("Unexpected median: {m}"),
        Err(e) => println!("Nothing inserted yet: {e}"),
    }

    for data_point in DATA {
        median.insert(data_point);

        println!(
            "Processed {} points: median {}, middle pair [{}, {}]",
            median.len(),
            median.median()?,
            median.median_low()?,
            median.median_high()?,
        );
    }

    // Start over, keeping the allocation
    median.clear();
    println!("Cleared: empty = {}", median.is_empty());

    // Containers can also be built straight from an iterator
    let median: RunningMedian<u32> = (1..=10).collect();
    println!("Median of 1..=10 is {}", median.median()?);

    // 64-bit integers report an exact median, since f64 can't hold all of them
    let big = (1u64 << 53) + 1;
    let median = RunningMedian::from([big]);
    let exact = median.median()?;
    println!(
        "Median of [{big}] is {} (as f64 it would round to {})",
        exact.floor(),
        exact.to_f64()
    );

    Ok(())
}
