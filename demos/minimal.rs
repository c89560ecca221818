//! A basic example showing minimal usage
//!
//! We construct a [`RunningMedian`], feed it data, and read out the median after each point

use running_median::RunningMedian;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the final median is 44.5
const DATA: [f32; 15] = [
    18.6, 83.1, 21.5, 21.4, 63.4, 64.1, 4.6, 92.7, 31.1, 94.8, 2.4, 44.5, 70.0, 17.1, 61.0,
];

fn main() {
    let mut median = RunningMedian::new();

    for data_point in DATA {
        median.insert(data_point);

        // There is at least one point in, so this can't fail
        if let Ok(m) = median.median() {
            println!("Median after {:>2} points: {m}", median.len());
        }
    }
}
