//! Compares the running median against sorting every prefix of a random stream

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use running_median::{Midpoint, RunningMedian};

fn sorted_median<T: Midpoint + Clone>(seen: &[T]) -> T::Median {
    let mut sorted = seen.to_vec();
    sorted.sort_by(T::cmp_sample);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid].to_median()
    } else {
        sorted[mid - 1].average(&sorted[mid])
    }
}

fn check_stream<T>(values: &[T])
where
    T: Midpoint + Clone + std::fmt::Debug,
    T::Median: PartialEq + std::fmt::Debug,
{
    let mut median = RunningMedian::new();

    for (i, v) in values.iter().enumerate() {
        median.insert(v.clone());
        assert_eq!(median.len(), i + 1);
        assert_eq!(
            median.median(),
            Ok(sorted_median(&values[..=i])),
            "after {} samples",
            i + 1
        );
    }
}

#[test]
fn uniform_ints() {
    let mut rng = StdRng::seed_from_u64(11);
    let values: Vec<i64> = (0..1_000).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();
    check_stream(&values);
}

#[test]
fn narrow_ints_with_many_duplicates() {
    let mut rng = StdRng::seed_from_u64(12);
    let values: Vec<u8> = (0..1_000).map(|_| rng.gen_range(0..4)).collect();
    check_stream(&values);
}

#[test]
fn uniform_floats() {
    let mut rng = StdRng::seed_from_u64(13);
    let values: Vec<f64> = (0..1_000).map(|_| rng.gen::<f64>() * 200. - 100.).collect();
    check_stream(&values);
}

#[test]
fn ascending_and_descending() {
    let ascending: Vec<i32> = (0..500).collect();
    check_stream(&ascending);

    let descending: Vec<i32> = (0..500).rev().collect();
    check_stream(&descending);
}

#[test]
fn order_does_not_change_final_median() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut values: Vec<u32> = (0..999).map(|_| rng.gen_range(0..10_000)).collect();
    let expected = sorted_median(&values);

    for _ in 0..5 {
        values.shuffle(&mut rng);
        let median: RunningMedian<u32> = values.iter().copied().collect();
        assert_eq!(median.len(), values.len());
        assert_eq!(median.median(), Ok(expected));
    }
}

#[test]
fn low_and_high_bracket_the_median() {
    let mut rng = StdRng::seed_from_u64(15);
    let mut median = RunningMedian::new();

    for _ in 0..500 {
        median.insert(rng.gen_range(0u16..1_000));

        let low = *median.median_low().unwrap();
        let high = *median.median_high().unwrap();
        assert!(low <= high);
        if median.len() % 2 == 1 {
            assert_eq!(low, high);
        }
        assert_eq!(median.median(), Ok(low.average(&high)));
    }
}
