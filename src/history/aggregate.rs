//! Cross-study alignment and per-position statistics.
//!
//! Studies are aligned by their position in the filtered history, not by
//! trial number: failed and pruned trials are already gone, so the `i`-th
//! eligible trial of every study lines up with the `i`-th eligible trial of
//! every other. Studies of unequal length stop contributing once exhausted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean and spread of the values contributed at one aligned position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregatedPoint {
    /// Position in the filtered history, starting at 0.
    pub position: u64,
    /// Arithmetic mean of the contributed values.
    pub mean: f64,
    /// Sample standard deviation, 0 with a single contributor.
    pub std: f64,
    /// Number of studies contributing at this position.
    pub n_studies: usize,
}

/// Group the values of all sequences by position.
///
/// Entry `i` holds the values of every sequence that has an element at `i`,
/// in input order. The result is as long as the longest sequence, so no
/// entry is empty.
///
/// # Examples
///
/// ```
/// use optimization_history::history::align;
///
/// let aligned = align(&[vec![1.0, 2.0, 3.0], vec![4.0]]);
/// assert_eq!(aligned, vec![vec![1.0, 4.0], vec![2.0], vec![3.0]]);
/// ```
#[must_use]
pub fn align(sequences: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let len = sequences.iter().map(Vec::len).max().unwrap_or(0);
    (0..len)
        .map(|i| sequences.iter().filter_map(|s| s.get(i).copied()).collect())
        .collect()
}

/// Return the mean and sample standard deviation of `values`.
///
/// The standard deviation uses the `n - 1` denominator and is 0 for a
/// single value. Returns `None` for an empty slice.
///
/// Both moments are accumulated with Welford's update, so identical values
/// give back that value and a spread of exactly 0, and large finite values
/// never overflow through an intermediate sum.
///
/// # Examples
///
/// ```
/// use optimization_history::history::mean_std;
///
/// assert_eq!(mean_std(&[]), None);
/// assert_eq!(mean_std(&[4.0]), Some((4.0, 0.0)));
/// assert_eq!(mean_std(&[0.1; 10]), Some((0.1, 0.0)));
/// let (mean, std) = mean_std(&[1.0, 3.0]).unwrap();
/// assert_eq!(mean, 2.0);
/// assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (mean, m2) = values
        .iter()
        .zip(1_u32..)
        .fold((0.0_f64, 0.0_f64), |(mean, m2), (&x, k)| {
            let delta = x - mean;
            let mean = mean + delta / f64::from(k);
            (mean, m2 + delta * (x - mean))
        });
    if values.len() == 1 {
        return Some((mean, 0.0));
    }
    let n = values.len() as f64;
    Some((mean, (m2 / (n - 1.0)).sqrt()))
}

/// Align `sequences` by position and summarize every position.
///
/// # Examples
///
/// ```
/// use optimization_history::history::aggregate;
///
/// let points = aggregate(&[vec![1.0, 2.0], vec![3.0]]);
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].mean, 2.0);
/// assert_eq!(points[1].n_studies, 1);
/// assert_eq!(points[1].std, 0.0);
/// ```
#[must_use]
pub fn aggregate(sequences: &[Vec<f64>]) -> Vec<AggregatedPoint> {
    align(sequences)
        .iter()
        .zip(0_u64..)
        .filter_map(|(values, position)| {
            mean_std(values).map(|(mean, std)| AggregatedPoint {
                position,
                mean,
                std,
                n_studies: values.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_empty_input() {
        assert!(align(&[]).is_empty());
        assert!(align(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn align_skips_exhausted_sequences() {
        let aligned = align(&[vec![1.0], vec![], vec![2.0, 3.0]]);
        assert_eq!(aligned, vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn mean_std_identical_values() {
        for value in [2.0, 0.1, 0.7, 0.3, -1e-300] {
            assert_eq!(mean_std(&[value; 10]), Some((value, 0.0)));
        }
    }

    #[test]
    fn mean_std_large_values_stay_finite() {
        assert_eq!(mean_std(&[1e308; 10]), Some((1e308, 0.0)));

        let (mean, _) = mean_std(&[1e308, 1.5e308, 1e308]).unwrap();
        assert!(mean.is_finite());
        assert!(mean > 1e308 && mean < 1.5e308);
    }

    #[test]
    fn mean_std_sample_denominator() {
        // Population std of this set is 2, sample std is sqrt(32/7).
        let (mean, std) = mean_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn aggregate_positions_are_contiguous() {
        let points = aggregate(&[vec![1.0, 2.0, 3.0], vec![3.0, 2.0]]);
        let positions: Vec<u64> = points.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(points[0].n_studies, 2);
        assert_eq!(points[2].n_studies, 1);
        assert_eq!(points[0].mean, 2.0);
        assert_eq!(points[1].std, 0.0);
    }
}
