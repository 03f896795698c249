use crate::types::Direction;

/// Return the best value seen so far at every position of `values`.
///
/// The cumulative minimum for [`Direction::Minimize`], the cumulative
/// maximum for [`Direction::Maximize`]. The output has the same length as
/// the input.
///
/// # Examples
///
/// ```
/// use optimization_history::Direction;
/// use optimization_history::history::running_best;
///
/// let values = [1.0, 2.0, 0.0];
/// assert_eq!(running_best(&values, Direction::Minimize), vec![1.0, 1.0, 0.0]);
/// assert_eq!(running_best(&values, Direction::Maximize), vec![1.0, 2.0, 2.0]);
/// ```
#[must_use]
pub fn running_best(values: &[f64], direction: Direction) -> Vec<f64> {
    values
        .iter()
        .scan(None, |best: &mut Option<f64>, &v| {
            let next = best.map_or(v, |b| direction.best_of(b, v));
            *best = Some(next);
            Some(next)
        })
        .collect()
}
