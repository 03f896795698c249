use crate::study::Study;
use crate::trial::Trial;
use crate::types::{Direction, TrialState};

use super::target::Target;

/// The eligible part of one study's history.
pub(super) struct StudyHistory {
    pub(super) name: String,
    pub(super) direction: Direction,
    pub(super) numbers: Vec<u64>,
    pub(super) values: Vec<f64>,
}

impl StudyHistory {
    pub(super) fn collect(study: &Study, target: &Target) -> Self {
        let (numbers, values) = select(&study.trials(), target).into_iter().unzip();
        Self {
            name: study.name().to_owned(),
            direction: study.direction(),
            numbers,
            values,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Return `(trial number, target value)` for every eligible trial of `study`.
///
/// A trial is eligible when it is complete and the target evaluates to a
/// finite value. Other trials are skipped without error. The result follows
/// trial-number order.
///
/// # Errors
///
/// Returns `Error::AmbiguousTarget` for the default target on a
/// multi-objective study.
///
/// # Examples
///
/// ```
/// use optimization_history::history::eligible_values;
/// use optimization_history::{Direction, Study, Target};
///
/// let study = Study::new("demo", Direction::Minimize);
/// study.optimize(3, |trial| match trial.number() {
///     1 => Err("boom"),
///     n => Ok(n as f64 * 10.0),
/// });
///
/// let values = eligible_values(&study, &Target::Default).unwrap();
/// assert_eq!(values, vec![(0, 0.0), (2, 20.0)]);
/// ```
pub fn eligible_values(study: &Study, target: &Target) -> crate::Result<Vec<(u64, f64)>> {
    target.check(study)?;
    Ok(select(&study.trials(), target))
}

fn select(trials: &[Trial], target: &Target) -> Vec<(u64, f64)> {
    trials
        .iter()
        .filter(|t| t.state() == TrialState::Complete)
        .filter_map(|t| match target.evaluate(t) {
            Ok(value) => Some((t.number(), value)),
            Err(_e) => {
                trace_debug!(number = t.number(), error = %_e, "trial excluded from history");
                None
            }
        })
        .collect()
}
