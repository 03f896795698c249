#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the default target is requested on a study with more
    /// than one objective, so there is no single value to plot.
    #[error(
        "ambiguous target: study has {n_objectives} objectives; pass a custom target to select one"
    )]
    AmbiguousTarget {
        /// The number of objective directions of the offending study.
        n_objectives: usize,
    },

    /// Returned when a custom target function fails for a trial.
    #[error("target evaluation failed: {0}")]
    TargetEvaluation(String),

    /// Returned when a target evaluates to NaN or an infinity.
    #[error("target value of trial {number} is not finite")]
    NonFiniteTarget {
        /// The number of the trial.
        number: u64,
    },

    /// Returned when the default target is evaluated on a trial that has no
    /// single objective value.
    #[error("trial {number} has no single objective value")]
    MissingValue {
        /// The number of the trial.
        number: u64,
    },

    /// Returned when a multi-objective result has the wrong number of values.
    #[error("objective dimension mismatch: expected {expected} values, got {got}")]
    ObjectiveDimensionMismatch {
        /// The expected number of objective values.
        expected: usize,
        /// The actual number of objective values returned.
        got: usize,
    },

    /// Returned when a trial is pruned (stopped early by the objective function).
    #[error("trial was pruned")]
    TrialPruned,

    /// Returned when a study is created without any objective direction.
    #[error("a study needs at least one objective direction")]
    InvalidDirections,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Convenience type for signalling a pruned trial from an objective function.
///
/// Implements `Into<Error>` so it can be used with `?` in objectives that
/// return `Result<f64, Error>`.
///
/// # Examples
///
/// ```
/// use optimization_history::{Error, TrialPruned};
///
/// fn objective_that_prunes() -> Result<f64, Error> {
///     Err(TrialPruned)?
/// }
/// ```
#[derive(Debug)]
pub struct TrialPruned;

impl core::fmt::Display for TrialPruned {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "trial was pruned")
    }
}

impl From<TrialPruned> for Error {
    fn from(_: TrialPruned) -> Self {
        Error::TrialPruned
    }
}
