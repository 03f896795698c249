//! What gets plotted for each trial.

use std::sync::Arc;

use crate::study::Study;
use crate::trial::Trial;

type TargetFn = dyn Fn(&Trial) -> crate::Result<f64> + Send + Sync;

/// The scalar extracted from each trial for plotting.
///
/// [`Target::Default`] plots the trial's objective value and is the only
/// target with a notion of "best": running-best series and error bands are
/// produced for it alone. A [`Target::Custom`] function can compute any
/// metric, including one objective of a multi-objective study.
///
/// # Examples
///
/// ```
/// use optimization_history::{AttrValue, Target};
///
/// let by_number = Target::custom(|t| t.number() as f64);
/// let accuracy = Target::try_custom(|t| {
///     t.user_attr("accuracy")
///         .and_then(AttrValue::as_f64)
///         .ok_or("accuracy was not logged")
/// });
/// assert!(by_number.is_custom() && accuracy.is_custom());
/// ```
#[derive(Clone, Default)]
pub enum Target {
    /// The single objective value of the trial.
    #[default]
    Default,
    /// A caller-supplied function of the trial.
    Custom(Arc<TargetFn>),
}

impl Target {
    /// Wrap an infallible function as a custom target.
    #[must_use]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Trial) -> f64 + Send + Sync + 'static,
    {
        Target::Custom(Arc::new(move |trial: &Trial| -> crate::Result<f64> {
            Ok(f(trial))
        }))
    }

    /// Wrap a fallible function as a custom target.
    ///
    /// Trials for which `f` returns an error are left out of the history.
    #[must_use]
    pub fn try_custom<F, E>(f: F) -> Self
    where
        F: Fn(&Trial) -> Result<f64, E> + Send + Sync + 'static,
        E: ToString,
    {
        Target::Custom(Arc::new(move |trial: &Trial| -> crate::Result<f64> {
            f(trial).map_err(|e| crate::Error::TargetEvaluation(e.to_string()))
        }))
    }

    /// Returns `true` for a caller-supplied target.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Target::Custom(_))
    }

    /// Check that this target is defined for `study`.
    ///
    /// # Errors
    ///
    /// Returns `Error::AmbiguousTarget` for the default target on a
    /// multi-objective study.
    pub fn check(&self, study: &Study) -> crate::Result<()> {
        match self {
            Target::Default if study.is_multi_objective() => Err(crate::Error::AmbiguousTarget {
                n_objectives: study.directions().len(),
            }),
            Target::Default | Target::Custom(_) => Ok(()),
        }
    }

    /// Evaluate the target on one trial.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingValue` if the default target meets a trial
    /// without a single objective value, `Error::NonFiniteTarget` if the
    /// result is NaN or infinite, and whatever a custom function returns.
    pub fn evaluate(&self, trial: &Trial) -> crate::Result<f64> {
        let value = match self {
            Target::Default => trial.value().ok_or(crate::Error::MissingValue {
                number: trial.number(),
            })?,
            Target::Custom(f) => f(trial)?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(crate::Error::NonFiniteTarget {
                number: trial.number(),
            })
        }
    }
}

impl core::fmt::Debug for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Target::Default => f.write_str("Default"),
            Target::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
