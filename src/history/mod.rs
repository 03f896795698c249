//! Optimization-history series for one or more studies.
//!
//! [`optimization_history`] runs a fixed pipeline over snapshots of the
//! given studies:
//!
//! 1. **Filter**: keep complete trials whose [`Target`] evaluates to a
//!    finite value ([`eligible_values`]).
//! 2. **Best so far**: for the default target, the running best under each
//!    study's direction ([`running_best`]).
//! 3. **Aggregate** (error-bar mode): align studies by filtered position and
//!    take the mean and sample standard deviation per position
//!    ([`align`], [`aggregate`]).
//! 4. **Assemble**: name the resulting [`Series`] and resolve the axis title.
//!
//! Custom targets never get best-value series or bands, since "best" has no
//! meaning for an arbitrary metric.
//!
//! # Examples
//!
//! Ten identical studies collapse into bands of zero width:
//!
//! ```
//! use optimization_history::prelude::*;
//!
//! let studies: Vec<Study> = (0..10)
//!     .map(|i| {
//!         let study = Study::new(format!("run-{i}"), Direction::Maximize);
//!         study.optimize(3, |t| Ok::<_, Error>([1.0, 2.0, 0.0][t.number() as usize]));
//!         study
//!     })
//!     .collect();
//!
//! let plot = optimization_history(&studies, &HistoryOptions::new().error_bar(true)).unwrap();
//! assert_eq!(plot.series.len(), 4);
//! assert_eq!(plot.series[1].y, vec![1.0, 2.0, 2.0]);
//! assert!(plot.series[3].error.as_ref().unwrap().iter().all(|&s| s == 0.0));
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::study::Study;

mod aggregate;
mod best;
mod filter;
mod options;
mod series;
mod target;

pub use aggregate::{AggregatedPoint, aggregate, align, mean_std};
pub use best::running_best;
pub use filter::eligible_values;
pub use options::HistoryOptions;
pub use series::{Series, SeriesRole};
pub use target::Target;

use filter::StudyHistory;

/// A non-fatal condition noticed while building a history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HistoryWarning {
    /// A custom target was given without a target name of its own, so the
    /// axis label does not say what is plotted.
    UnnamedCustomTarget,
}

impl fmt::Display for HistoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryWarning::UnnamedCustomTarget => write!(
                f,
                "a custom target is used without a target name; the axis label may be misleading"
            ),
        }
    }
}

/// The series of an optimization-history chart plus its labels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryPlot {
    /// Series in drawing order.
    pub series: Vec<Series>,
    /// Title of the x-axis.
    pub x_axis_title: String,
    /// Title of the y-axis, the resolved target name.
    pub y_axis_title: String,
    /// Warnings raised while building the history.
    pub warnings: Vec<HistoryWarning>,
}

impl HistoryPlot {
    /// Returns `true` if no study had an eligible trial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Return the first series with the given name.
    #[must_use]
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Build the optimization history of `studies`.
///
/// With a single study, series are named after the target ("Objective
/// Value" and "Best Value" by default). With several studies, each study
/// gets its own series suffixed with " of <study name>", unless
/// [`error_bar`](HistoryOptions::error_bar) is set, in which case all
/// studies are aggregated into mean lines followed by mean ± standard
/// deviation bands.
///
/// Studies with no eligible trials contribute nothing; if none has any,
/// the plot has no series.
///
/// # Errors
///
/// Returns `Error::AmbiguousTarget` if the default target is used and any
/// study has more than one objective.
///
/// # Examples
///
/// ```
/// use optimization_history::prelude::*;
///
/// let study = Study::new("demo", Direction::Minimize);
/// study.optimize(3, |t| Ok::<_, Error>([1.0, 2.0, 0.0][t.number() as usize]));
///
/// let options = HistoryOptions::new().target(Target::custom(|t| t.number() as f64));
/// let plot = optimization_history(&[study], &options).unwrap();
/// assert_eq!(plot.series.len(), 1);
/// assert_eq!(plot.series[0].y, vec![0.0, 1.0, 2.0]);
/// assert_eq!(plot.warnings, vec![HistoryWarning::UnnamedCustomTarget]);
/// ```
pub fn optimization_history(
    studies: &[Study],
    options: &HistoryOptions,
) -> crate::Result<HistoryPlot> {
    let target = &options.target;
    for study in studies {
        target.check(study)?;
    }

    let mut warnings = Vec::new();
    if options.custom_target_unnamed() {
        trace_warn!("{}", HistoryWarning::UnnamedCustomTarget);
        warnings.push(HistoryWarning::UnnamedCustomTarget);
    }

    let target_name = options.resolved_target_name();
    let with_best = !target.is_custom();
    let histories: Vec<StudyHistory> = studies
        .iter()
        .map(|study| StudyHistory::collect(study, target))
        .collect();

    let series = if options.error_bar {
        series::band_series(&histories, target_name, with_best)
    } else {
        let suffix_study = histories.len() > 1;
        histories
            .iter()
            .flat_map(|h| series::study_series(h, target_name, with_best, suffix_study))
            .collect()
    };

    trace_info!(
        n_studies = studies.len(),
        n_series = series.len(),
        error_bar = options.error_bar,
        "optimization history built"
    );

    Ok(HistoryPlot {
        series,
        x_axis_title: "Trial".to_owned(),
        y_axis_title: target_name.to_owned(),
        warnings,
    })
}

impl Study {
    /// Build the optimization history of this study alone.
    ///
    /// Shorthand for [`optimization_history`] with a one-element slice.
    ///
    /// # Errors
    ///
    /// Returns `Error::AmbiguousTarget` if the default target is used on a
    /// multi-objective study.
    pub fn optimization_history(&self, options: &HistoryOptions) -> crate::Result<HistoryPlot> {
        optimization_history(core::slice::from_ref(self), options)
    }
}
