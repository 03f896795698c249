#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::aggregate::{AggregatedPoint, aggregate};
use super::best::running_best;
use super::filter::StudyHistory;

/// Name of the running-best series.
pub(super) const BEST_VALUE: &str = "Best Value";

/// Which metric a [`Series`] shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeriesRole {
    /// The target value of each trial (or its cross-study mean).
    Values,
    /// The best target value so far (or its cross-study mean).
    BestValues,
}

/// A named sequence of `(x, y)` points handed to a renderer.
///
/// `x` is the trial number for per-study series and the aligned position
/// for cross-study series. Band series carry a symmetric `error` (one
/// standard deviation per point) around `y`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    /// Display name of the series.
    pub name: String,
    /// The metric this series shows.
    pub role: SeriesRole,
    /// Name of the study the series was built from, `None` for series
    /// aggregated across studies.
    pub study: Option<String>,
    /// Trial numbers or aligned positions.
    pub x: Vec<u64>,
    /// Values, one per `x`.
    pub y: Vec<f64>,
    /// Standard deviation per point, present on band series only.
    pub error: Option<Vec<f64>>,
}

impl Series {
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns `true` for a mean ± standard deviation band.
    #[must_use]
    pub fn is_band(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the `(x, y)` pairs of the series.
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Series for one study plotted on its own.
///
/// `suffix_study` appends " of <study>" to the names, which tells studies
/// apart when several are drawn on one chart.
pub(super) fn study_series(
    history: &StudyHistory,
    target_name: &str,
    with_best: bool,
    suffix_study: bool,
) -> Vec<Series> {
    if history.is_empty() {
        return Vec::new();
    }
    let label = |base: &str| {
        if suffix_study {
            format!("{base} of {}", history.name)
        } else {
            base.to_owned()
        }
    };

    let mut series = vec![Series {
        name: label(target_name),
        role: SeriesRole::Values,
        study: Some(history.name.clone()),
        x: history.numbers.clone(),
        y: history.values.clone(),
        error: None,
    }];
    if with_best {
        series.push(Series {
            name: label(BEST_VALUE),
            role: SeriesRole::BestValues,
            study: Some(history.name.clone()),
            x: history.numbers.clone(),
            y: running_best(&history.values, history.direction),
            error: None,
        });
    }
    series
}

/// Series aggregated across studies.
///
/// Without `with_best` only the mean of the values is returned. With it,
/// the order is: mean values, mean best values, values band, best band.
pub(super) fn band_series(
    histories: &[StudyHistory],
    target_name: &str,
    with_best: bool,
) -> Vec<Series> {
    let values: Vec<Vec<f64>> = histories.iter().map(|h| h.values.clone()).collect();
    let values = aggregate(&values);
    if values.is_empty() {
        return Vec::new();
    }

    if !with_best {
        return vec![mean_line(target_name, SeriesRole::Values, &values)];
    }

    let best: Vec<Vec<f64>> = histories
        .iter()
        .map(|h| running_best(&h.values, h.direction))
        .collect();
    let best = aggregate(&best);

    vec![
        mean_line(target_name, SeriesRole::Values, &values),
        mean_line(BEST_VALUE, SeriesRole::BestValues, &best),
        band(target_name, SeriesRole::Values, &values),
        band(BEST_VALUE, SeriesRole::BestValues, &best),
    ]
}

fn mean_line(name: &str, role: SeriesRole, points: &[AggregatedPoint]) -> Series {
    Series {
        name: name.to_owned(),
        role,
        study: None,
        x: points.iter().map(|p| p.position).collect(),
        y: points.iter().map(|p| p.mean).collect(),
        error: None,
    }
}

fn band(name: &str, role: SeriesRole, points: &[AggregatedPoint]) -> Series {
    Series {
        error: Some(points.iter().map(|p| p.std).collect()),
        ..mean_line(&format!("{name} ± std"), role, points)
    }
}
