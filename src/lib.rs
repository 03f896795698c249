#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Optimization-history aggregation for Optuna-like studies.
//!
//! Turn the trial history of one or more studies into chartable series:
//! the objective value of every eligible trial, the running best value, and,
//! when several studies are combined, per-position mean and standard
//! deviation bands. Rendering is left to the caller; the output is plain
//! data ready for any plotting backend.
//!
//! # Getting Started
//!
//! ```
//! use optimization_history::prelude::*;
//!
//! let study = Study::new("quadratic", Direction::Minimize);
//! study.optimize(3, |trial| Ok::<_, Error>([1.0, 2.0, 0.0][trial.number() as usize]));
//!
//! let plot = optimization_history(&[study], &HistoryOptions::new()).unwrap();
//! assert_eq!(plot.series.len(), 2);
//! assert_eq!(plot.series[0].y, vec![1.0, 2.0, 0.0]);
//! assert_eq!(plot.series[1].y, vec![1.0, 1.0, 0.0]);
//! assert_eq!(plot.y_axis_title, "Objective Value");
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Study`] | A named, thread-safe record of trials with one direction per objective. |
//! | [`Trial`] | One evaluation: number, state, objective values, user attributes. |
//! | [`Target`] | What to plot per trial: the objective value or a custom function. |
//! | [`HistoryOptions`] | Target, target name, and error-bar mode for one call. |
//! | [`HistoryPlot`] | The resulting [`Series`], axis titles, and warnings. |
//!
//! # Output shapes
//!
//! | Input | Default target | Custom target |
//! |-------|----------------|---------------|
//! | One study | values, best values | values |
//! | Several studies | values and best values per study | values per study |
//! | `error_bar(true)` | mean values, mean best, values band, best band | mean values |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on trials, series, and plots | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

mod error;
pub mod history;
mod study;
mod trial;
mod types;

pub use error::{Error, Result, TrialPruned};
pub use history::{
    HistoryOptions, HistoryPlot, HistoryWarning, Series, SeriesRole, Target,
    optimization_history,
};
pub use study::Study;
pub use trial::{AttrValue, Trial};
pub use types::{Direction, TrialState};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use optimization_history::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result, TrialPruned};
    pub use crate::history::{
        HistoryOptions, HistoryPlot, HistoryWarning, Series, SeriesRole, Target,
        optimization_history,
    };
    pub use crate::study::Study;
    pub use crate::trial::{AttrValue, Trial};
    pub use crate::types::{Direction, TrialState};
}
