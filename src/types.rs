//! Core types shared by the study model and the history engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    Maximize,
}

impl Direction {
    /// Return the better of two values under this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::Direction;
    ///
    /// assert_eq!(Direction::Minimize.best_of(1.0, 2.0), 1.0);
    /// assert_eq!(Direction::Maximize.best_of(1.0, 2.0), 2.0);
    /// ```
    #[must_use]
    pub fn best_of(self, a: f64, b: f64) -> f64 {
        match self {
            Direction::Minimize => a.min(b),
            Direction::Maximize => a.max(b),
        }
    }
}

/// The state of a trial in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrialState {
    /// The trial is currently running.
    Running,
    /// The trial completed successfully.
    Complete,
    /// The trial was stopped early by a pruner.
    Pruned,
    /// The trial failed with an error.
    Failed,
}
