//! Study implementation: a named, thread-safe record of trials.

use core::any::Any;
use core::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::trial::Trial;
use crate::types::{Direction, TrialState};

mod optimize;

/// Counter backing the names of studies created with [`Study::unnamed`].
static UNNAMED_STUDIES: AtomicU64 = AtomicU64::new(0);

/// A study collects the trials of one optimization run.
///
/// A study has an identifying name and one direction per objective. Trials
/// are numbered in creation order starting at 0 and kept sorted by number,
/// whatever order they finish in. The trial buffer sits behind a
/// read-write lock, so a study can be shared across threads while trials are
/// being recorded; readers take a snapshot with [`trials()`](Self::trials).
///
/// # Examples
///
/// ```
/// use optimization_history::{Direction, Study};
///
/// let study = Study::new("tuning", Direction::Minimize);
/// assert_eq!(study.name(), "tuning");
/// assert_eq!(study.direction(), Direction::Minimize);
/// assert!(!study.is_multi_objective());
/// ```
pub struct Study {
    /// The identifying name of the study.
    name: String,
    /// One direction per objective; never empty.
    directions: Vec<Direction>,
    /// Finished trials, sorted by trial number.
    trials: RwLock<Vec<Trial>>,
    /// The number handed to the next created trial.
    next_number: AtomicU64,
}

impl Study {
    /// Create a single-objective study.
    #[must_use]
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            directions: vec![direction],
            trials: RwLock::new(Vec::new()),
            next_number: AtomicU64::new(0),
        }
    }

    /// Create a single-objective study with a generated name.
    ///
    /// Names are `study-0`, `study-1`, ... in creation order across the
    /// process.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::{Direction, Study};
    ///
    /// let a = Study::unnamed(Direction::Minimize);
    /// let b = Study::unnamed(Direction::Minimize);
    /// assert!(a.name().starts_with("study-"));
    /// assert_ne!(a.name(), b.name());
    /// ```
    #[must_use]
    pub fn unnamed(direction: Direction) -> Self {
        let n = UNNAMED_STUDIES.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("study-{n}"), direction)
    }

    /// Create a study with one direction per objective.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDirections` if `directions` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::{Direction, Study};
    ///
    /// let study =
    ///     Study::multi_objective("pareto", vec![Direction::Minimize, Direction::Maximize]).unwrap();
    /// assert!(study.is_multi_objective());
    /// assert!(Study::multi_objective("empty", vec![]).is_err());
    /// ```
    pub fn multi_objective(
        name: impl Into<String>,
        directions: Vec<Direction>,
    ) -> crate::Result<Self> {
        if directions.is_empty() {
            return Err(crate::Error::InvalidDirections);
        }
        Ok(Self {
            name: name.into(),
            directions,
            trials: RwLock::new(Vec::new()),
            next_number: AtomicU64::new(0),
        })
    }

    /// Return the identifying name of the study.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the direction of the first objective.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.directions[0]
    }

    /// Return one direction per objective.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Returns `true` if the study has more than one objective.
    #[must_use]
    pub fn is_multi_objective(&self) -> bool {
        self.directions.len() > 1
    }

    /// Return a snapshot of all finished trials, sorted by trial number.
    #[must_use]
    pub fn trials(&self) -> Vec<Trial> {
        self.trials.read().clone()
    }

    /// Return the number of finished trials in any state.
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.trials.read().len()
    }

    /// Return the number of finished trials in the given state.
    #[must_use]
    pub fn n_trials_with_state(&self, state: TrialState) -> usize {
        self.trials.read().iter().filter(|t| t.state() == state).count()
    }

    /// Create a new running trial with the next trial number.
    ///
    /// The trial is not part of the study until it is finished with
    /// [`complete_trial`](Self::complete_trial),
    /// [`fail_trial`](Self::fail_trial), or
    /// [`prune_trial`](Self::prune_trial).
    #[must_use]
    pub fn create_trial(&self) -> Trial {
        Trial::new(self.next_number.fetch_add(1, Ordering::SeqCst))
    }

    /// Insert a finished trial, keeping the buffer sorted by number.
    fn push(&self, trial: Trial) {
        let mut trials = self.trials.write();
        let at = trials.partition_point(|t| t.number() < trial.number());
        trials.insert(at, trial);
    }
}

impl core::fmt::Debug for Study {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Study")
            .field("name", &self.name)
            .field("directions", &self.directions)
            .field("n_trials", &self.n_trials())
            .finish_non_exhaustive()
    }
}

pub(super) fn is_trial_pruned<E: 'static>(e: &E) -> bool {
    let any: &dyn Any = e;
    if let Some(err) = any.downcast_ref::<crate::Error>() {
        matches!(err, crate::Error::TrialPruned)
    } else {
        any.downcast_ref::<crate::error::TrialPruned>().is_some()
    }
}
