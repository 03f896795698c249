use crate::trial::Trial;

use super::{Study, is_trial_pruned};

impl Study {
    /// Run `n_trials` sequential evaluations of a single-objective function.
    ///
    /// Errors returned by the objective never stop the loop: a
    /// [`TrialPruned`](crate::TrialPruned) error records the trial as pruned,
    /// any other error records it as failed with the error message. On a
    /// multi-objective study every successful evaluation is recorded as
    /// failed, because one value cannot fill several objectives.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::{Direction, Study, TrialState};
    ///
    /// let study = Study::new("demo", Direction::Minimize);
    /// study.optimize(3, |trial| {
    ///     if trial.number() == 1 {
    ///         return Err("diverged");
    ///     }
    ///     Ok(trial.number() as f64)
    /// });
    ///
    /// assert_eq!(study.n_trials(), 3);
    /// assert_eq!(study.n_trials_with_state(TrialState::Failed), 1);
    /// ```
    pub fn optimize<F, E>(&self, n_trials: usize, mut objective: F)
    where
        F: FnMut(&mut Trial) -> Result<f64, E>,
        E: ToString + 'static,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("optimize", study = %self.name, n_trials).entered();

        for _ in 0..n_trials {
            let mut trial = self.create_trial();
            let outcome = objective(&mut trial);
            self.finish(trial, outcome.map(|v| vec![v]));
        }
    }

    /// Run `n_trials` sequential evaluations of a multi-objective function.
    ///
    /// Behaves like [`optimize`](Self::optimize); a result whose length
    /// differs from the number of objectives is recorded as a failed trial.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::{Direction, Study};
    ///
    /// let study =
    ///     Study::multi_objective("mo", vec![Direction::Minimize, Direction::Minimize]).unwrap();
    /// study.optimize_multi(2, |trial| {
    ///     let x = trial.number() as f64;
    ///     Ok::<_, optimization_history::Error>(vec![x, 1.0 - x])
    /// });
    /// assert_eq!(study.trials()[1].values(), &[1.0, 0.0]);
    /// ```
    pub fn optimize_multi<F, E>(&self, n_trials: usize, mut objective: F)
    where
        F: FnMut(&mut Trial) -> Result<Vec<f64>, E>,
        E: ToString + 'static,
    {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::info_span!("optimize_multi", study = %self.name, n_trials).entered();

        for _ in 0..n_trials {
            let mut trial = self.create_trial();
            let outcome = objective(&mut trial);
            self.finish(trial, outcome);
        }
    }

    fn finish<E: ToString + 'static>(&self, trial: Trial, outcome: Result<Vec<f64>, E>) {
        match outcome {
            Ok(values) => {
                if let Err(_e) = self.complete_trial_multi(trial, values) {
                    trace_debug!(error = %_e, "objective returned a value of the wrong shape");
                }
            }
            Err(e) if is_trial_pruned(&e) => self.prune_trial(trial),
            Err(e) => self.fail_trial(trial, e.to_string()),
        }
    }

    /// Record a trial as complete with a single objective value.
    ///
    /// # Errors
    ///
    /// Returns `Error::ObjectiveDimensionMismatch` if the study has more than
    /// one objective. The trial is then recorded as failed.
    pub fn complete_trial(&self, trial: Trial, value: f64) -> crate::Result<()> {
        self.complete_trial_multi(trial, vec![value])
    }

    /// Record a trial as complete with one value per objective.
    ///
    /// # Errors
    ///
    /// Returns `Error::ObjectiveDimensionMismatch` if `values` does not have
    /// one entry per objective. The trial is then recorded as failed.
    pub fn complete_trial_multi(&self, mut trial: Trial, values: Vec<f64>) -> crate::Result<()> {
        let expected = self.directions.len();
        if values.len() != expected {
            let err = crate::Error::ObjectiveDimensionMismatch {
                expected,
                got: values.len(),
            };
            self.fail_trial(trial, err.to_string());
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        let number = trial.number();
        trial.set_complete(values);
        self.push(trial);
        trace_info!(number, "trial completed");
        Ok(())
    }

    /// Record a trial as failed with the given reason.
    pub fn fail_trial(&self, mut trial: Trial, reason: impl Into<String>) {
        #[cfg(feature = "tracing")]
        let number = trial.number();
        trial.set_failed(reason.into());
        self.push(trial);
        trace_debug!(number, "trial failed");
    }

    /// Record a trial as pruned.
    pub fn prune_trial(&self, mut trial: Trial) {
        #[cfg(feature = "tracing")]
        let number = trial.number();
        trial.set_pruned();
        self.push(trial);
        trace_info!(number, "trial pruned");
    }
}
