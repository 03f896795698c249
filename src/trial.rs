//! Trial records: one evaluation within a study.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::TrialState;

/// A user-defined attribute value attached to a trial.
///
/// Attributes give custom targets something to read besides the objective
/// values, e.g. a validation accuracy logged next to the loss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttrValue {
    /// A floating-point attribute.
    Float(f64),
    /// An integer attribute.
    Int(i64),
    /// A string attribute.
    String(String),
    /// A boolean attribute.
    Bool(bool),
}

impl AttrValue {
    /// Returns the attribute as a float if it is numeric.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttrValue::Float(v) => Some(v),
            AttrValue::Int(v) => Some(v as f64),
            AttrValue::String(_) | AttrValue::Bool(_) => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// A trial represents a single evaluation of the objective function.
///
/// Trials are numbered in creation order starting at 0. A trial starts in
/// the `Running` state and is finished by its [`Study`](crate::Study) as
/// complete, pruned, or failed. Only complete trials carry objective values.
///
/// # Examples
///
/// ```
/// use optimization_history::{Direction, Study, TrialState};
///
/// let study = Study::new("demo", Direction::Minimize);
/// let trial = study.create_trial();
/// assert_eq!(trial.number(), 0);
/// assert_eq!(trial.state(), TrialState::Running);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trial {
    number: u64,
    state: TrialState,
    values: Vec<f64>,
    user_attrs: HashMap<String, AttrValue>,
    fail_reason: Option<String>,
}

impl Trial {
    pub(crate) fn new(number: u64) -> Self {
        Self {
            number,
            state: TrialState::Running,
            values: Vec::new(),
            user_attrs: HashMap::new(),
            fail_reason: None,
        }
    }

    /// Returns the position of this trial within its study.
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Returns the current state of this trial.
    #[must_use]
    pub fn state(&self) -> TrialState {
        self.state
    }

    /// Returns the objective values, empty unless the trial is complete.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the objective value of a complete single-objective trial.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match (self.state, self.values.as_slice()) {
            (TrialState::Complete, [v]) => Some(*v),
            _ => None,
        }
    }

    /// Returns the error message of a failed trial.
    #[must_use]
    pub fn fail_reason(&self) -> Option<&str> {
        self.fail_reason.as_deref()
    }

    /// Stores a user attribute on the trial.
    pub fn set_user_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.user_attrs.insert(key.into(), value.into());
    }

    /// Gets a user attribute by key.
    #[must_use]
    pub fn user_attr(&self, key: &str) -> Option<&AttrValue> {
        self.user_attrs.get(key)
    }

    /// Returns all user attributes.
    #[must_use]
    pub fn user_attrs(&self) -> &HashMap<String, AttrValue> {
        &self.user_attrs
    }

    pub(crate) fn set_complete(&mut self, values: Vec<f64>) {
        self.state = TrialState::Complete;
        self.values = values;
    }

    pub(crate) fn set_pruned(&mut self) {
        self.state = TrialState::Pruned;
        self.values.clear();
    }

    pub(crate) fn set_failed(&mut self, reason: String) {
        self.state = TrialState::Failed;
        self.values.clear();
        self.fail_reason = Some(reason);
    }
}
