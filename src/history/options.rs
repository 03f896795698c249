use super::target::Target;

/// Axis and series name used for the default target.
pub(super) const OBJECTIVE_VALUE: &str = "Objective Value";

/// Axis and series name used for an unnamed custom target.
pub(super) const CUSTOM_METRIC: &str = "Custom Metric";

/// Options for [`optimization_history`](super::optimization_history).
///
/// # Defaults
///
/// - Target: [`Target::Default`]
/// - Target name: `"Objective Value"`, or `"Custom Metric"` for a custom
///   target
/// - Error bar: off
///
/// # Examples
///
/// ```
/// use optimization_history::{HistoryOptions, Target};
///
/// let options = HistoryOptions::new()
///     .target(Target::custom(|t| t.number() as f64))
///     .target_name("Trial Number")
///     .error_bar(true);
/// assert_eq!(options.resolved_target_name(), "Trial Number");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HistoryOptions {
    pub(super) target: Target,
    pub(super) target_name: Option<String>,
    pub(super) error_bar: bool,
}

impl HistoryOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value plotted for each trial.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Set the name of the target, used for series names and the y-axis.
    #[must_use]
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = Some(name.into());
        self
    }

    /// Aggregate studies into mean lines and standard-deviation bands.
    #[must_use]
    pub fn error_bar(mut self, error_bar: bool) -> Self {
        self.error_bar = error_bar;
        self
    }

    /// Return the name used for the y-axis and the value series.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimization_history::{HistoryOptions, Target};
    ///
    /// assert_eq!(HistoryOptions::new().resolved_target_name(), "Objective Value");
    /// let custom = HistoryOptions::new().target(Target::custom(|_| 0.0));
    /// assert_eq!(custom.resolved_target_name(), "Custom Metric");
    /// ```
    #[must_use]
    pub fn resolved_target_name(&self) -> &str {
        match (&self.target_name, &self.target) {
            (Some(name), _) => name,
            (None, Target::Default) => OBJECTIVE_VALUE,
            (None, Target::Custom(_)) => CUSTOM_METRIC,
        }
    }

    /// Returns `true` if a custom target carries no name of its own, either
    /// none at all or the default target's name.
    pub(super) fn custom_target_unnamed(&self) -> bool {
        self.target.is_custom()
            && self
                .target_name
                .as_deref()
                .is_none_or(|name| name == OBJECTIVE_VALUE)
    }
}
