//! Configuration for linting behavior

use crate::{
    checks::BuiltinChecks,
    errors::{QcError, Result},
    event::DEFAULT_EXEMPT_ACTORS,
};

/// Timing thresholds used by the duration/gap check, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingThresholds {
    /// Minimum duration for short lines
    pub min_duration_short_ms: i64,
    /// Minimum duration for everything else
    pub min_duration_long_ms: i64,
    /// Lines with fewer visible characters than this count as short
    pub short_text_chars: usize,
    /// Minimum gap between consecutive visible lines
    pub min_gap_ms: i64,
}

impl Default for TimingThresholds {
    fn default() -> Self {
        Self {
            min_duration_short_ms: 250,
            min_duration_long_ms: 500,
            short_text_chars: 8,
            min_gap_ms: 250,
        }
    }
}

/// Configuration for linting behavior.
///
/// # Example
///
/// ```rust
/// use ass_qc::LintConfig;
///
/// let config = LintConfig::default()
///     .with_disabled_check("double-words")
///     .with_max_violations(100);
/// assert!(!config.is_check_enabled("double-words"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LintConfig {
    /// Enabled check ids (empty = all enabled)
    pub enabled_checks: Vec<String>,
    /// Disabled check ids
    pub disabled_checks: Vec<String>,
    /// Maximum number of violations to report (0 = unlimited)
    pub max_violations: usize,
    /// Duration and gap limits
    pub thresholds: TimingThresholds,
    /// Actor labels exempt from the unended sentence rule
    pub exempt_actors: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled_checks: Vec::new(),
            disabled_checks: Vec::new(),
            max_violations: 0, // Unlimited
            thresholds: TimingThresholds::default(),
            exempt_actors: DEFAULT_EXEMPT_ACTORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl LintConfig {
    /// Restrict linting to the given check (may be called repeatedly).
    #[must_use]
    pub fn with_enabled_check(mut self, id: impl Into<String>) -> Self {
        self.enabled_checks.push(id.into());
        self
    }

    /// Skip the given check.
    #[must_use]
    pub fn with_disabled_check(mut self, id: impl Into<String>) -> Self {
        self.disabled_checks.push(id.into());
        self
    }

    /// Set maximum number of violations.
    #[must_use]
    pub fn with_max_violations(mut self, max: usize) -> Self {
        self.max_violations = max;
        self
    }

    /// Replace the timing thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: TimingThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check if a check is enabled.
    #[must_use]
    pub fn is_check_enabled(&self, id: &str) -> bool {
        if self.disabled_checks.iter().any(|d| d == id) {
            return false;
        }
        self.enabled_checks.is_empty() || self.enabled_checks.iter().any(|e| e == id)
    }

    /// Whether `actor` opts out of sentence-boundary rules.
    #[must_use]
    pub fn is_exempt_actor(&self, actor: &str) -> bool {
        self.exempt_actors.iter().any(|a| a == actor)
    }

    /// Validate check ids and thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`QcError::UnknownCheck`] for ids that are not registered and
    /// [`QcError::InvalidConfig`] for negative or inverted thresholds.
    pub fn validate(&self) -> Result<()> {
        let known = BuiltinChecks::all_check_ids();
        if let Some(unknown) = self
            .enabled_checks
            .iter()
            .chain(&self.disabled_checks)
            .find(|id| !known.contains(&id.as_str()))
        {
            return Err(QcError::UnknownCheck(unknown.clone()));
        }

        let t = &self.thresholds;
        if t.min_duration_short_ms < 0 || t.min_duration_long_ms < 0 || t.min_gap_ms < 0 {
            return Err(QcError::invalid_config("timing thresholds must not be negative"));
        }
        if t.min_duration_short_ms > t.min_duration_long_ms {
            return Err(QcError::invalid_config(format!(
                "short line minimum ({} ms) exceeds long line minimum ({} ms)",
                t.min_duration_short_ms, t.min_duration_long_ms
            )));
        }

        Ok(())
    }
}
