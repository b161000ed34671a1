//! Built-in quality checks for subtitle events.
//!
//! Each check is a plain function of one event, seen through a
//! [`CheckContext`] that also gives access to the surrounding list and the
//! configuration. Checks never mutate anything and never fail; content
//! problems are reported as [`Violation`]s.
//!
//! # Check List
//!
//! - `durations`: minimum duration and minimum gap to the next visible line
//! - `punctuation`: typography, whitespace, dashes and punctuation marks
//! - `ass-tags`: override block syntax and misuse
//! - `double-words`: the same word twice in a row
//! - `line-continuation`: sentence boundaries across consecutive lines
//!
//! # Example
//!
//! ```rust
//! use ass_qc::{checks::{BuiltinChecks, CheckContext}, Event, EventList, LintConfig};
//!
//! let events: EventList = vec![Event::new(0, 2000, "What?No!")].into();
//! let config = LintConfig::default();
//! let context = CheckContext::new(&events, 0, &config);
//!
//! let check = BuiltinChecks::check_by_id("punctuation").unwrap();
//! let violations = check.run(&context);
//! assert_eq!(violations[0].message(), "missing whitespace after punctuation mark");
//! ```

use crate::{
    config::LintConfig,
    event::{Event, EventList},
    navigation,
    text::plaintext,
    violation::Violation,
};

pub mod ass_tags;
pub mod double_words;
pub mod durations;
pub mod line_continuation;
pub mod punctuation;

/// Read-only view of one event and its surroundings.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    events: &'a EventList,
    index: usize,
    config: &'a LintConfig,
}

impl<'a> CheckContext<'a> {
    /// Create a context for the event at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Use [`crate::lint::check_event`]
    /// for a checked entry point.
    #[must_use]
    pub fn new(events: &'a EventList, index: usize, config: &'a LintConfig) -> Self {
        assert!(
            index < events.len(),
            "event index {index} out of range for list of {}",
            events.len()
        );
        Self {
            events,
            index,
            config,
        }
    }

    /// Event being checked.
    #[must_use]
    pub fn event(&self) -> &'a Event {
        &self.events[self.index]
    }

    /// Position of the event being checked.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whole list.
    #[must_use]
    pub fn events(&self) -> &'a EventList {
        self.events
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &'a LintConfig {
        self.config
    }

    /// Plain text of the event being checked.
    #[must_use]
    pub fn plaintext(&self) -> String {
        plaintext(&self.event().text)
    }

    /// Previous non-blank event.
    #[must_use]
    pub fn prev_non_empty(&self) -> Option<(usize, &'a Event)> {
        navigation::prev_non_empty(self.events, self.index)
    }

    /// Next non-blank event.
    #[must_use]
    pub fn next_non_empty(&self) -> Option<(usize, &'a Event)> {
        navigation::next_non_empty(self.events, self.index)
    }

    /// Next event that is neither blank nor a comment.
    #[must_use]
    pub fn next_gap_neighbor(&self) -> Option<(usize, &'a Event)> {
        navigation::next_gap_neighbor(self.events, self.index)
    }

    /// Violation attributed to the event being checked.
    #[must_use]
    pub fn violation(&self, message: impl Into<String>) -> Violation {
        Violation::new(self.index, message)
    }
}

/// Signature shared by all checks.
pub type CheckFn = fn(&CheckContext<'_>, &mut Vec<Violation>);

/// The fixed set of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Minimum duration and gap
    Durations,
    /// Typography and punctuation
    Punctuation,
    /// Override block syntax
    AssTags,
    /// Repeated words
    DoubleWords,
    /// Sentence boundaries across lines
    LineContinuation,
}

impl CheckKind {
    /// Unique identifier used in configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Durations => "durations",
            Self::Punctuation => "punctuation",
            Self::AssTags => "ass-tags",
            Self::DoubleWords => "double-words",
            Self::LineContinuation => "line-continuation",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Durations => "Durations",
            Self::Punctuation => "Punctuation",
            Self::AssTags => "ASS Tags",
            Self::DoubleWords => "Double Words",
            Self::LineContinuation => "Line Continuation",
        }
    }

    /// Check description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Durations => "Detects lines shown too briefly and gaps too short to notice",
            Self::Punctuation => "Detects whitespace, dash, ellipsis and punctuation mistakes",
            Self::AssTags => "Detects malformed or misused override tags",
            Self::DoubleWords => "Detects the same word repeated twice in a row",
            Self::LineContinuation => "Detects sentences split badly across consecutive lines",
        }
    }

    fn function(self) -> CheckFn {
        match self {
            Self::Durations => durations::check_durations,
            Self::Punctuation => punctuation::check_punctuation,
            Self::AssTags => ass_tags::check_ass_tags,
            Self::DoubleWords => double_words::check_double_words,
            Self::LineContinuation => line_continuation::check_line_continuation,
        }
    }

    /// Run the check on one event.
    ///
    /// Returned violations carry this check's id.
    #[must_use]
    pub fn run(self, context: &CheckContext<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        (self.function())(context, &mut violations);
        violations
            .into_iter()
            .map(|violation| violation.with_check(self.id()))
            .collect()
    }
}

/// Built-in checks registry
///
/// Checks run in the order listed here; report order depends on it.
pub struct BuiltinChecks;

static ALL_CHECKS: [CheckKind; 5] = [
    CheckKind::Durations,
    CheckKind::Punctuation,
    CheckKind::AssTags,
    CheckKind::DoubleWords,
    CheckKind::LineContinuation,
];

impl BuiltinChecks {
    /// Get all built-in checks in execution order.
    #[must_use]
    pub fn all_checks() -> &'static [CheckKind] {
        &ALL_CHECKS
    }

    /// Get check by ID.
    #[must_use]
    pub fn check_by_id(id: &str) -> Option<CheckKind> {
        ALL_CHECKS.iter().copied().find(|check| check.id() == id)
    }

    /// Get all check IDs.
    #[must_use]
    pub fn all_check_ids() -> Vec<&'static str> {
        ALL_CHECKS.iter().map(|check| check.id()).collect()
    }

    /// Checks enabled by `config`, in execution order.
    #[must_use]
    pub fn enabled_checks(config: &LintConfig) -> Vec<CheckKind> {
        ALL_CHECKS
            .iter()
            .copied()
            .filter(|check| config.is_check_enabled(check.id()))
            .collect()
    }
}
