//! Violation record produced by the checks

use core::fmt;

/// A defect found in one or more events.
///
/// Events are referenced by their 0-based position in the [`EventList`]
/// that was scanned; the first index is the primary event. Rendering uses
/// 1-based indices, as editors number their lines.
///
/// [`EventList`]: crate::EventList
///
/// # Examples
///
/// ```rust
/// use ass_qc::Violation;
///
/// assert_eq!(Violation::new(0, "test").to_string(), "#1: test");
/// assert_eq!(Violation::spanning([0, 1], "test").to_string(), "#1+#2: test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// Implicated event indices, in attribution order
    events: Vec<usize>,
    /// Human-readable message
    message: String,
    /// Id of the check that produced this violation
    check_id: &'static str,
}

impl Violation {
    /// Violation attributed to a single event.
    pub fn new(event: usize, message: impl Into<String>) -> Self {
        Self {
            events: vec![event],
            message: message.into(),
            check_id: "",
        }
    }

    /// Violation attributed to several events.
    ///
    /// # Panics
    ///
    /// Panics if `events` is empty; a violation always names at least one
    /// event.
    pub fn spanning(events: impl IntoIterator<Item = usize>, message: impl Into<String>) -> Self {
        let events: Vec<usize> = events.into_iter().collect();
        assert!(!events.is_empty(), "violation needs at least one event");
        Self {
            events,
            message: message.into(),
            check_id: "",
        }
    }

    /// Tag the violation with the id of the producing check.
    #[must_use]
    pub fn with_check(mut self, check_id: &'static str) -> Self {
        self.check_id = check_id;
        self
    }

    /// Primary event index.
    #[must_use]
    pub fn event(&self) -> usize {
        self.events[0]
    }

    /// All implicated event indices.
    #[must_use]
    pub fn events(&self) -> &[usize] {
        &self.events
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Id of the producing check, empty if constructed by hand.
    #[must_use]
    pub fn check_id(&self) -> &'static str {
        self.check_id
    }

    /// Whether `index` is one of the implicated events.
    #[must_use]
    pub fn involves(&self, index: usize) -> bool {
        self.events.contains(&index)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "#{}", index + 1)?;
        }
        write!(f, ": {}", self.message)
    }
}
