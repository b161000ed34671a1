//! Event model consumed by the quality checks
//!
//! Contains the [`Event`] struct and the [`EventList`] arena it lives in.
//! Events are owned by the host (editor, storage layer, CLI); the checks only
//! ever borrow the list and address events by their position.

use core::ops::Index;

/// Actor labels that opt a line out of sentence-boundary rules.
///
/// Karaoke, titles and signs are not dialogue, so they are allowed to end
/// mid-sentence.
pub const DEFAULT_EXEMPT_ACTORS: [&str; 3] = ["[karaoke]", "[title]", "(sign)"];

/// One timed subtitle line.
///
/// Times are in milliseconds. `end >= start` is the host's responsibility and
/// is not validated here.
///
/// # Examples
///
/// ```rust
/// use ass_qc::Event;
///
/// let event = Event::new(0, 1500, r"Hello{\b1} world");
/// assert_eq!(event.duration(), 1500);
/// assert!(!event.is_comment);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Event {
    /// Start time in milliseconds
    pub start: i64,

    /// End time in milliseconds
    pub end: i64,

    /// Raw text with possible `{...}` overrides and `\N` breaks
    pub text: String,

    /// Comment lines are never rendered
    pub is_comment: bool,

    /// Character name or speaker, empty when unset
    pub actor: String,
}

impl Event {
    /// Create a dialogue event with no actor.
    pub fn new(start: i64, end: i64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Turn the event into a comment.
    #[must_use]
    pub fn commented(mut self) -> Self {
        self.is_comment = true;
        self
    }

    /// Set the actor label.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Duration in milliseconds.
    ///
    /// Saturates instead of going negative for malformed timings.
    #[must_use]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start).max(0)
    }
}

/// Ordered, index-addressable list of events.
///
/// Insertion order is display order. The checks receive `(&EventList, index)`
/// pairs and walk neighbors by index, so events never hold links to each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event and return its index.
    pub fn push(&mut self, event: Event) -> usize {
        self.events.push(event);
        self.events.len() - 1
    }

    /// Insert an event at `index`, shifting later events.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, same as [`Vec::insert`].
    pub fn insert(&mut self, index: usize, event: Event) {
        self.events.insert(index, event);
    }

    /// Event at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Borrow the events as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

impl Index<usize> for EventList {
    type Output = Event;

    fn index(&self, index: usize) -> &Self::Output {
        &self.events[index]
    }
}

impl From<Vec<Event>> for EventList {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl FromIterator<Event> for EventList {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = core::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
