//! Neighbor lookups over an [`EventList`]
//!
//! Adjacency rules (sentence continuation, dialogue dashes, gaps) need the
//! nearest *meaningful* line, not the raw neighbor: blank separator events are
//! skipped. All lookups are index walks; `index` itself is never returned.

use crate::{
    event::{Event, EventList},
    text::is_blank,
};

/// Previous event whose plain text is not blank.
///
/// Comment status is ignored; callers filter further if they need to.
#[must_use]
pub fn prev_non_empty(events: &EventList, index: usize) -> Option<(usize, &Event)> {
    events
        .as_slice()
        .get(..index.min(events.len()))?
        .iter()
        .enumerate()
        .rev()
        .find(|(_, event)| !is_blank(&event.text))
}

/// Next event whose plain text is not blank.
///
/// Comment status is ignored; callers filter further if they need to.
#[must_use]
pub fn next_non_empty(events: &EventList, index: usize) -> Option<(usize, &Event)> {
    let from = index.checked_add(1)?;
    events
        .as_slice()
        .get(from..)?
        .iter()
        .enumerate()
        .find(|(_, event)| !is_blank(&event.text))
        .map(|(offset, event)| (from + offset, event))
}

/// Next event that is neither blank nor a comment.
///
/// Used for gap measurements, where comments are not displayed and so do not
/// separate two visible lines.
#[must_use]
pub fn next_gap_neighbor(events: &EventList, index: usize) -> Option<(usize, &Event)> {
    let from = index.checked_add(1)?;
    events
        .as_slice()
        .get(from..)?
        .iter()
        .enumerate()
        .find(|(_, event)| !event.is_comment && !is_blank(&event.text))
        .map(|(offset, event)| (from + offset, event))
}
