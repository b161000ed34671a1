//! Minimum duration and gap check.
//!
//! Lines flashing by too quickly cannot be read, and a gap between two lines
//! that is shorter than a blink reads as flicker. Zero gaps (linked lines)
//! and overlaps are intentional and not reported.

use super::CheckContext;
use crate::{text::plaintext, violation::Violation};

/// Check duration and gap of one event.
///
/// Blank and comment events are skipped. The next visible line for gap
/// purposes skips blank and comment events.
pub fn check_durations(context: &CheckContext<'_>, out: &mut Vec<Violation>) {
    let event = context.event();
    let text = plaintext(&event.text);
    if event.is_comment || text.trim().is_empty() {
        return;
    }

    let thresholds = &context.config().thresholds;
    let min_duration = if text.chars().count() < thresholds.short_text_chars {
        thresholds.min_duration_short_ms
    } else {
        thresholds.min_duration_long_ms
    };
    if event.duration() < min_duration {
        out.push(context.violation(format!("duration shorter than {min_duration} ms")));
    }

    if let Some((_, next)) = context.next_gap_neighbor() {
        let gap = next.start.saturating_sub(event.end);
        if gap > 0 && gap < thresholds.min_gap_ms {
            out.push(context.violation(format!(
                "gap shorter than {} ms ({gap} ms)",
                thresholds.min_gap_ms
            )));
        }
    }
}
