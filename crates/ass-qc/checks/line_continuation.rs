//! Sentence boundaries across consecutive lines.
//!
//! A line ending mid-sentence should be followed by one that continues it
//! (lowercase start or a leading `I `), and a lowercase line should follow
//! one that left the sentence open. Only ASCII lowercase counts as lowercase
//! here.

use super::CheckContext;
use crate::{text::plaintext, violation::Violation};

fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Ends with a comma, colon or lowercase letter.
fn ends_open(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| matches!(c, ',' | ':') || c.is_ascii_lowercase())
}

/// `I` followed by whitespace, as in "I think".
fn starts_with_pronoun_i(text: &str) -> bool {
    text.strip_prefix('I')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Check how one event connects to its non-blank neighbors.
pub fn check_line_continuation(context: &CheckContext<'_>, out: &mut Vec<Violation>) {
    let event = context.event();
    let text = plaintext(&event.text);

    let prev_text = context
        .prev_non_empty()
        .map(|(_, prev)| plaintext(&prev.text))
        .unwrap_or_default();
    let next = context.next_non_empty();
    let next_text = next
        .map(|(_, next)| plaintext(&next.text))
        .unwrap_or_default();

    if let Some((next_index, _)) = next {
        if text.ends_with('…') && next_text.starts_with('…') {
            out.push(Violation::spanning(
                [context.index(), next_index],
                "old-style line continuation",
            ));
        }
    }

    if starts_lowercase(&text) && !ends_open(&prev_text) && !prev_text.ends_with("vs.") {
        out.push(context.violation("sentence begins with a lowercase letter"));
    }

    if ends_open(&text)
        && !starts_lowercase(&next_text)
        && !starts_with_pronoun_i(&next_text)
        && !event.is_comment
        && !context.config().is_exempt_actor(&event.actor)
    {
        out.push(context.violation("possibly unended sentence"));
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        checks::{CheckContext, CheckKind},
        Event, EventList, LintConfig,
    };

    fn messages(events: &EventList, index: usize) -> Vec<String> {
        let config = LintConfig::default();
        let context = CheckContext::new(events, index, &config);
        CheckKind::LineContinuation
            .run(&context)
            .iter()
            .map(|v| v.message().to_string())
            .collect()
    }

    fn list(texts: &[&str]) -> EventList {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let start = i as i64 * 2000;
                Event::new(start, start + 2000, *text)
            })
            .collect()
    }

    #[test]
    fn complete_sentences() {
        let events = list(&["Hello.", "How are you?"]);
        assert!(messages(&events, 0).is_empty());
        assert!(messages(&events, 1).is_empty());
    }

    #[test]
    fn continued_sentence() {
        let events = list(&["I was thinking,", "maybe we should go."]);
        assert!(messages(&events, 0).is_empty());
        assert!(messages(&events, 1).is_empty());
    }

    #[test]
    fn continued_with_pronoun_i() {
        let events = list(&["And then", "I said no."]);
        assert!(messages(&events, 0).is_empty());
    }

    #[test]
    fn lowercase_start() {
        let events = list(&["Hello.", "maybe later."]);
        assert_eq!(messages(&events, 1), ["sentence begins with a lowercase letter"]);
        let events = list(&["Godzilla vs.", "the world."]);
        assert!(messages(&events, 1).is_empty());
    }

    #[test]
    fn unended_sentence() {
        let events = list(&["I was thinking", "Anyway."]);
        assert_eq!(messages(&events, 0), ["possibly unended sentence"]);
        let events = list(&["I was thinking"]);
        assert_eq!(messages(&events, 0), ["possibly unended sentence"]);
    }

    #[test]
    fn unended_sentence_exemptions() {
        let plain: EventList = vec![Event::new(0, 2000, "La la la")].into();
        assert_eq!(messages(&plain, 0), ["possibly unended sentence"]);

        let karaoke: EventList = vec![Event::new(0, 2000, "La la la").with_actor("[karaoke]")].into();
        assert!(messages(&karaoke, 0).is_empty());
        let comment: EventList = vec![Event::new(0, 2000, "Note to self").commented()].into();
        assert!(messages(&comment, 0).is_empty());
    }

    #[test]
    fn exemptions_keep_lowercase_start_rule() {
        let karaoke: EventList = vec![Event::new(0, 2000, "la la la").with_actor("[karaoke]")].into();
        assert_eq!(messages(&karaoke, 0), ["sentence begins with a lowercase letter"]);
        let comment: EventList = vec![Event::new(0, 2000, "note to self").commented()].into();
        assert_eq!(messages(&comment, 0), ["sentence begins with a lowercase letter"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let events = list(&["I was thinking,", "", "maybe later."]);
        assert!(messages(&events, 0).is_empty());
        assert!(messages(&events, 2).is_empty());
    }

    #[test]
    fn old_style_continuation() {
        let events = list(&["So I went…", "…and left."]);
        let config = LintConfig::default();
        let context = CheckContext::new(&events, 0, &config);
        let violations = CheckKind::LineContinuation.run(&context);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message(), "old-style line continuation");
        assert_eq!(violations[0].events(), [0, 1]);
    }
}
