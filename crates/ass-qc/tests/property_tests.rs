//! Property-based tests for ass-qc
//!
//! Uses proptest to check that text normalization and scans behave the same
//! way across arbitrary event text.

use ass_qc::{
    lint_events,
    tags::parse_ass,
    text::{is_blank, plaintext},
    Event, EventList, LintConfig,
};
use proptest::prelude::*;

/// Generate event text mixing prose, override blocks and line breaks
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.!?]{0,40}",
        "(\\{\\\\[a-z0-9]{1,6}\\})?[a-zA-Z .]{0,20}(\\\\N[a-zA-Z .]{0,20})?",
        "[{}\\\\Na-z …\u{2013}\u{2014}-]{0,30}",
        Just(String::new()),
    ]
}

fn arb_events() -> impl Strategy<Value = EventList> {
    prop::collection::vec((arb_text(), 0i64..3000, 0i64..3000, any::<bool>()), 0..12).prop_map(
        |rows| {
            let mut start = 0;
            rows.into_iter()
                .map(|(text, gap, duration, is_comment)| {
                    start += gap;
                    let event = Event::new(start, start + duration, text);
                    if is_comment {
                        event.commented()
                    } else {
                        event
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn plaintext_is_idempotent(text in arb_text()) {
        let once = plaintext(&text);
        prop_assert_eq!(plaintext(&once), once);
    }

    #[test]
    fn plaintext_never_grows(text in arb_text()) {
        prop_assert!(plaintext(&text).len() <= text.len());
    }

    #[test]
    fn blank_means_no_visible_text(text in arb_text()) {
        prop_assert_eq!(is_blank(&text), plaintext(&text).trim().is_empty());
    }

    #[test]
    fn tag_parser_never_panics(text in "[{}\\\\a-z0-9(),&H]{0,30}") {
        let _ = parse_ass(&text);
    }

    #[test]
    fn scans_are_deterministic(events in arb_events()) {
        let config = LintConfig::default();
        let first = lint_events(&events, &config).unwrap();
        let second = lint_events(&events, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn violations_reference_existing_events(events in arb_events()) {
        let report = lint_events(&events, &LintConfig::default()).unwrap();
        for violation in &report {
            prop_assert!(violation.events().iter().all(|&i| i < events.len()));
            prop_assert!(!violation.check_id().is_empty());
        }
    }

    #[test]
    fn max_violations_caps_report(events in arb_events(), max in 1usize..5) {
        let full = lint_events(&events, &LintConfig::default()).unwrap();
        let capped = lint_events(&events, &LintConfig::default().with_max_violations(max)).unwrap();
        prop_assert_eq!(capped.len(), full.len().min(max));
        prop_assert_eq!(capped.violations(), &full.violations()[..capped.len()]);
    }
}
