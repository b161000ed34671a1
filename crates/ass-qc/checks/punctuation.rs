//! Punctuation and typography check.
//!
//! Works on plain text, one regex per category. Line anchors (`^`, `$`) are
//! per line. Every category is reported at most once per event, and
//! categories are independent of each other.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CheckContext;
use crate::{event::Event, text::plaintext, violation::Violation};

const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Space or tab touching a line break
static WHITESPACE_AROUND_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]\n|\n[ \t]").expect("Invalid line break regex"));

/// Contractions commonly typed without their apostrophe
static MISSING_APOSTROPHE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:im|youre|youve|youll|youd|theyre|theyve|theyll|weve|ive|isnt|arent|wasnt|werent|dont|doesnt|didnt|cant|couldnt|wouldnt|shouldnt|wont|hasnt|havent|hadnt|thats|whats|theres|heres|itll|mustnt|neednt)\b",
    )
    .expect("Invalid apostrophe regex")
});

/// Line opening with a hyphen or em dash instead of an en dash
static BAD_DIALOG_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[-\x{2014}]").expect("Invalid dialog dash regex"));

/// Line ending with a double hyphen or an en dash instead of an em dash
static BAD_INTERRUPTION_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?:--|\x{2013})$").expect("Invalid interruption dash regex"));

/// Line opening with an en dash
static DIALOG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\x{2013}").expect("Invalid dialog line regex"));

/// Capital letter, hyphen, lowercase letter at a word start (`W-what`)
static STUTTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\p{Lu})-(\p{Ll})").expect("Invalid stutter regex"));

static LOWERCASE_AFTER_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?] \p{Ll}").expect("Invalid sentence end regex"));

static WHITESPACE_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" [,.!?:;]").expect("Invalid punctuation regex"));

static LINE_BREAK_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[,.!?:;]").expect("Invalid punctuation regex"));

/// Punctuation mark glued to the following character
static MISSING_WHITESPACE_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[,.!?:;…][^\s,.!?:;…"'”’»)\]\-\x{2013}\x{2014}]"#)
        .expect("Invalid punctuation regex")
});

static UNRECOGNIZED_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\t\r\x0B\x0C\x{1680}\x{2000}-\x{200B}\x{2028}\x{2029}\x{202F}\x{205F}\x{2060}\x{3000}\x{FEFF}]")
        .expect("Invalid whitespace regex")
});

static EXTRA_COMMA_OR_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[…,.!?:;][,.]").expect("Invalid punctuation regex"));

/// Check typography of one event.
pub fn check_punctuation(context: &CheckContext<'_>, out: &mut Vec<Violation>) {
    let text = plaintext(&context.event().text);
    let mut report = |message: &str| out.push(context.violation(message));

    if text.starts_with('\n') || text.ends_with('\n') {
        report("extra line break");
    } else if text.matches('\n').count() >= 2 {
        report("three or more lines");
    }

    if WHITESPACE_AROUND_BREAK.is_match(&text) {
        report("whitespace around line break");
    }

    if text.starts_with(' ') || text.ends_with(' ') {
        report("extra whitespace");
    } else if text.contains("  ") {
        report("double space");
    }

    if text.contains("...") {
        report("bad ellipsis (expected …)");
    }

    if MISSING_APOSTROPHE.is_match(&text) {
        report("missing apostrophe");
    }

    if BAD_DIALOG_DASH.is_match(&text) {
        report(&format!("bad dash (expected {EN_DASH})"));
    }

    if BAD_INTERRUPTION_DASH.is_match(&text) {
        report(&format!("bad dash (expected {EM_DASH})"));
    }

    if DIALOG_LINE.find_iter(&text).count() == 1 && !dialog_continues(context) {
        report("dialog with just one person");
    }

    if has_stutter_capitalization(&text) {
        report("possible wrong stutter capitalization");
    }

    if LOWERCASE_AFTER_SENTENCE_END.is_match(&text) {
        report("lowercase letter after sentence end");
    }

    if WHITESPACE_BEFORE_PUNCTUATION.is_match(&text) {
        report("whitespace before punctuation");
    }

    if LINE_BREAK_BEFORE_PUNCTUATION.is_match(&text) {
        report("line break before punctuation");
    }

    if has_missing_whitespace_after_punctuation(&text) {
        report("missing whitespace after punctuation mark");
    }

    if UNRECOGNIZED_WHITESPACE.is_match(&text) {
        report("unrecognized whitespace");
    }

    // "..." is its own category; only marks after the run count here
    if EXTRA_COMMA_OR_DOT.is_match(&text.replace("...", "…")) {
        report("extra comma or dot");
    }
}

fn opens_dialog(event: &Event) -> bool {
    plaintext(&event.text).starts_with(EN_DASH)
}

/// Whether a neighboring visible line carries the other speaker's turn.
fn dialog_continues(context: &CheckContext<'_>) -> bool {
    context.next_non_empty().is_some_and(|(_, next)| opens_dialog(next))
        || context.prev_non_empty().is_some_and(|(_, prev)| opens_dialog(prev))
}

/// `W-what`, but not `T-shirt` or `Ayuhara-san`.
fn has_stutter_capitalization(text: &str) -> bool {
    STUTTER.captures_iter(text).any(|caps| {
        let lowered = caps[1].to_lowercase();
        lowered == &caps[2]
    })
}

fn has_missing_whitespace_after_punctuation(text: &str) -> bool {
    MISSING_WHITESPACE_AFTER.find_iter(text).any(|m| {
        let mut marks = m.as_str().chars();
        let (Some(mark), Some(next)) = (marks.next(), marks.next()) else {
            return false;
        };
        let before = text[..m.start()].chars().next_back();

        // 3.14, 1,000, 10:30
        if matches!(mark, '.' | ',' | ':')
            && next.is_ascii_digit()
            && before.is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        // "What?I see."
        if next == 'I'
            && !text[m.end()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric)
        {
            return false;
        }

        // leading ellipsis: "…and then"
        if mark == '…'
            && before.map_or(true, |c| c.is_whitespace() || c == EN_DASH || c == EM_DASH)
        {
            return false;
        }

        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checks::CheckKind, Event, EventList, LintConfig};

    fn messages(events: &EventList, index: usize) -> Vec<String> {
        let config = LintConfig::default();
        let context = CheckContext::new(events, index, &config);
        CheckKind::Punctuation
            .run(&context)
            .iter()
            .map(|v| v.message().to_string())
            .collect()
    }

    fn single(text: &str) -> Vec<String> {
        messages(&vec![Event::new(0, 2000, text)].into(), 0)
    }

    #[test]
    fn clean_text() {
        assert!(single("What? No!").is_empty());
        assert!(single(r"What…\Nno!").is_empty());
        assert!(single(r"{\i1}Hello{\i0} there.").is_empty());
    }

    #[test]
    fn one_violation_per_category() {
        assert_eq!(single("What?No!Yes!"), ["missing whitespace after punctuation mark"]);
        assert_eq!(single("A  b  c"), ["double space"]);
    }

    #[test]
    fn independent_categories_accumulate() {
        assert_eq!(
            single("What youve done... "),
            [
                "extra whitespace",
                "bad ellipsis (expected …)",
                "missing apostrophe",
            ]
        );
    }

    #[test]
    fn dialog_split_across_lines() {
        let events: EventList = vec![
            Event::new(0, 2000, "\u{2013} What?"),
            Event::new(2000, 4000, ""),
            Event::new(4000, 6000, "\u{2013} No!"),
            Event::new(6000, 8000, "Fine."),
        ]
        .into();
        assert!(messages(&events, 0).is_empty());
        assert!(messages(&events, 2).is_empty());
        assert!(messages(&events, 3).is_empty());
    }

    #[test]
    fn dialog_between_plain_lines() {
        let events: EventList = vec![
            Event::new(0, 2000, "Fine."),
            Event::new(2000, 4000, "\u{2013} What?"),
            Event::new(4000, 6000, "Nothing."),
        ]
        .into();
        assert_eq!(messages(&events, 1), ["dialog with just one person"]);
    }

    #[test]
    fn extra_comma_after_ellipsis_run() {
        assert_eq!(
            single("Hi... ok,, fine"),
            [
                "bad ellipsis (expected …)",
                "lowercase letter after sentence end",
                "extra comma or dot",
            ]
        );
        assert_eq!(single("Wait...."), ["bad ellipsis (expected …)", "extra comma or dot"]);
        assert_eq!(single("Wait..."), ["bad ellipsis (expected …)"]);
    }

    #[test]
    fn two_speakers_in_one_line() {
        assert!(single("\u{2013} What?\\N\u{2013} No!").is_empty());
    }

    #[test]
    fn stutter_needs_same_letter() {
        assert!(has_stutter_capitalization("W-what?"));
        assert!(!has_stutter_capitalization("T-shirt"));
        assert!(!has_stutter_capitalization("Ayuhara-san"));
        assert!(!has_stutter_capitalization("W-W-What?"));
    }

    #[test]
    fn numbers_are_not_missing_whitespace() {
        assert!(!has_missing_whitespace_after_punctuation("It costs 3.50 now."));
        assert!(!has_missing_whitespace_after_punctuation("At 10:30, maybe."));
        assert!(!has_missing_whitespace_after_punctuation("Over 1,000 people."));
        assert!(has_missing_whitespace_after_punctuation("Wait.3 more"));
    }

    #[test]
    fn pronoun_i_after_mark() {
        assert!(!has_missing_whitespace_after_punctuation("What?I see."));
        assert!(!has_missing_whitespace_after_punctuation("So…I"));
        assert!(!has_missing_whitespace_after_punctuation("Well,I'm here."));
        assert!(has_missing_whitespace_after_punctuation("What.It is."));
        assert!(has_missing_whitespace_after_punctuation("What?No!"));
        assert!(single("What?I see.").is_empty());
    }

    #[test]
    fn leading_ellipsis_is_fine() {
        assert!(!has_missing_whitespace_after_punctuation("…and then"));
        assert!(!has_missing_whitespace_after_punctuation("So \u{2013} …and then"));
        assert!(!has_missing_whitespace_after_punctuation("Fine\n…and then"));
        assert!(has_missing_whitespace_after_punctuation("What…no!"));
    }

    #[test]
    fn quotes_and_dashes_after_marks() {
        assert!(!has_missing_whitespace_after_punctuation("\"What?\""));
        assert!(!has_missing_whitespace_after_punctuation("(Really.)"));
        assert!(!has_missing_whitespace_after_punctuation("Wait,\u{2014}"));
    }
}
