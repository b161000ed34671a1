//! Repeated word check.

use super::CheckContext;
use crate::violation::Violation;

/// The same word twice, with no punctuation between them.
///
/// `first` must end in a letter or digit (`no, no` is deliberate); `second`
/// may carry sentence punctuation (`the the.`).
fn repeated_word<'a>(first: &'a str, second: &str) -> Option<&'a str> {
    if !first.ends_with(char::is_alphanumeric) {
        return None;
    }
    let word = first.trim_start_matches(|c: char| !c.is_alphanumeric());
    let other = second.trim_matches(|c: char| !c.is_alphanumeric());
    (!word.is_empty() && word == other).then_some(word)
}

/// Report each pair of identical adjacent words.
///
/// Words are whitespace-separated runs of plain text with surrounding
/// punctuation removed, compared case-sensitively. Runs without any letter
/// or digit (`–`, `…`) never count as words.
pub fn check_double_words(context: &CheckContext<'_>, out: &mut Vec<Violation>) {
    let text = context.plaintext();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    for pair in tokens.windows(2) {
        if let Some(word) = repeated_word(pair[0], pair[1]) {
            out.push(context.violation(format!("double word ({word})")));
        }
    }
}
