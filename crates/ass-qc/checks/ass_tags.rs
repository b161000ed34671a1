//! Override tag misuse check.
//!
//! A syntax error hides every other finding in the same event.

use super::CheckContext;
use crate::{
    tags::{parse_ass, AssItem},
    violation::Violation,
};

/// Check override blocks of one event.
pub fn check_ass_tags(context: &CheckContext<'_>, out: &mut Vec<Violation>) {
    let items = match parse_ass(&context.event().text) {
        Ok(items) => items,
        Err(err) => {
            out.push(context.violation(format!("invalid syntax ({err})")));
            return;
        }
    };

    for (i, item) in items.iter().enumerate() {
        let next = items.get(i + 1);
        match item {
            AssItem::BlockOpen if next == Some(&AssItem::BlockClose) => {
                out.push(context.violation("pointless ASS tag"));
            }
            AssItem::Comment(_) => {
                out.push(context.violation("use notes to make comments"));
            }
            AssItem::Tag(tag) if tag.is_legacy_alignment() => {
                out.push(context.violation("using legacy alignment tag"));
            }
            AssItem::BlockClose if next == Some(&AssItem::BlockOpen) => {
                out.push(context.violation("disjointed tags"));
            }
            _ => {}
        }
    }
}
