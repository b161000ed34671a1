//! Override block grammar
//!
//! Splits raw event text into visible text and `{...}` override blocks, and
//! parses block content into tags and free-text comments. Unlike
//! [`crate::text::plaintext`] this is strict: nested or unterminated blocks
//! and tags with malformed arguments are errors.
//!
//! # Grammar
//!
//! - Outside a block everything is text; a stray `}` is text too.
//! - Inside a block, `\\` starts a comment running to the next backslash.
//! - `\name` followed by an argument is a tag (see [`args::TAGS`]).
//! - Any other run up to the next backslash is a comment.
//! - A tag that consumed an argument may be followed by free text, which
//!   becomes a comment (`\an8note`). A tag with no argument followed by free
//!   text (`\fsherp`) is a syntax error.
//!
//! # Example
//!
//! ```rust
//! use ass_qc::tags::{parse_ass, AssItem};
//!
//! let items = parse_ass(r"{\an8}Hello")?;
//! assert_eq!(items.len(), 4);
//! assert!(matches!(items[1], AssItem::Tag(tag) if tag.name() == "an"));
//! # Ok::<(), ass_qc::tags::TagSyntaxError>(())
//! ```

pub mod args;

use core::fmt;

/// One piece of parsed event text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssItem<'a> {
    /// Visible text outside override blocks
    Text(&'a str),
    /// `{`
    BlockOpen,
    /// Recognized override tag
    Tag(AssTag<'a>),
    /// Free text inside a block
    Comment(&'a str),
    /// `}`
    BlockClose,
}

/// Parsed override tag like `\b1` or `\pos(10,20)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssTag<'a> {
    /// Tag name (e.g., "b", "pos")
    name: &'static str,
    /// Argument text as written
    args: &'a str,
    /// Byte offset of the backslash in the event text
    position: usize,
}

impl<'a> AssTag<'a> {
    /// Get tag name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get tag arguments
    #[must_use]
    pub fn args(&self) -> &'a str {
        self.args
    }

    /// Get position in the event text
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// `\a` uses the SSA alignment scheme superseded by `\an`.
    #[must_use]
    pub fn is_legacy_alignment(&self) -> bool {
        self.name == "a"
    }
}

/// Why a block failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `{` inside an open block
    NestedBlock,
    /// `{` with no matching `}`
    UnterminatedBlock,
    /// Backslash not followed by a known tag name
    UnknownTag,
    /// Tag that needs an argument has none
    MissingArgument,
    /// Argument present but malformed
    MalformedArgument,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestedBlock => write!(f, "nested override block"),
            Self::UnterminatedBlock => write!(f, "unterminated override block"),
            Self::UnknownTag => write!(f, "unknown tag"),
            Self::MissingArgument => write!(f, "missing argument"),
            Self::MalformedArgument => write!(f, "malformed argument"),
        }
    }
}

/// Syntax error with the offending fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSyntaxError {
    /// Offending text
    pub fragment: String,
    /// Byte offset in the event text
    pub position: usize,
    /// Error kind
    pub kind: SyntaxErrorKind,
}

impl fmt::Display for TagSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.fragment, self.kind)
    }
}

impl std::error::Error for TagSyntaxError {}

/// Parse raw event text into text, blocks, tags and comments.
///
/// # Errors
///
/// Returns [`TagSyntaxError`] on the first nested, unterminated or malformed
/// construct.
pub fn parse_ass(text: &str) -> Result<Vec<AssItem<'_>>, TagSyntaxError> {
    let mut items = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        if let Some(body) = rest.strip_prefix('{') {
            let Some(close) = body.find('}') else {
                return Err(TagSyntaxError {
                    fragment: rest.to_string(),
                    position: pos,
                    kind: SyntaxErrorKind::UnterminatedBlock,
                });
            };
            if body[..close].contains('{') {
                return Err(TagSyntaxError {
                    fragment: rest[..close + 2].to_string(),
                    position: pos,
                    kind: SyntaxErrorKind::NestedBlock,
                });
            }

            items.push(AssItem::BlockOpen);
            parse_block(&body[..close], pos + 1, &mut items)?;
            items.push(AssItem::BlockClose);
            pos += close + 2;
        } else {
            let end = rest.find('{').unwrap_or(rest.len());
            items.push(AssItem::Text(&rest[..end]));
            pos += end;
        }
    }

    Ok(items)
}

/// Length of one tag in `src`, up to the next backslash outside parentheses.
fn segment_len(src: &str) -> usize {
    let mut depth = 0usize;
    for (i, ch) in src.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '\\' if depth == 0 => return i,
            _ => {}
        }
    }
    src.len()
}

/// Parse the content of one block (without braces).
///
/// `offset` is the byte position of `content` in the event text.
pub(crate) fn parse_block<'a>(
    content: &'a str,
    offset: usize,
    items: &mut Vec<AssItem<'a>>,
) -> Result<(), TagSyntaxError> {
    let mut pos = 0;

    while pos < content.len() {
        let rest = &content[pos..];

        if rest.starts_with("\\\\") {
            let end = rest[2..].find('\\').map_or(rest.len(), |i| i + 2);
            items.push(AssItem::Comment(&rest[..end]));
            pos += end;
            continue;
        }

        if let Some(after) = rest.strip_prefix('\\') {
            let segment_end = segment_len(after);
            let error = |kind: SyntaxErrorKind| TagSyntaxError {
                fragment: format!("\\{}", &after[..segment_end]),
                position: offset + pos,
                kind,
            };

            let spec = args::lookup(after).ok_or_else(|| error(SyntaxErrorKind::UnknownTag))?;
            let arg_src = &after[spec.name.len()..];
            let consumed = spec.parse_arg(arg_src).map_err(error)?;
            if consumed == 0 && spec.required {
                return Err(error(SyntaxErrorKind::MissingArgument));
            }

            let trailing_end = arg_src[consumed..]
                .find('\\')
                .map_or(arg_src.len(), |i| consumed + i);
            let trailing = &arg_src[consumed..trailing_end];

            if !trailing.trim().is_empty() && consumed == 0 {
                return Err(error(SyntaxErrorKind::MalformedArgument));
            }

            items.push(AssItem::Tag(AssTag {
                name: spec.name,
                args: &arg_src[..consumed],
                position: offset + pos,
            }));
            if !trailing.trim().is_empty() {
                items.push(AssItem::Comment(trailing));
            }

            pos += 1 + spec.name.len() + trailing_end;
            continue;
        }

        let end = rest.find('\\').unwrap_or(rest.len());
        if !rest[..end].trim().is_empty() {
            items.push(AssItem::Comment(&rest[..end]));
        }
        pos += end;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_names(text: &str) -> Vec<&'static str> {
        parse_ass(text)
            .expect("valid syntax")
            .iter()
            .filter_map(|item| match item {
                AssItem::Tag(tag) => Some(tag.name()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn plain_text_only() {
        assert_eq!(parse_ass("text"), Ok(vec![AssItem::Text("text")]));
        assert_eq!(parse_ass(""), Ok(vec![]));
    }

    #[test]
    fn text_and_blocks() {
        let items = parse_ass(r"text{\b1}text").expect("valid syntax");
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], AssItem::Text("text"));
        assert_eq!(items[1], AssItem::BlockOpen);
        assert!(matches!(items[2], AssItem::Tag(tag) if tag.name() == "b" && tag.args() == "1"));
        assert_eq!(items[3], AssItem::BlockClose);
        assert_eq!(items[4], AssItem::Text("text"));
    }

    #[test]
    fn multiple_tags_in_block() {
        assert_eq!(
            tag_names(r"{\b1\i1\pos(100,200)\fscx120}x"),
            ["b", "i", "pos", "fscx"]
        );
    }

    #[test]
    fn tag_positions_are_absolute() {
        let items = parse_ass(r"ab{\i1\b1}").expect("valid syntax");
        let positions: Vec<usize> = items
            .iter()
            .filter_map(|item| match item {
                AssItem::Tag(tag) => Some(tag.position()),
                _ => None,
            })
            .collect();
        assert_eq!(positions, [3, 6]);
    }

    #[test]
    fn empty_block() {
        assert_eq!(
            parse_ass("{}"),
            Ok(vec![AssItem::BlockOpen, AssItem::BlockClose])
        );
    }

    #[test]
    fn double_backslash_comment() {
        let items = parse_ass(r"{\\comment}").expect("valid syntax");
        assert_eq!(items[1], AssItem::Comment(r"\\comment"));
    }

    #[test]
    fn comment_before_and_after_tag() {
        let items = parse_ass(r"{comment\an8}").expect("valid syntax");
        assert_eq!(items[1], AssItem::Comment("comment"));
        assert!(matches!(items[2], AssItem::Tag(tag) if tag.name() == "an"));

        let items = parse_ass(r"{\an8comment}").expect("valid syntax");
        assert!(matches!(items[1], AssItem::Tag(tag) if tag.args() == "8"));
        assert_eq!(items[2], AssItem::Comment("comment"));
    }

    #[test]
    fn whitespace_in_block_is_ignored() {
        assert_eq!(tag_names(r"{ \b1 \i1 }"), ["b", "i"]);
        let items = parse_ass(r"{ \b1 }").expect("valid syntax");
        assert!(!items.iter().any(|item| matches!(item, AssItem::Comment(_))));
    }

    #[test]
    fn glued_free_text_is_error() {
        let err = parse_ass(r"{\fsherp}").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MalformedArgument);
        assert_eq!(err.fragment, r"\fsherp");

        let err = parse_ass(r"{\comment}").unwrap_err();
        assert_eq!(err.fragment, r"\comment");
    }

    #[test]
    fn unknown_and_missing() {
        assert_eq!(
            parse_ass(r"{\xyz}").unwrap_err().kind,
            SyntaxErrorKind::UnknownTag
        );
        assert_eq!(
            parse_ass(r"{\an}").unwrap_err().kind,
            SyntaxErrorKind::MissingArgument
        );
        assert_eq!(
            parse_ass(r"{\an0}").unwrap_err().kind,
            SyntaxErrorKind::MalformedArgument
        );
    }

    #[test]
    fn block_structure_errors() {
        assert_eq!(
            parse_ass(r"{\b1").unwrap_err().kind,
            SyntaxErrorKind::UnterminatedBlock
        );
        let err = parse_ass(r"{\b1{\i1}}").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NestedBlock);
        assert_eq!(err.position, 0);
    }

    #[test]
    fn stray_closing_brace_is_text() {
        assert_eq!(parse_ass("a}b"), Ok(vec![AssItem::Text("a}b")]));
    }

    #[test]
    fn transform_with_nested_tags() {
        assert_eq!(tag_names(r"{\t(0,500,\fscx120\fscy120)\b1}x"), ["t", "b"]);
    }

    #[test]
    fn transform_error_reports_whole_tag() {
        let err = parse_ass(r"{\b1\t(0,500,\fsherp)\i1}").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::MalformedArgument);
        assert_eq!(err.fragment, r"\t(0,500,\fsherp)");
        assert_eq!(err.position, 4);
    }

    #[test]
    fn scale_reset_tag() {
        assert_eq!(tag_names(r"{\fsc}x"), ["fsc"]);
        assert_eq!(tag_names(r"{\fsc100\fscx120}x"), ["fsc", "fscx"]);
    }

    #[test]
    fn legacy_alignment_flag() {
        let items = parse_ass(r"{\a5}").expect("valid syntax");
        assert!(matches!(items[1], AssItem::Tag(tag) if tag.is_legacy_alignment()));
    }

    #[test]
    fn error_display() {
        let err = parse_ass(r"{\fsherp}").unwrap_err();
        assert_eq!(err.to_string(), r"\fsherp: malformed argument");
    }
}
