//! Override tag table and argument grammars
//!
//! Each recognized tag consumes a prefix of the text following its name. The
//! argument parsers return how many bytes they consumed; whatever is left up
//! to the next backslash is free text, handled by the block parser.
//!
//! # Supported Tags
//!
//! - Toggles: `b` (0/1 or weight), `i`, `u`, `s`
//! - Alignment: `an` (1-9), `a` (legacy 1-3 + 4/8 modifiers), `q` (0-3)
//! - Numbers: `fs`, `fsc`, `fscx`, `fscy`, `fsp`, `fr`, `frx`, `fry`, `frz`, `fax`,
//!   `fay`, `bord`, `xbord`, `ybord`, `shad`, `xshad`, `yshad`, `be`, `blur`
//! - Integers: `fe`, `k`, `K`, `kf`, `ko`, `kt`, `p`, `pbo`
//! - Colors and alpha: `c`, `1c`-`4c`, `alpha`, `1a`-`4a`
//! - Free text: `fn`, `r`
//! - Parenthesized: `pos`, `org`, `move`, `fad`, `fade`, `clip`, `iclip`, `t`

use super::{parse_block, AssItem, SyntaxErrorKind};

/// Argument grammar of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// 0 or 1; `\b` also takes font weights (100-900)
    Toggle,
    /// Optional signed integer
    Integer,
    /// Optional signed decimal number
    Decimal,
    /// Integer restricted to a fixed set of values
    Choice(&'static [&'static str]),
    /// `&H<BBGGRR>&`
    Color,
    /// `&H<AA>&`
    Alpha,
    /// Free text up to the next tag (font and style names)
    Text,
    /// `(n1,n2,...)` with one of the allowed arities
    Numbers(&'static [usize]),
    /// `(x1,y1,x2,y2)` or `([scale,]drawing)`
    Clip,
    /// `([t1,t2,][accel,]\tags)`
    Transform,
}

/// Recognized tag with its argument grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// Tag name without backslash
    pub name: &'static str,
    /// Argument grammar
    pub kind: ArgKind,
    /// Whether the tag is meaningless without an argument
    pub required: bool,
}

const NUMPAD: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9"];
const LEGACY: &[&str] = &["1", "2", "3", "5", "6", "7", "9", "10", "11"];
const WRAP: &[&str] = &["0", "1", "2", "3"];

const fn spec(name: &'static str, kind: ArgKind, required: bool) -> TagSpec {
    TagSpec {
        name,
        kind,
        required,
    }
}

/// All recognized tags, longest names first so prefix lookup is greedy.
pub const TAGS: &[TagSpec] = &[
    spec("iclip", ArgKind::Clip, true),
    spec("alpha", ArgKind::Alpha, false),
    spec("fscx", ArgKind::Decimal, false),
    spec("fscy", ArgKind::Decimal, false),
    spec("xbord", ArgKind::Decimal, false),
    spec("ybord", ArgKind::Decimal, false),
    spec("xshad", ArgKind::Decimal, false),
    spec("yshad", ArgKind::Decimal, false),
    spec("move", ArgKind::Numbers(&[4, 6]), true),
    spec("fade", ArgKind::Numbers(&[7]), true),
    spec("clip", ArgKind::Clip, true),
    spec("blur", ArgKind::Decimal, false),
    spec("bord", ArgKind::Decimal, false),
    spec("shad", ArgKind::Decimal, false),
    spec("pbo", ArgKind::Integer, true),
    spec("pos", ArgKind::Numbers(&[2]), true),
    spec("org", ArgKind::Numbers(&[2]), true),
    spec("fad", ArgKind::Numbers(&[2]), true),
    spec("frx", ArgKind::Decimal, false),
    spec("fry", ArgKind::Decimal, false),
    spec("frz", ArgKind::Decimal, false),
    spec("fax", ArgKind::Decimal, false),
    spec("fay", ArgKind::Decimal, false),
    spec("fsp", ArgKind::Decimal, false),
    spec("fsc", ArgKind::Decimal, false),
    spec("fn", ArgKind::Text, false),
    spec("fs", ArgKind::Decimal, false),
    spec("fe", ArgKind::Integer, false),
    spec("fr", ArgKind::Decimal, false),
    spec("an", ArgKind::Choice(NUMPAD), true),
    spec("1c", ArgKind::Color, false),
    spec("2c", ArgKind::Color, false),
    spec("3c", ArgKind::Color, false),
    spec("4c", ArgKind::Color, false),
    spec("1a", ArgKind::Alpha, false),
    spec("2a", ArgKind::Alpha, false),
    spec("3a", ArgKind::Alpha, false),
    spec("4a", ArgKind::Alpha, false),
    spec("kf", ArgKind::Integer, true),
    spec("ko", ArgKind::Integer, true),
    spec("kt", ArgKind::Integer, true),
    spec("be", ArgKind::Decimal, false),
    spec("b", ArgKind::Toggle, false),
    spec("i", ArgKind::Toggle, false),
    spec("u", ArgKind::Toggle, false),
    spec("s", ArgKind::Toggle, false),
    spec("a", ArgKind::Choice(LEGACY), true),
    spec("q", ArgKind::Choice(WRAP), true),
    spec("k", ArgKind::Integer, true),
    spec("K", ArgKind::Integer, true),
    spec("c", ArgKind::Color, false),
    spec("r", ArgKind::Text, false),
    spec("p", ArgKind::Integer, true),
    spec("t", ArgKind::Transform, true),
];

/// Find the tag whose name is the longest prefix of `src`.
#[must_use]
pub fn lookup(src: &str) -> Option<&'static TagSpec> {
    TAGS.iter().find(|tag| src.starts_with(tag.name))
}

impl TagSpec {
    /// Parse this tag's argument at the start of `src`.
    ///
    /// Returns the number of bytes consumed; zero means the argument was
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxErrorKind::MalformedArgument`] if an argument is
    /// present but does not fit the grammar.
    pub fn parse_arg(&self, src: &str) -> Result<usize, SyntaxErrorKind> {
        match self.kind {
            ArgKind::Toggle => {
                let len = integer_prefix(src);
                let value = &src[..len];
                let valid = match value {
                    "" | "0" | "1" => true,
                    weight if self.name == "b" => is_font_weight(weight),
                    _ => false,
                };
                if valid {
                    Ok(len)
                } else {
                    Err(SyntaxErrorKind::MalformedArgument)
                }
            }
            ArgKind::Integer => Ok(integer_prefix(src)),
            ArgKind::Decimal => Ok(decimal_prefix(src)),
            ArgKind::Choice(allowed) => {
                let len = src.bytes().take_while(u8::is_ascii_digit).count();
                if len == 0 || allowed.iter().any(|value| *value == &src[..len]) {
                    Ok(len)
                } else {
                    Err(SyntaxErrorKind::MalformedArgument)
                }
            }
            ArgKind::Color => hex_prefix(src, 8),
            ArgKind::Alpha => hex_prefix(src, 2),
            ArgKind::Text => Ok(src.find('\\').unwrap_or(src.len())),
            ArgKind::Numbers(arities) => {
                let Some((inner, len)) = parenthesized(src)? else {
                    return Ok(0);
                };
                let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
                if arities.contains(&parts.len()) && parts.iter().all(|p| is_decimal(p)) {
                    Ok(len)
                } else {
                    Err(SyntaxErrorKind::MalformedArgument)
                }
            }
            ArgKind::Clip => {
                let Some((inner, len)) = parenthesized(src)? else {
                    return Ok(0);
                };
                if is_clip_args(inner) {
                    Ok(len)
                } else {
                    Err(SyntaxErrorKind::MalformedArgument)
                }
            }
            ArgKind::Transform => {
                let Some((inner, len)) = parenthesized(src)? else {
                    return Ok(0);
                };
                validate_transform(inner)?;
                Ok(len)
            }
        }
    }
}

/// Length of a leading `-?[0-9]+`, zero if none.
fn integer_prefix(src: &str) -> usize {
    let sign = usize::from(src.starts_with('-'));
    let digits = src[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

/// Length of a leading `[-+]?[0-9]+(\.[0-9]+)?` (or `.5`), zero if none.
fn decimal_prefix(src: &str) -> usize {
    let bytes = src.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let int_digits = bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = bytes[pos + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        0
    } else {
        pos
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && decimal_prefix(s) == s.len()
}

fn is_font_weight(s: &str) -> bool {
    s.parse::<u16>()
        .is_ok_and(|w| (100..=900).contains(&w) && w % 100 == 0)
}

/// `&H<hex>&` with up to `max_digits` hex digits; the closing `&` may be
/// omitted. Returns zero when the text does not start with `&`.
fn hex_prefix(src: &str, max_digits: usize) -> Result<usize, SyntaxErrorKind> {
    let Some(rest) = src.strip_prefix('&') else {
        return Ok(0);
    };
    let Some(hex) = rest.strip_prefix(['H', 'h']) else {
        return Err(SyntaxErrorKind::MalformedArgument);
    };
    let digits = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
    if digits == 0 || digits > max_digits {
        return Err(SyntaxErrorKind::MalformedArgument);
    }
    let closing = usize::from(hex[digits..].starts_with('&'));
    Ok(2 + digits + closing)
}

/// Split `(inner)rest` into `inner` and the consumed length.
///
/// `Ok(None)` when `src` does not start with `(`; nested parentheses are
/// balanced so transform arguments can carry their own tags.
fn parenthesized(src: &str) -> Result<Option<(&str, usize)>, SyntaxErrorKind> {
    if !src.starts_with('(') {
        return Ok(None);
    }
    let mut depth = 0usize;
    for (i, ch) in src.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some((&src[1..i], i + 1)));
                }
            }
            _ => {}
        }
    }
    Err(SyntaxErrorKind::MalformedArgument)
}

fn is_clip_args(inner: &str) -> bool {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [x1, y1, x2, y2] => [x1, y1, x2, y2].iter().all(|p| is_decimal(p)),
        [drawing] => is_drawing(drawing),
        [scale, drawing] => {
            scale.bytes().all(|b| b.is_ascii_digit()) && !scale.is_empty() && is_drawing(drawing)
        }
        _ => false,
    }
}

/// Vector drawing commands: `m`, `n`, `l`, `b`, `s`, `p`, `c` and numbers.
fn is_drawing(s: &str) -> bool {
    s.starts_with(['m', 'n'])
        && s.chars().all(|c| {
            matches!(c, 'm' | 'n' | 'l' | 'b' | 's' | 'p' | 'c' | '.' | '-' | ' ') || c.is_ascii_digit()
        })
}

/// Validate `[t1,t2,][accel,]\tags` inside `\t(...)`.
fn validate_transform(inner: &str) -> Result<(), SyntaxErrorKind> {
    let Some(tags_start) = inner.find('\\') else {
        return Err(SyntaxErrorKind::MalformedArgument);
    };
    let numbers = inner[..tags_start].trim();
    if !numbers.is_empty() {
        let parts: Vec<&str> = numbers
            .strip_suffix(',')
            .ok_or(SyntaxErrorKind::MalformedArgument)?
            .split(',')
            .map(str::trim)
            .collect();
        if parts.len() > 3 || !parts.iter().all(|p| is_decimal(p)) {
            return Err(SyntaxErrorKind::MalformedArgument);
        }
    }

    let mut items = Vec::new();
    parse_block(&inner[tags_start..], 0, &mut items)
        .map_err(|_| SyntaxErrorKind::MalformedArgument)?;
    if items.iter().any(|item| matches!(item, AssItem::Comment(_))) {
        return Err(SyntaxErrorKind::MalformedArgument);
    }
    Ok(())
}
