//! Pattern parsing.
//!
//! Turns pattern text such as `archive/:year/:(month)-:(day).html` or
//! `pages/*name` into `/`-delimited [`PathSegment`]s, each an ordered run of
//! literal and parameter [`Segment`]s.
//!
//! ## Grammar
//!
//! - `:name` - simple dynamic parameter; the name is the longest run of word
//!   characters following the sigil
//! - `:(name)` - grouped dynamic parameter; needed when literal text follows
//!   the value inside the same path segment
//! - `*name`, `*(name)` - wildcard parameter, captures one or more
//!   `/`-separated path segments
//! - anything else is literal text

use std::collections::HashSet;

use crate::error::PatternError;

/// One element of a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, never containing `/`
    Literal(String),
    /// Named parameter slot
    Param {
        /// Parameter name
        name: String,
        /// True for `*name` slots
        wildcard: bool,
    },
}

/// One `/`-delimited unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub parts: Vec<Segment>,
}

impl PathSegment {
    /// Name of the parameter when this segment is nothing but one slot.
    ///
    /// Only such segments can belong to an optional tail.
    #[must_use]
    pub fn sole_param(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [Segment::Param { name, .. }] => Some(name),
            _ => None,
        }
    }

    /// Parameter names in this segment, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Segment::Param { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// Canonical text of a pattern: one leading slash, no trailing slash.
///
/// `""`, `"/"` and `"//"` all normalize to `"/"`; `"hi/:name/"` becomes
/// `"/hi/:name"`. The normalized text is the key under which a route is
/// stored, so two patterns differing only in surrounding slashes collide.
#[must_use]
pub fn normalize_pattern(pattern: &str) -> String {
    format!("/{}", pattern.trim_matches('/'))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn check_name(pattern: &str, name: &str) -> Result<(), PatternError> {
    if name.is_empty() {
        return Err(PatternError::EmptyName {
            pattern: pattern.to_string(),
        });
    }
    let leading_ok = name.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_');
    if !leading_ok || !name.chars().all(is_word_char) {
        return Err(PatternError::InvalidName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Split one path segment into literal and parameter parts.
fn parse_segment(pattern: &str, text: &str) -> Result<PathSegment, PatternError> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c != ':' && c != '*' {
            literal.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let wildcard = c == '*';
        let after_sigil = &rest[1..];
        let (name, remaining) = if let Some(grouped) = after_sigil.strip_prefix('(') {
            let close = grouped.find(')').ok_or_else(|| PatternError::UnbalancedGroup {
                pattern: pattern.to_string(),
            })?;
            (&grouped[..close], &grouped[close + 1..])
        } else {
            let end = after_sigil
                .char_indices()
                .find(|(_, ch)| !is_word_char(*ch))
                .map_or(after_sigil.len(), |(i, _)| i);
            (&after_sigil[..end], &after_sigil[end..])
        };
        check_name(pattern, name)?;

        if !literal.is_empty() {
            parts.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        parts.push(Segment::Param {
            name: name.to_string(),
            wildcard,
        });
        rest = remaining;
    }

    if !literal.is_empty() {
        parts.push(Segment::Literal(literal));
    }
    Ok(PathSegment { parts })
}

/// Parse a pattern into its path segments.
///
/// The root pattern (`""` or `"/"`) has no segments.
///
/// # Errors
///
/// [`PatternError`] for an unclosed group, an empty or malformed name, or a
/// name used twice.
///
/// # Example
///
/// ```
/// use url_mapper::route::{parse_pattern, Segment};
///
/// let segments = parse_pattern(":controller/:(action)-:(id).html").unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].parts[1], Segment::Literal("-".into()));
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<PathSegment>, PatternError> {
    let trimmed = pattern.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let segments = trimmed
        .split('/')
        .filter(|text| !text.is_empty())
        .map(|text| parse_segment(pattern, text))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for name in segments.iter().flat_map(PathSegment::param_names) {
        if !seen.insert(name) {
            return Err(PatternError::DuplicateName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
    }

    Ok(segments)
}
