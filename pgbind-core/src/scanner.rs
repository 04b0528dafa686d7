use crate::{Encoding, PlaceholderFormat, QueryError, Result, first_word, printable, utf8_len};
use std::{
    cmp::min,
    fmt::{self, Display},
    mem,
};

/// How placeholders are identified in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// `%s`, identified by occurrence order.
    Positional,
    /// `%(name)s`, identified by name and reusable.
    Named,
}

/// Identifier of a placeholder: its 0-based position among the placeholders
/// or its decoded name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaceholderKey {
    Position(usize),
    Name(String),
}

impl PlaceholderKey {
    pub fn style(&self) -> PlaceholderStyle {
        match self {
            PlaceholderKey::Position(..) => PlaceholderStyle::Positional,
            PlaceholderKey::Name(..) => PlaceholderStyle::Named,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PlaceholderKey::Name(name) => Some(name),
            PlaceholderKey::Position(..) => None,
        }
    }
}

impl Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKey::Position(i) => write!(f, "{}", i),
            PlaceholderKey::Name(name) => f.write_str(name),
        }
    }
}

/// A placeholder together with the literal bytes preceding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPart {
    pub prefix: Vec<u8>,
    pub key: PlaceholderKey,
    pub format: PlaceholderFormat,
}

/// Output of [`scan`]: the placeholders in occurrence order and the literal
/// bytes following the last one.
///
/// All the keys have the same [`PlaceholderStyle`], queries mixing the two
/// styles are rejected while scanning.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub parts: Vec<QueryPart>,
    pub tail: Vec<u8>,
}

impl ParsedQuery {
    pub fn placeholders_count(&self) -> usize {
        self.parts.len()
    }

    /// Style shared by every placeholder, `None` when there are none.
    pub fn style(&self) -> Option<PlaceholderStyle> {
        self.parts.first().map(|part| part.key.style())
    }
}

fn lossy(encoding: Encoding, bytes: &[u8]) -> String {
    encoding
        .decode(bytes)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| printable(bytes).into_owned())
}

/// Split `query` into literal text and placeholders.
///
/// `%%` is an escaped percent: it becomes `%` when `collapse_escaped_percent`
/// is set and stays `%%` otherwise, so that a later `%` substitution step
/// still sees it escaped.
pub fn scan(
    query: &[u8],
    encoding: Encoding,
    collapse_escaped_percent: bool,
) -> Result<ParsedQuery> {
    let mut parts = Vec::new();
    let mut literal = Vec::with_capacity(query.len());
    let mut style = None;
    let mut cursor = 0;
    while let Some(offset) = query[cursor..].iter().position(|b| *b == b'%') {
        let start = cursor + offset;
        literal.extend_from_slice(&query[cursor..start]);
        let rest = &query[start + 1..];
        let (name, format_char, len) = match rest.first() {
            Some(b'%') => {
                literal.extend_from_slice(if collapse_escaped_percent {
                    b"%"
                } else {
                    b"%%"
                });
                cursor = start + 2;
                continue;
            }
            None => return Err(QueryError::BarePercent.into()),
            Some(c) if c.is_ascii_whitespace() => return Err(QueryError::BarePercent.into()),
            Some(b'(') => {
                let incomplete = || {
                    QueryError::IncompletePlaceholder(lossy(encoding, first_word(&query[start..])))
                };
                let close = rest[1..]
                    .iter()
                    .position(|b| *b == b')')
                    .filter(|close| *close > 0)
                    .ok_or_else(incomplete)?;
                let format_char = *rest.get(close + 2).ok_or_else(incomplete)?;
                (Some(&rest[1..close + 1]), format_char, close + 4)
            }
            Some(c) => (None, *c, 2),
        };
        let Some(format) = PlaceholderFormat::from_char(format_char) else {
            let end = min(start + len - 1 + utf8_len(format_char), query.len());
            return Err(QueryError::InvalidFormat(lossy(encoding, &query[start..end])).into());
        };
        let key = match name {
            Some(name) => PlaceholderKey::Name(
                encoding
                    .decode(name)
                    .map_err(|_| QueryError::InvalidName(printable(name).into_owned()))?
                    .into_owned(),
            ),
            None => PlaceholderKey::Position(parts.len()),
        };
        match style {
            None => style = Some(key.style()),
            Some(style) if style != key.style() => return Err(QueryError::MixedStyles.into()),
            Some(..) => {}
        }
        parts.push(QueryPart {
            prefix: mem::take(&mut literal),
            key,
            format,
        });
        cursor = start + len;
    }
    literal.extend_from_slice(&query[cursor..]);
    Ok(ParsedQuery {
        parts,
        tail: literal,
    })
}
