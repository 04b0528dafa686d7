use std::borrow::Cow;
use time::OffsetDateTime;

pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Lossy view of query bytes, for messages only.
pub fn printable(query: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(query)
}

/// Text from `input` up to the first whitespace, used to quote the offending placeholder.
pub fn first_word(input: &[u8]) -> &[u8] {
    let end = input
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(input.len());
    &input[..end]
}

/// Length in bytes of the UTF-8 sequence starting with `lead`.
pub fn utf8_len(lead: u8) -> usize {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

/// Longest prefix of `value` not exceeding `max` bytes that ends on a char boundary.
pub fn truncate_str(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// `+HH:MM` offset, seconds included only when present.
pub fn write_offset(out: &mut String, value: &OffsetDateTime) {
    let (hours, minutes, seconds) = value.offset().as_hms();
    let sign = if value.offset().is_negative() { '-' } else { '+' };
    let mut buffer = itoa::Buffer::new();
    out.push(sign);
    for (i, part) in [hours, minutes, seconds].into_iter().enumerate() {
        if i == 2 && part == 0 {
            break;
        }
        if i > 0 {
            out.push(':');
        }
        let part = part.unsigned_abs();
        if part < 10 {
            out.push('0');
        }
        out.push_str(buffer.format(part));
    }
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            $crate::truncate_str(::std::convert::AsRef::<str>::as_ref(&$query), 497).trim_end(),
            if ::std::convert::AsRef::<str>::as_ref(&$query).len() > 497 {
                "..."
            } else {
                ""
            },
        )
    };
}
