use crate::{Value, separated_by, write_offset};
use rust_decimal::Decimal;
use std::{collections::BTreeMap, fmt::Write};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format_finite($value));
        } else {
            $this.write_value_float_special($out, $value as f64);
        }
    }};
}
macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Renders values as SQL literals, the literal-encoding service used by
/// client side binding and by [`crate::Literal`].
///
/// Every method has a default suitable for a generic SQL dialect, drivers
/// override the ones their backend spells differently.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', r#""""#);
        out.push('"');
    }

    /// Render `value` as a literal, `NULL` when it is absent.
    fn write_value(&self, out: &mut String, value: &Value) {
        if value.is_null() {
            return self.write_value_none(out);
        }
        match value {
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, out, *v),
            Value::Float64(Some(v)) => write_float!(self, out, *v),
            Value::Decimal(Some(v)) => self.write_value_decimal(out, v),
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v),
            Value::Date(Some(v)) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v)) => {
                out.push('\'');
                self.write_value_time(out, v);
                out.push('\'');
            }
            Value::Timestamp(Some(v)) => self.write_value_timestamp(out, v),
            Value::TimestampWithTimezone(Some(v)) => self.write_value_timestamptz(out, v),
            Value::Uuid(Some(v)) => self.write_value_uuid(out, v),
            Value::List(Some(v), ..) => self.write_value_list(out, v),
            Value::Map(Some(v), ..) => self.write_value_map(out, v),
            _ => self.write_value_none(out),
        }
    }

    /// Rendered literal of `value`.
    fn as_literal(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value);
        out
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL")
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize])
    }

    /// NaN and the infinities, they have no numeric literal.
    fn write_value_float_special(&self, out: &mut String, value: f64) {
        out.push_str("CAST('");
        out.push_str(if value.is_nan() {
            "NaN"
        } else if value > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        });
        out.push_str("' AS DOUBLE PRECISION)");
    }

    fn write_value_decimal(&self, out: &mut String, value: &Decimal) {
        let _ = write!(out, "{}", value);
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut String, value: &Time) {
        let mut subsecond = value.nanosecond();
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}.{:0width$}",
            value.hour(),
            value.minute(),
            value.second(),
            subsecond
        );
    }

    fn write_value_timestamp(&self, out: &mut String, value: &PrimitiveDateTime) {
        out.push('\'');
        self.write_value_date(out, &value.date());
        out.push('T');
        self.write_value_time(out, &value.time());
        out.push('\'');
    }

    fn write_value_timestamptz(&self, out: &mut String, value: &OffsetDateTime) {
        out.push('\'');
        self.write_value_date(out, &value.date());
        out.push('T');
        self.write_value_time(out, &value.time());
        write_offset(out, value);
        out.push('\'');
    }

    fn write_value_uuid(&self, out: &mut String, value: &Uuid) {
        let _ = write!(out, "'{}'", value);
    }

    fn write_value_list(&self, out: &mut String, value: &[Value]) {
        out.push('[');
        separated_by(out, value, |out, v| self.write_value(out, v), ",");
        out.push(']');
    }

    fn write_value_map(&self, out: &mut String, value: &BTreeMap<String, Value>) {
        out.push('{');
        separated_by(
            out,
            value,
            |out, (k, v)| {
                self.write_value_string(out, k);
                out.push(':');
                self.write_value(out, v);
            },
            ",",
        );
        out.push('}');
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
