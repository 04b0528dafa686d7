use pgbind_core::{SqlWriter, Value, separated_by, write_offset};
use std::collections::BTreeMap;
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

/// PostgreSQL literals: typed casts for temporal values, `ARRAY[...]` lists
/// and escape strings when a backslash is present.
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresSqlWriter {}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_value_float_special(&self, out: &mut String, value: f64) {
        out.push_str(if value.is_nan() {
            "'NaN'"
        } else if value > 0.0 {
            "'Infinity'"
        } else {
            "'-Infinity'"
        });
        out.push_str("::float8");
    }

    fn write_value_string(&self, out: &mut String, value: &str) {
        if value.contains('\\') {
            out.push_str("E'");
            for c in value.chars() {
                match c {
                    '\'' => out.push_str("''"),
                    '\\' => out.push_str("\\\\"),
                    c => out.push(c),
                }
            }
        } else {
            out.push('\'');
            self.write_escaped(out, value, '\'', "''");
        }
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        out.push_str(&hex::encode(value));
        out.push_str("'::bytea");
    }

    fn write_value_timestamp(&self, out: &mut String, value: &PrimitiveDateTime) {
        out.push('\'');
        self.write_value_date(out, &value.date());
        out.push(' ');
        self.write_value_time(out, &value.time());
        out.push_str("'::timestamp");
    }

    fn write_value_timestamptz(&self, out: &mut String, value: &OffsetDateTime) {
        out.push('\'');
        self.write_value_date(out, &value.date());
        out.push(' ');
        self.write_value_time(out, &value.time());
        write_offset(out, value);
        out.push_str("'::timestamptz");
    }

    fn write_value_uuid(&self, out: &mut String, value: &Uuid) {
        out.push('\'');
        out.push_str(value.hyphenated().encode_lower(&mut Uuid::encode_buffer()));
        out.push_str("'::uuid");
    }

    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Date(Some(v)) => {
                self.write_typed(out, "date", |out| self.write_value_date(out, v))
            }
            Value::Time(Some(v)) => {
                self.write_typed(out, "time", |out| self.write_value_time(out, v))
            }
            _ if value.is_null() => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int16(Some(v)) => self.write_integer(out, *v as i64),
            Value::Int32(Some(v)) => self.write_integer(out, *v as i64),
            Value::Int64(Some(v)) => self.write_integer(out, *v),
            Value::Float32(Some(v)) if !v.is_finite() => {
                self.write_value_float_special(out, *v as f64)
            }
            Value::Float32(Some(v)) => {
                write_negative_space(out, v.is_sign_negative());
                out.push_str(ryu::Buffer::new().format_finite(*v));
                out.push_str("::float4");
            }
            Value::Float64(Some(v)) if !v.is_finite() => self.write_value_float_special(out, *v),
            Value::Float64(Some(v)) => {
                write_negative_space(out, v.is_sign_negative());
                out.push_str(ryu::Buffer::new().format_finite(*v));
            }
            Value::Decimal(Some(v)) => {
                write_negative_space(out, v.is_sign_negative());
                self.write_value_decimal(out, v);
            }
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(out, v),
            Value::TimestampWithTimezone(Some(v)) => self.write_value_timestamptz(out, v),
            Value::Uuid(Some(v)) => self.write_value_uuid(out, v),
            Value::List(Some(v), ..) => self.write_value_list(out, v),
            Value::Map(Some(v), ..) => self.write_value_map(out, v),
            _ => self.write_value_none(out),
        }
    }

    fn write_value_list(&self, out: &mut String, value: &[Value]) {
        if value.is_empty() {
            out.push_str("'{}'");
            return;
        }
        out.push_str("ARRAY[");
        separated_by(out, value, |out, v| self.write_value(out, v), ",");
        out.push(']');
    }

    /// Maps have no literal of their own, they become `jsonb` objects.
    fn write_value_map(&self, out: &mut String, value: &BTreeMap<String, Value>) {
        out.push_str("jsonb_build_object(");
        separated_by(
            out,
            value,
            |out, (k, v)| {
                self.write_value_string(out, k);
                out.push(',');
                self.write_value(out, v);
            },
            ",",
        );
        out.push(')');
    }
}

impl PostgresSqlWriter {
    fn write_typed(&self, out: &mut String, ty: &str, write: impl FnOnce(&mut String)) {
        out.push('\'');
        write(out);
        out.push_str("'::");
        out.push_str(ty);
    }

    fn write_integer(&self, out: &mut String, value: i64) {
        write_negative_space(out, value < 0);
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(value));
    }
}

/// Negative numbers are preceded by a space, `5 -%s` must not become a comment.
fn write_negative_space(out: &mut String, negative: bool) {
    if negative {
        out.push(' ');
    }
}
