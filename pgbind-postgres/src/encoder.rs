use crate::{PostgresSqlWriter, ValueHolder, value_to_postgres_type};
use bytes::BytesMut;
use pgbind_core::{
    Context, DumpedParams, Encoding, Error, Oid, PlaceholderFormat, Result, SqlWriter, Value,
    ValueEncoder, WireFormat, separated_by, write_offset,
};
use postgres_types::ToSql;
use std::fmt::Write;

/// Encodes parameters for the extended query protocol.
///
/// `%s` picks binary for every value with a binary representation, except
/// strings: they are sent as text with no declared type so the server can
/// cast them to whatever the context requires.
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresEncoder {
    encoding: Encoding,
    writer: PostgresSqlWriter,
}

impl PostgresEncoder {
    pub const fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            writer: PostgresSqlWriter {},
        }
    }

    /// Buffer, type and format of a single value.
    pub fn dump(
        &self,
        value: &Value,
        format: PlaceholderFormat,
    ) -> Result<(Option<Vec<u8>>, Oid, WireFormat)> {
        let ty = value_to_postgres_type(value);
        let untyped_text = matches!(value, Value::Varchar(..)) && format != PlaceholderFormat::Binary;
        let wire = match format {
            PlaceholderFormat::Text => WireFormat::Text,
            PlaceholderFormat::Binary => WireFormat::Binary,
            PlaceholderFormat::Auto if untyped_text || ty.is_none() => WireFormat::Text,
            PlaceholderFormat::Auto => WireFormat::Binary,
        };
        let oid = match &ty {
            Some(ty) if !untyped_text => ty.oid(),
            _ => 0,
        };
        if value.is_null() {
            return Ok((None, oid, wire));
        }
        let buffer = match wire {
            WireFormat::Binary => {
                let Some(ty) = ty else {
                    return Err(Error::msg(format!(
                        "Value of type `{}` has no PostgreSQL binary representation",
                        value.type_name()
                    )));
                };
                let mut out = BytesMut::new();
                ValueHolder(value).to_sql(&ty, &mut out).map_err(Error::msg)?;
                out.to_vec()
            }
            WireFormat::Text => {
                let mut out = String::new();
                self.write_text(&mut out, value)?;
                self.encoding.encode(&out)?.into_owned()
            }
        };
        Ok((Some(buffer), oid, wire))
    }

    /// PostgreSQL text input representation of `value`.
    pub fn write_text(&self, out: &mut String, value: &Value) -> Result<()> {
        match value {
            Value::Null => out.push_str("NULL"),
            Value::Boolean(Some(v)) => out.push(if *v { 't' } else { 'f' }),
            Value::Int16(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Int32(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Int64(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Float32(Some(v)) if v.is_finite() => {
                out.push_str(ryu::Buffer::new().format_finite(*v))
            }
            Value::Float64(Some(v)) if v.is_finite() => {
                out.push_str(ryu::Buffer::new().format_finite(*v))
            }
            Value::Float32(Some(v)) => write_special(out, *v as f64),
            Value::Float64(Some(v)) => write_special(out, *v),
            Value::Decimal(Some(v)) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(Some(v)) => out.push_str(v),
            Value::Blob(Some(v)) => {
                out.push_str("\\x");
                out.push_str(&hex::encode(v));
            }
            Value::Date(Some(v)) => self.writer.write_value_date(out, v),
            Value::Time(Some(v)) => self.writer.write_value_time(out, v),
            Value::Timestamp(Some(v)) => {
                self.writer.write_value_date(out, &v.date());
                out.push(' ');
                self.writer.write_value_time(out, &v.time());
            }
            Value::TimestampWithTimezone(Some(v)) => {
                self.writer.write_value_date(out, &v.date());
                out.push(' ');
                self.writer.write_value_time(out, &v.time());
                write_offset(out, v);
            }
            Value::Uuid(Some(v)) => {
                let _ = write!(out, "{}", v.hyphenated());
            }
            Value::List(Some(v), ..) => {
                out.push('{');
                let mut result = Ok(());
                separated_by(
                    out,
                    v,
                    |out, v| {
                        if result.is_ok() {
                            result = self.write_array_element(out, v);
                        }
                    },
                    ",",
                );
                result?;
                out.push('}');
            }
            Value::Map(..) => {
                return Err(Error::msg(format!(
                    "Value of type `{}` cannot be sent to PostgreSQL as a parameter",
                    value.type_name()
                )));
            }
            _ => out.push_str("NULL"),
        }
        Ok(())
    }

    fn write_array_element(&self, out: &mut String, value: &Value) -> Result<()> {
        if value.is_null() {
            out.push_str("NULL");
            return Ok(());
        }
        if matches!(value, Value::List(..)) {
            return self.write_text(out, value);
        }
        let mut element = String::new();
        self.write_text(&mut element, value)?;
        let quote = matches!(value, Value::Varchar(..) | Value::Blob(..))
            || element.is_empty()
            || element.eq_ignore_ascii_case("null")
            || element
                .chars()
                .any(|c| matches!(c, '{' | '}' | ',' | '"' | '\\') || c.is_whitespace());
        if quote {
            out.push('"');
            for c in element.chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(&element);
        }
        Ok(())
    }
}

impl ValueEncoder for PostgresEncoder {
    fn dump_sequence(
        &self,
        values: &[Value],
        formats: &[PlaceholderFormat],
    ) -> Result<DumpedParams> {
        let mut result = DumpedParams {
            params: Vec::with_capacity(values.len()),
            types: Vec::with_capacity(values.len()),
            formats: Vec::with_capacity(values.len()),
        };
        for (i, value) in values.iter().enumerate() {
            let format = formats.get(i).copied().unwrap_or_default();
            let (buffer, oid, wire) = self.dump(value, format).with_context(|| {
                format!(
                    "Could not encode parameter ${} of type `{}`",
                    i + 1,
                    value.type_name()
                )
            })?;
            result.params.push(buffer);
            result.types.push(oid);
            result.formats.push(wire);
        }
        Ok(result)
    }
}

fn write_special(out: &mut String, value: f64) {
    out.push_str(if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    });
}
