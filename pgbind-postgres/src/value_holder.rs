use crate::value_to_postgres_type;
use bytes::BytesMut;
use pgbind_core::Value;
use postgres_types::{IsNull, Kind, ToSql, Type, to_sql_checked};
use std::error::Error;

/// Borrowed [`Value`] encodable in PostgreSQL binary format.
#[derive(Debug)]
pub struct ValueHolder<'a>(pub &'a Value);

impl ToSql for ValueHolder<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>>
    where
        Self: Sized,
    {
        match self.0 {
            Value::Null => Ok(IsNull::Yes),
            Value::Boolean(v) => v.to_sql(ty, out),
            Value::Int16(v) => v.to_sql(ty, out),
            Value::Int32(v) => v.to_sql(ty, out),
            Value::Int64(v) => v.to_sql(ty, out),
            Value::Float32(v) => v.to_sql(ty, out),
            Value::Float64(v) => v.to_sql(ty, out),
            Value::Decimal(v) => v.to_sql(ty, out),
            Value::Varchar(v) => v.to_sql(ty, out),
            Value::Blob(v) => v.as_deref().to_sql(ty, out),
            Value::Date(v) => v.to_sql(ty, out),
            Value::Time(v) => v.to_sql(ty, out),
            Value::Timestamp(v) => v.to_sql(ty, out),
            Value::TimestampWithTimezone(v) => v.to_sql(ty, out),
            Value::Uuid(v) => v.to_sql(ty, out),
            Value::List(None, ..) => Ok(IsNull::Yes),
            Value::List(Some(values), ..) => {
                if let Kind::Array(member) = ty.kind()
                    && let Some(value) = values.iter().find(|v| {
                        !v.is_null() && value_to_postgres_type(v).as_ref() != Some(member)
                    })
                {
                    return Err(format!(
                        "Element of type `{}` does not fit in an array of `{}`",
                        value.type_name(),
                        member
                    )
                    .into());
                }
                values
                    .iter()
                    .map(ValueHolder)
                    .collect::<Vec<_>>()
                    .to_sql(ty, out)
            }
            Value::Map(..) => Err(pgbind_core::Error::msg(format!(
                "Value of type `{}` cannot be sent to PostgreSQL in binary format",
                self.0.type_name()
            ))
            .into()),
        }
    }

    fn accepts(_ty: &Type) -> bool
    where
        Self: Sized,
    {
        true
    }

    to_sql_checked!();
}
