use pgbind_core::{Oid, Value};
use postgres_types::Type;

/// Server type matching a value, `None` when the server should infer it.
///
/// Lists map to the array type of their element, the element type is taken
/// from the list declaration or, when that is unknown, from the first
/// non null element.
pub fn value_to_postgres_type(value: &Value) -> Option<Type> {
    let ty = match value {
        Value::Boolean(..) => Type::BOOL,
        Value::Int16(..) => Type::INT2,
        Value::Int32(..) => Type::INT4,
        Value::Int64(..) => Type::INT8,
        Value::Float32(..) => Type::FLOAT4,
        Value::Float64(..) => Type::FLOAT8,
        Value::Decimal(..) => Type::NUMERIC,
        Value::Varchar(..) => Type::TEXT,
        Value::Blob(..) => Type::BYTEA,
        Value::Date(..) => Type::DATE,
        Value::Time(..) => Type::TIME,
        Value::Timestamp(..) => Type::TIMESTAMP,
        Value::TimestampWithTimezone(..) => Type::TIMESTAMPTZ,
        Value::Uuid(..) => Type::UUID,
        Value::List(values, inner) => {
            let element = match inner.as_ref() {
                Value::Null => values
                    .iter()
                    .flatten()
                    .find(|v| !matches!(v, Value::Null))?,
                inner => inner,
            };
            return array_type(element);
        }
        Value::Null | Value::Map(..) => return None,
    };
    Some(ty)
}

fn array_type(element: &Value) -> Option<Type> {
    let ty = match element {
        Value::Boolean(..) => Type::BOOL_ARRAY,
        Value::Int16(..) => Type::INT2_ARRAY,
        Value::Int32(..) => Type::INT4_ARRAY,
        Value::Int64(..) => Type::INT8_ARRAY,
        Value::Float32(..) => Type::FLOAT4_ARRAY,
        Value::Float64(..) => Type::FLOAT8_ARRAY,
        Value::Decimal(..) => Type::NUMERIC_ARRAY,
        Value::Varchar(..) => Type::TEXT_ARRAY,
        Value::Blob(..) => Type::BYTEA_ARRAY,
        Value::Date(..) => Type::DATE_ARRAY,
        Value::Time(..) => Type::TIME_ARRAY,
        Value::Timestamp(..) => Type::TIMESTAMP_ARRAY,
        Value::TimestampWithTimezone(..) => Type::TIMESTAMPTZ_ARRAY,
        Value::Uuid(..) => Type::UUID_ARRAY,
        _ => return None,
    };
    Some(ty)
}

pub fn value_to_oid(value: &Value) -> Oid {
    value_to_postgres_type(value).map_or(0, |ty| ty.oid())
}
