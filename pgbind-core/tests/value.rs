#[cfg(test)]
mod tests {
    use pgbind_core::{
        AsValue, Encoding, GenericSqlWriter, Params, QueryError, SqlWriter, Value, params,
    };
    use rust_decimal::Decimal;
    use std::{
        borrow::Cow,
        collections::{BTreeMap, HashMap},
        str::FromStr,
    };
    use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
    use uuid::Uuid;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(Option::<String>::None.as_value().is_null());
        assert_eq!(Option::<i64>::None.as_value(), Value::Int64(None));
    }

    #[test]
    fn value_scalars() {
        assert_eq!(Value::from(true), Value::Boolean(Some(true)));
        assert_eq!(Value::from(-32768i16), Value::Int16(Some(-32768)));
        assert_eq!(Value::from(7), Value::Int32(Some(7)));
        assert_eq!(Value::from(7i64), Value::Int64(Some(7)));
        assert_eq!(Value::from(0.5f32), Value::Float32(Some(0.5)));
        assert_eq!(Value::from("hello"), Value::Varchar(Some("hello".into())));
        assert_eq!(
            Value::from(Cow::Borrowed("hello")),
            Value::Varchar(Some("hello".into()))
        );
        assert_eq!(
            Value::from(vec![1u8, 2, 3]),
            Value::Blob(Some(vec![1, 2, 3].into()))
        );
        assert_ne!(Value::from(1i16), Value::from(1i32));
    }

    #[test]
    fn value_collections() {
        let list = vec![1i32, 2].as_value();
        assert_eq!(
            list,
            Value::List(
                Some(vec![Value::Int32(Some(1)), Value::Int32(Some(2))]),
                Box::new(Value::Int32(None))
            )
        );
        assert_eq!(list.type_name(), "list");
        let map = BTreeMap::from([("a".to_string(), "x".to_string())]).as_value();
        assert_eq!(map.type_name(), "map");
        assert!(Vec::<i32>::as_empty_value().is_null());
    }

    #[test]
    fn params_from_value() {
        assert_eq!(
            Params::from_value(vec![1i32, 2].as_value()).unwrap(),
            params![1, 2]
        );
        let map = HashMap::from([("a".to_string(), 1i32)]).as_value();
        assert_eq!(Params::from_value(map).unwrap(), params! { "a" => 1 });
        for value in [
            Value::from("abc"),
            Value::from(vec![1u8, 2]),
            Value::from(5),
        ] {
            let error = Params::from_value(value.clone()).unwrap_err();
            assert_eq!(
                error.downcast_ref::<QueryError>(),
                Some(&QueryError::NotAContainer(value.type_name()))
            );
        }
        assert_eq!(
            Params::from_value(Value::from("abc"))
                .unwrap_err()
                .to_string(),
            "query parameters should be a sequence or a mapping, got varchar"
        );
    }

    #[test]
    fn generic_literals() {
        let writer = GenericSqlWriter::new();
        assert_eq!(writer.as_literal(&Value::Null), "NULL");
        assert_eq!(writer.as_literal(&Value::Varchar(None)), "NULL");
        assert_eq!(writer.as_literal(&true.into()), "true");
        assert_eq!(writer.as_literal(&(-12i64).into()), "-12");
        assert_eq!(writer.as_literal(&1.25f64.into()), "1.25");
        assert_eq!(writer.as_literal(&0.1f32.into()), "0.1");
        assert_eq!(
            writer.as_literal(&f64::NAN.into()),
            "CAST('NaN' AS DOUBLE PRECISION)"
        );
        assert_eq!(
            writer.as_literal(&f64::NEG_INFINITY.into()),
            "CAST('-Infinity' AS DOUBLE PRECISION)"
        );
        assert_eq!(
            writer.as_literal(&Decimal::from_str("-3.140").unwrap().into()),
            "-3.140"
        );
        assert_eq!(writer.as_literal(&"l'été".into()), "'l''été'");
        assert_eq!(writer.as_literal(&vec![0xCAu8, 0xFE].into()), "X'CAFE'");
        assert_eq!(
            writer.as_literal(&vec!["a".to_string(), "b".to_string()].into()),
            "['a','b']"
        );
        assert_eq!(
            writer.as_literal(&BTreeMap::from([("k".to_string(), 1i32)]).into()),
            "{'k':1}"
        );
    }

    #[test]
    fn generic_temporal_literals() {
        let writer = GenericSqlWriter::new();
        let date = Date::from_calendar_date(2025, Month::March, 9).unwrap();
        let time = Time::from_hms_milli(7, 5, 3, 250).unwrap();
        assert_eq!(writer.as_literal(&date.into()), "'2025-03-09'");
        assert_eq!(writer.as_literal(&time.into()), "'07:05:03.25'");
        assert_eq!(
            writer.as_literal(&PrimitiveDateTime::new(date, time).into()),
            "'2025-03-09T07:05:03.25'"
        );
        let offset = UtcOffset::from_hms(-3, -30, 0).unwrap();
        assert_eq!(
            writer.as_literal(
                &OffsetDateTime::new_in_offset(date, Time::MIDNIGHT, offset).into()
            ),
            "'2025-03-09T00:00:00.0-03:30'"
        );
        let offset = UtcOffset::from_hms(0, -30, 0).unwrap();
        assert_eq!(
            writer.as_literal(
                &OffsetDateTime::new_in_offset(date, Time::MIDNIGHT, offset).into()
            ),
            "'2025-03-09T00:00:00.0-00:30'"
        );
        let offset = UtcOffset::from_hms(0, 0, 15).unwrap();
        assert_eq!(
            writer.as_literal(
                &OffsetDateTime::new_in_offset(date, Time::MIDNIGHT, offset).into()
            ),
            "'2025-03-09T00:00:00.0+00:00:15'"
        );
        let uuid = Uuid::from_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            writer.as_literal(&uuid.into()),
            "'67e55044-10b1-426f-9247-bb680e5fe0c8'"
        );
    }

    #[test]
    fn encodings() {
        assert_eq!(Encoding::from_pg_name("UTF8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_pg_name("unicode").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_pg_name("ISO_8859_1").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::from_pg_name("SQL_ASCII").unwrap(), Encoding::Ascii);
        assert!(Encoding::from_pg_name("EUC_JP").is_err());
        assert_eq!(Encoding::Latin1.encode("é").unwrap().as_ref(), [0xE9]);
        assert_eq!(Encoding::Latin1.decode(&[0xE9]).unwrap(), "é");
        assert!(Encoding::Latin1.encode("€").is_err());
        assert!(Encoding::Ascii.encode("é").is_err());
        assert_eq!(Encoding::Utf8.to_string(), "UTF8");
    }
}
