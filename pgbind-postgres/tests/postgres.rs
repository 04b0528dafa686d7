#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pgbind_core::{
        Driver, Encoding, PlaceholderFormat, SqlWriter, Value, ValueEncoder, WireFormat, params,
    };
    use pgbind_postgres::{PostgresDriver, PostgresEncoder, PostgresSqlWriter, value_to_oid};
    use pgbind_tests::{execute_tests, init_logs, silent_logs};
    use postgres_types::Type;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn postgres() {
        init_logs();
        execute_tests(PostgresDriver::new());
        execute_tests(PostgresDriver::with_encoding(Encoding::Latin1));
    }

    #[test]
    fn type_oids() {
        assert_eq!(value_to_oid(&Value::Null), 0);
        assert_eq!(value_to_oid(&Value::Int32(None)), Type::INT4.oid());
        assert_eq!(value_to_oid(&Value::Varchar(None)), Type::TEXT.oid());
        assert_eq!(value_to_oid(&vec![1i64, 2].into()), Type::INT8_ARRAY.oid());
        assert_eq!(
            value_to_oid(&Value::List(
                Some(vec![Value::Null, Value::Uuid(Some(Uuid::nil()))]),
                Box::new(Value::Null)
            )),
            Type::UUID_ARRAY.oid()
        );
        assert_eq!(
            value_to_oid(&Value::List(Some(vec![]), Box::new(Value::Null))),
            0
        );
    }

    #[test]
    fn auto_format() {
        let encoder = PostgresEncoder::new(Encoding::Utf8);
        let dumped = encoder
            .dump_sequence(
                &[
                    Value::from(1),
                    Value::from("one"),
                    Value::Null,
                    Value::Int64(None),
                ],
                &[PlaceholderFormat::Auto; 4],
            )
            .unwrap();
        assert_eq!(
            dumped.params,
            [Some(vec![0, 0, 0, 1]), Some(b"one".to_vec()), None, None]
        );
        assert_eq!(dumped.types, [Type::INT4.oid(), 0, 0, Type::INT8.oid()]);
        assert_eq!(
            dumped.formats,
            [
                WireFormat::Binary,
                WireFormat::Text,
                WireFormat::Text,
                WireFormat::Binary
            ]
        );
    }

    #[test]
    fn requested_formats() {
        let encoder = PostgresEncoder::new(Encoding::Utf8);
        let (buffer, oid, wire) = encoder
            .dump(&Value::from(-7i16), PlaceholderFormat::Text)
            .unwrap();
        assert_eq!(buffer, Some(b"-7".to_vec()));
        assert_eq!(oid, Type::INT2.oid());
        assert_eq!(wire, WireFormat::Text);

        let (buffer, oid, wire) = encoder
            .dump(&Value::from("abc"), PlaceholderFormat::Binary)
            .unwrap();
        assert_eq!(buffer, Some(b"abc".to_vec()));
        assert_eq!(oid, Type::TEXT.oid());
        assert_eq!(wire, WireFormat::Binary);

        let (buffer, ..) = encoder
            .dump(&Value::from(true), PlaceholderFormat::Binary)
            .unwrap();
        assert_eq!(buffer, Some(vec![1]));

        assert!(
            encoder
                .dump(&Value::Map(Some(Default::default()), Box::new(Value::Null)), PlaceholderFormat::Auto)
                .is_err()
        );
    }

    #[test]
    fn mixed_array_elements() {
        let encoder = PostgresEncoder::new(Encoding::Utf8);
        let mixed = Value::List(
            Some(vec![Value::Int32(Some(1)), Value::Int64(Some(2))]),
            Box::new(Value::Int32(None)),
        );
        let error = encoder
            .dump_sequence(&[mixed.clone()], &[PlaceholderFormat::Auto])
            .unwrap_err();
        assert!(format!("{:#}", error).contains("`int64`"), "{:#}", error);

        let nullable = Value::List(
            Some(vec![Value::Int32(Some(1)), Value::Int64(None), Value::Null]),
            Box::new(Value::Int32(None)),
        );
        let dumped = encoder
            .dump_sequence(&[nullable], &[PlaceholderFormat::Auto])
            .unwrap();
        assert_eq!(dumped.types, [Type::INT4_ARRAY.oid()]);

        let (buffer, ..) = encoder.dump(&mixed, PlaceholderFormat::Text).unwrap();
        assert_eq!(buffer, Some(b"{1,2}".to_vec()));
    }

    #[test]
    fn text_representation() {
        let encoder = PostgresEncoder::new(Encoding::Utf8);
        let text = |value: Value| {
            let mut out = String::new();
            encoder.write_text(&mut out, &value).unwrap();
            out
        };
        assert_eq!(text(false.into()), "f");
        assert_eq!(text(f64::INFINITY.into()), "Infinity");
        assert_eq!(text(f32::NAN.into()), "NaN");
        assert_eq!(text(Decimal::from_str("12.500").unwrap().into()), "12.500");
        assert_eq!(text(vec![0x00u8, 0xAB].into()), "\\x00ab");
        assert_eq!(text(date!(2024 - 02 - 29).into()), "2024-02-29");
        assert_eq!(
            text(datetime!(2024-02-29 23:59:58.5).into()),
            "2024-02-29 23:59:58.5"
        );
        assert_eq!(
            text(datetime!(2024-02-29 10:00 +05:30).into()),
            "2024-02-29 10:00:00.0+05:30"
        );
        assert_eq!(
            text(vec!["a b".to_string(), "q\"x".to_string(), "null".to_string()].into()),
            r#"{"a b","q\"x","null"}"#
        );
        assert_eq!(
            text(vec![Some(1i32), None, Some(3)].into()),
            "{1,NULL,3}"
        );
    }

    #[test]
    fn text_is_encoded() {
        let encoder = PostgresEncoder::new(Encoding::Latin1);
        let (buffer, ..) = encoder
            .dump(&Value::from("été"), PlaceholderFormat::Auto)
            .unwrap();
        assert_eq!(buffer, Some(vec![0xE9, b't', 0xE9]));
        silent_logs! {
            let encoder = PostgresEncoder::new(Encoding::Ascii);
            assert!(encoder.dump(&Value::from("été"), PlaceholderFormat::Auto).is_err());
        }
    }

    #[test]
    fn literals() {
        let writer = PostgresSqlWriter {};
        assert_eq!(writer.as_literal(&Value::from(-5)), " -5");
        assert_eq!(writer.as_literal(&Value::from(2.5f32)), "2.5::float4");
        assert_eq!(writer.as_literal(&Value::from(f64::NAN)), "'NaN'::float8");
        assert_eq!(writer.as_literal(&Value::from("o'k")), "'o''k'");
        assert_eq!(writer.as_literal(&Value::from(r"C:\dir")), r"E'C:\\dir'");
        assert_eq!(
            writer.as_literal(&Value::from(vec![0xDEu8, 0xAD])),
            r"'\xdead'::bytea"
        );
        assert_eq!(
            writer.as_literal(&Value::from(date!(2020 - 01 - 31))),
            "'2020-01-31'::date"
        );
        assert_eq!(
            writer.as_literal(&Value::from(time!(08:30))),
            "'08:30:00.0'::time"
        );
        assert_eq!(
            writer.as_literal(&Value::from(datetime!(2020-01-31 08:30 -02:00))),
            "'2020-01-31 08:30:00.0-02:00'::timestamptz"
        );
        assert_eq!(
            writer.as_literal(&Value::from(datetime!(2024-01-01 10:00 -00:30))),
            "'2024-01-01 10:00:00.0-00:30'::timestamptz"
        );
        assert_eq!(
            writer.as_literal(&Value::from(Uuid::nil())),
            "'00000000-0000-0000-0000-000000000000'::uuid"
        );
        assert_eq!(
            writer.as_literal(&Value::from(vec![1i32, -2])),
            "ARRAY[1, -2]"
        );
        assert_eq!(writer.as_literal(&Value::from(Vec::<i32>::new())), "'{}'");
        assert_eq!(writer.as_literal(&Value::Int32(None)), "NULL");
    }

    #[test]
    fn client_query_literals() {
        let driver = PostgresDriver::new();
        let mut query = driver.client_query();
        query
            .convert(
                indoc! {"
                    SELECT *
                    FROM events
                    WHERE day = %(day)s AND delta > 5 -%(delta)s
                "},
                Some(params! { "day" => date!(2023 - 10 - 01), "delta" => -3 }),
            )
            .unwrap();
        assert_eq!(
            query.query(),
            indoc! {b"
                SELECT *
                FROM events
                WHERE day = '2023-10-01'::date AND delta > 5 - -3
            "}
        );
    }

    #[test]
    fn server_query_binary() {
        let driver = PostgresDriver::new();
        let mut query = driver.server_query();
        query
            .convert(
                "INSERT INTO t VALUES (%(id)s, %(name)t, %(id)s)",
                Some(params! { "id" => 258i64, "name" => "x" }),
            )
            .unwrap();
        assert_eq!(query.query(), b"INSERT INTO t VALUES ($1, $2, $1)");
        assert_eq!(
            query.params(),
            Some(&[Some(vec![0, 0, 0, 0, 0, 0, 1, 2]), Some(b"x".to_vec())][..])
        );
        assert_eq!(query.types(), [Type::INT8.oid(), 0]);
        assert_eq!(
            query.formats(),
            Some(&[WireFormat::Binary, WireFormat::Text][..])
        );
    }
}
