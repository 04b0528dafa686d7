#[cfg(test)]
mod tests {
    use pgbind_core::{
        AsQuery, Composable, Composed, Encoding, GenericSqlWriter, Identifier, Literal,
        Placeholder, PlaceholderFormat, Sql, Value,
    };

    #[test]
    fn render_fragments() {
        let writer = GenericSqlWriter::new();
        assert_eq!(Sql::new("SELECT 1").as_string(&writer), "SELECT 1");
        assert_eq!(Identifier::new("a\"b").as_string(&writer), r#""a""b""#);
        assert_eq!(
            Identifier::qualified(["public", "users"]).as_string(&writer),
            r#""public"."users""#
        );
        assert_eq!(Literal::new(42).as_string(&writer), "42");
        assert_eq!(Literal(Value::Null).as_string(&writer), "NULL");
        assert_eq!(
            Placeholder::new(PlaceholderFormat::Binary).as_string(&writer),
            "%b"
        );
        assert_eq!(
            Placeholder::named("id", PlaceholderFormat::Auto)
                .unwrap()
                .as_string(&writer),
            "%(id)s"
        );
        assert!(Placeholder::named("a)b", PlaceholderFormat::Auto).is_err());
        assert!(Placeholder::named("", PlaceholderFormat::Text).is_err());
    }

    #[test]
    fn join_and_compose() {
        let writer = GenericSqlWriter::new();
        let names = ["id", "name", "email"];
        let query = Composed::new()
            .with(Sql::new("INSERT INTO "))
            .with(Identifier::new("users"))
            .with(Sql::new(" ("))
            .with(Sql::new(", ").join(names.map(Identifier::new)))
            .with(Sql::new(") VALUES ("))
            .with(Sql::new(", ").join(
                names.map(|name| Placeholder::named(name, PlaceholderFormat::Auto).unwrap()),
            ))
            .with(Sql::new(")"));
        assert_eq!(
            query.as_string(&writer),
            r#"INSERT INTO "users" ("id", "name", "email") VALUES (%(id)s, %(name)s, %(email)s)"#
        );
        assert!(Sql::new(", ").join(Vec::<Sql>::new()).as_string(&writer).is_empty());
    }

    #[test]
    fn query_bytes() {
        let writer = GenericSqlWriter::new();
        let literal = Literal::new("café");
        assert_eq!(
            literal
                .as_query_bytes(&writer, Encoding::Latin1)
                .unwrap()
                .as_ref(),
            b"'caf\xe9'"
        );
        assert_eq!(
            "SELECT 1".as_query_bytes(&writer, Encoding::Utf8).unwrap().as_ref(),
            b"SELECT 1"
        );
        let raw = b"SELECT \xff".to_vec();
        assert_eq!(
            raw.as_query_bytes(&writer, Encoding::Utf8).unwrap().as_ref(),
            b"SELECT \xff"
        );
        assert!(Literal::new("€")
            .as_query_bytes(&writer, Encoding::Latin1)
            .is_err());
    }
}
