use indoc::indoc;
use pgbind::{Composed, Driver, Identifier, Literal, Sql, Value, params};

pub fn client<D: Driver>(driver: &D) {
    let mut query = driver.client_query();

    // Named repeats and escaped percent
    query
        .convert(
            "SELECT %(a)s, %(a)s, '100%%'",
            Some(params! { "a" => "x" }),
        )
        .expect("Failed to convert the client query");
    assert_eq!(query.query(), b"SELECT 'x', 'x', '100%'");
    assert_eq!(query.params().map(<[_]>::len), Some(2));

    // Absent values
    query
        .dump(Some(params! { "a" => Value::Null }))
        .expect("Failed to dump a null");
    assert_eq!(query.query(), b"SELECT NULL, NULL, '100%'");

    // Quotes are escaped, percent in values is not a placeholder
    query
        .convert(
            indoc! {"
                INSERT INTO notes (body, rank)
                VALUES (%s, %s)
            "},
            Some(params!["it's 100% done", 3]),
        )
        .expect("Failed to convert the insert");
    assert_eq!(
        query.query(),
        indoc! {b"
            INSERT INTO notes (body, rank)
            VALUES ('it''s 100% done', 3)
        "}
    );

    // Without values the text is untouched
    query
        .convert("SELECT 'a%%b'", None)
        .expect("Failed to convert without values");
    assert_eq!(query.query(), b"SELECT 'a%%b'");

    // Composed
    let composed = Composed::new()
        .with(Sql::new("SELECT * FROM "))
        .with(Identifier::new("order"))
        .with(Sql::new(" WHERE status = "))
        .with(Literal::new("paid"))
        .with(Sql::new(" AND total > %s"));
    query
        .convert(&composed, Some(params![10]))
        .expect("Failed to convert the composed query");
    assert_eq!(
        query.query(),
        br#"SELECT * FROM "order" WHERE status = 'paid' AND total > 10"#
    );
}
