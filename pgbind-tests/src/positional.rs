use indoc::indoc;
use pgbind::{Driver, PlaceholderFormat, Value, WireFormat, params};
use time::macros::date;

pub fn positional<D: Driver>(driver: &D) {
    let mut query = driver.server_query();

    // Simple
    query
        .convert("SELECT %s, %s", Some(params![1, 2]))
        .expect("Failed to convert the simple positional query");
    assert_eq!(query.query(), b"SELECT $1, $2");
    assert_eq!(query.params().map(<[_]>::len), Some(2));
    assert_eq!(query.types().len(), 2);
    assert!(query.params().unwrap().iter().all(Option::is_some));

    // Escaped percent and requested formats
    query
        .convert(
            indoc! {"
                SELECT price * 100 %% 7, %t, %b
                FROM trades
                WHERE day = %s
            "},
            Some(params![1.5, "AAPL", date!(2024 - 01 - 02)]),
        )
        .expect("Failed to convert the query with formats");
    assert_eq!(
        query.query(),
        indoc! {b"
            SELECT price * 100 % 7, $1, $2
            FROM trades
            WHERE day = $3
        "}
    );
    let formats = query.formats().expect("Formats are missing");
    assert_eq!(formats[0], WireFormat::Text);
    assert_eq!(formats[1], WireFormat::Binary);
    let compiled = query.compiled().expect("The query is not compiled");
    assert_eq!(
        compiled.formats,
        [
            PlaceholderFormat::Text,
            PlaceholderFormat::Binary,
            PlaceholderFormat::Auto
        ]
    );

    // Nulls
    query
        .convert(
            "INSERT INTO t VALUES (%s, %s, %s)",
            Some(params![Value::Null, Option::<i64>::None, 3]),
        )
        .expect("Failed to convert the query with nulls");
    let params = query.params().expect("Parameters are missing");
    assert_eq!(params[0], None);
    assert_eq!(params[1], None);
    assert!(params[2].is_some());

    // Rebinding
    let compiled = query.compiled().cloned();
    for i in 0..10 {
        query
            .dump(Some(params![i, i * 2, i * 3]))
            .expect("Failed to dump new values");
        assert_eq!(query.query(), b"INSERT INTO t VALUES ($1, $2, $3)");
        assert!(query.params().unwrap().iter().all(Option::is_some));
    }
    assert_eq!(
        compiled.as_ref().map(|c| c.params_count()),
        query.compiled().map(|c| c.params_count())
    );
    let before = query.params().map(<[_]>::to_vec);
    query.dump(Some(params![9, 18, 27])).unwrap();
    assert_eq!(query.params().map(<[_]>::to_vec), before);

    // Clearing
    query.dump(None).expect("Clearing the parameters must succeed");
    assert_eq!(query.params(), None);
    assert_eq!(query.formats(), None);
    assert!(query.types().is_empty());

    // No parameters
    query
        .convert("SELECT '50%%', %s", None)
        .expect("Failed to convert without parameters");
    assert_eq!(query.query(), b"SELECT '50%%', %s");
    query
        .convert("SELECT 1", Some(params![]))
        .expect("Failed to convert without placeholders");
    assert_eq!(query.query(), b"SELECT 1");
    assert_eq!(query.params(), Some(&[][..]));
}
