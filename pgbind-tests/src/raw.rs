use pgbind::{Driver, QueryError, params};

pub fn raw<D: Driver>(driver: &D) {
    let mut query = driver.raw_query();
    query
        .convert("SELECT $1::int + $2, 7 % 2", Some(params![1, 2]))
        .expect("Failed to convert the raw query");
    assert_eq!(query.query(), b"SELECT $1::int + $2, 7 % 2");
    assert_eq!(query.params().map(<[_]>::len), Some(2));
    assert_eq!(query.formats().map(<[_]>::len), Some(2));

    query
        .dump(Some(params!["a", Option::<i32>::None]))
        .expect("Failed to dump the raw query");
    assert_eq!(query.params().map(|p| p[1].is_none()), Some(true));

    let result;
    crate::silent_logs! {
        result = query.dump(Some(params! { "a" => 1 }));
    }
    let error = result.expect_err("Raw queries take sequences only");
    assert_eq!(
        error.downcast_ref::<QueryError>(),
        Some(&QueryError::RawRequiresSequence)
    );
    assert_eq!(query.params().map(<[_]>::len), Some(2));
}
