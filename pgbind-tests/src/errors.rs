use pgbind::{Driver, ErrorKind, Params, QueryError, Result, error_kind, params};

fn server_error<D: Driver>(driver: &D, query: &str, values: Params) -> QueryError {
    let mut binder = driver.server_query();
    let result;
    crate::silent_logs! {
        result = binder.convert(query, Some(values));
    }
    let error = result.expect_err(&format!("`{}` must fail", query));
    error
        .downcast::<QueryError>()
        .unwrap_or_else(|e| panic!("Unexpected error kind: {:#}", e))
}

pub fn errors<D: Driver>(driver: &D) {
    // Grammar
    assert_eq!(
        server_error(driver, "SELECT 10 % 3", params![]),
        QueryError::BarePercent
    );
    assert_eq!(
        server_error(driver, "SELECT %(id", params! { "id" => 1 }),
        QueryError::IncompletePlaceholder("%(id".into())
    );
    assert_eq!(
        server_error(driver, "SELECT %x", params![1]),
        QueryError::InvalidFormat("%x".into())
    );
    assert_eq!(
        server_error(driver, "SELECT %s, %(a)s", params![1, 2]),
        QueryError::MixedStyles
    );
    assert_eq!(
        server_error(driver, "%(a)s %(a)t", params! { "a" => 1 }),
        QueryError::FormatMismatch("a".into())
    );

    // Parameters
    assert_eq!(
        server_error(driver, "%s %s", params! { "x" => 1 }),
        QueryError::PositionalRequiresSequence
    );
    assert_eq!(
        server_error(driver, "%(a)s", params![1]),
        QueryError::NamedRequiresMapping
    );
    assert_eq!(
        server_error(driver, "%(a)s %(b)s %(c)s", params! { "b" => 1 }),
        QueryError::MissingParameters(vec!["a".into(), "c".into()])
    );
    assert_eq!(
        server_error(driver, "%s %s", params![1, 2, 3]),
        QueryError::ArityMismatch {
            expected: 2,
            actual: 3
        }
    );

    // The client binder validates the same way
    let mut binder = driver.client_query();
    let result: Result<()>;
    crate::silent_logs! {
        result = binder.convert("%(a)s %(b)s", Some(params! { "a" => 1 }));
    }
    let error = result.expect_err("A key is missing");
    assert_eq!(error_kind(&error), Some(ErrorKind::MissingKey));

    // State
    let mut binder = driver.server_query();
    let result;
    crate::silent_logs! {
        result = binder.dump(Some(params![1]));
    }
    let error = result.expect_err("Nothing was converted");
    assert_eq!(error_kind(&error), Some(ErrorKind::State));
    binder
        .dump(None)
        .expect("Clearing never fails, even before convert");
}
