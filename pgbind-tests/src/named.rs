use indoc::indoc;
use pgbind::{Driver, Params, Value, WireFormat, params};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

pub fn named<D: Driver>(driver: &D) {
    let mut query = driver.server_query();

    // Repeated names share a marker
    query
        .convert(
            "SELECT %(a)s, %(b)t, %(a)s",
            Some(params! { "a" => 1, "b" => 2 }),
        )
        .expect("Failed to convert the named query");
    assert_eq!(query.query(), b"SELECT $1, $2, $1");
    assert_eq!(query.params().map(<[_]>::len), Some(2));
    assert_eq!(query.formats().map(|f| f[1]), Some(WireFormat::Text));
    let compiled = query.compiled().expect("The query is not compiled");
    assert_eq!(
        compiled.names.as_deref(),
        Some(&["a".to_string(), "b".to_string()][..])
    );

    // Extra keys are ignored, order follows the first occurrences
    let id = Uuid::from_u128(0x1234);
    let mut values = HashMap::new();
    values.insert("price".to_string(), Value::from(Decimal::new(1999, 2)));
    values.insert("id".to_string(), Value::from(id));
    values.insert("unused".to_string(), Value::from("nothing"));
    query
        .convert(
            indoc! {"
                UPDATE products
                SET price = %(price)s
                WHERE id = %(id)s AND price <> %(price)s
            "},
            Some(values.into()),
        )
        .expect("Failed to convert the update");
    assert_eq!(
        query.query(),
        indoc! {b"
            UPDATE products
            SET price = $1
            WHERE id = $2 AND price <> $1
        "}
    );
    assert_eq!(query.params().map(<[_]>::len), Some(2));

    // Other mapping types
    let values = BTreeMap::from([("id", Value::from(id)), ("price", Value::Decimal(None))]);
    query
        .dump(Some(values.into()))
        .expect("Failed to dump a BTreeMap");
    assert_eq!(query.params().map(|p| p[0].is_none()), Some(true));

    // Dynamic values
    let mut map = BTreeMap::new();
    map.insert("id".to_string(), Value::from(id));
    map.insert("price".to_string(), Value::from(Decimal::ONE));
    let values = Params::from_value(Value::Map(Some(map), Box::new(Value::Null)))
        .expect("A map is a valid container");
    query.dump(Some(values)).expect("Failed to dump dynamic values");
    assert!(query.params().unwrap().iter().all(Option::is_some));
}
