use pgbind::{CacheConfig, CompileCache, CompiledServerForm, Driver, params};
use std::{sync::Arc, thread};

pub fn shared_cache<D: Driver>(driver: &D) {
    let cache = Arc::new(CompileCache::<CompiledServerForm>::new());
    let mut first = driver.server_query().with_cache(cache.clone());
    let mut second = driver.server_query().with_cache(cache.clone());
    first
        .convert("SELECT %s FROM t", Some(params![1]))
        .expect("Failed to convert the first query");
    second
        .convert("SELECT %s FROM t", Some(params![2]))
        .expect("Failed to convert the second query");
    assert!(Arc::ptr_eq(
        first.compiled().unwrap(),
        second.compiled().unwrap()
    ));
    assert_eq!(cache.len(), 1);

    // Over long queries are not cached
    let limited = Arc::new(CompileCache::with_config(CacheConfig {
        max_statement_length: 16,
        ..Default::default()
    }));
    let mut query = driver.server_query().with_cache(limited.clone());
    query
        .convert("SELECT %s FROM some_table", Some(params![1]))
        .expect("Failed to convert the long query");
    assert!(limited.is_empty());

    // Concurrent compilations agree on one form
    let encoding = driver.encoding();
    let forms = thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| {
                let cache = cache.clone();
                scope.spawn(move || {
                    cache.get_or_compile(
                        b"SELECT %(a)s, %(b)s",
                        encoding,
                        2,
                        CompiledServerForm::compile,
                    )
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().expect("Thread panicked").expect("Compilation failed"))
            .collect::<Vec<_>>()
    });
    assert!(forms.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(cache.len(), 2);
}
