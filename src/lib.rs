//! Placeholder scanning, query compilation and parameter binding for
//! PostgreSQL-compatible servers.
//!
//! Queries use `%s`, `%t`, `%b` or `%(name)s` placeholders. A [`ServerQuery`]
//! rewrites them to `$n` markers and encodes the values out of band, a
//! [`ClientQuery`] embeds the values in the query as literals.
//!
//! ```rust,ignore
//! use pgbind::{Driver, params};
//! use pgbind_postgres::PostgresDriver;
//!
//! let mut query = PostgresDriver::new().server_query();
//! query.convert("SELECT %(a)s, %(b)t, %(a)s", Some(params! { "a" => 1, "b" => 2 }))?;
//! assert_eq!(query.query(), b"SELECT $1, $2, $1");
//! ```
pub use pgbind_core::*;
