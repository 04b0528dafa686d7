use crate::{PostgresEncoder, PostgresSqlWriter};
use pgbind_core::{Driver, Encoding};

#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresDriver {
    encoding: Encoding,
}

impl PostgresDriver {
    /// Driver for a UTF8 connection.
    pub const fn new() -> Self {
        Self {
            encoding: Encoding::Utf8,
        }
    }

    /// Driver for a connection whose `client_encoding` is `encoding`.
    pub const fn with_encoding(encoding: Encoding) -> Self {
        Self { encoding }
    }
}

impl Driver for PostgresDriver {
    type SqlWriter = PostgresSqlWriter;
    type Encoder = PostgresEncoder;

    const NAME: &'static str = "postgres";

    fn sql_writer(&self) -> PostgresSqlWriter {
        PostgresSqlWriter {}
    }

    fn encoder(&self) -> PostgresEncoder {
        PostgresEncoder::new(self.encoding)
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}
