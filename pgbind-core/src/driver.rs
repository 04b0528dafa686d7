use crate::{ClientQuery, Encoding, RawQuery, ServerQuery, SqlWriter, ValueEncoder};

/// Bundle of the services a backend provides to the binders: the literal
/// writer, the value encoder and the text encoding of the connection.
pub trait Driver {
    type SqlWriter: SqlWriter;
    type Encoder: ValueEncoder;

    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;
    fn encoder(&self) -> Self::Encoder;
    fn encoding(&self) -> Encoding;

    /// Binder sending the parameters out of band, with `$n` markers.
    fn server_query(&self) -> ServerQuery<Self>
    where
        Self: Sized,
    {
        ServerQuery::new(self)
    }

    /// Binder embedding the parameters as literals in the query text.
    fn client_query(&self) -> ClientQuery<Self>
    where
        Self: Sized,
    {
        ClientQuery::new(self)
    }

    /// Binder for queries already written with `$n` markers.
    fn raw_query(&self) -> RawQuery<Self>
    where
        Self: Sized,
    {
        RawQuery::new(self)
    }
}
