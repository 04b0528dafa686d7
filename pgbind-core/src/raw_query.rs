use crate::{
    AsQuery, Context, Driver, DumpedParams, Encoding, Oid, Params, PlaceholderFormat, QueryError,
    Result, SqlWriter, ValueEncoder, WireFormat, printable, truncate_long,
};

/// Binder for queries already written with the server's `$n` markers.
///
/// The query is sent untouched, the values must be a sequence and their
/// format is always left to the encoder.
pub struct RawQuery<D: Driver> {
    writer: D::SqlWriter,
    encoder: D::Encoder,
    encoding: Encoding,
    converted: bool,
    query: Vec<u8>,
    params: Option<Vec<Option<Vec<u8>>>>,
    types: Vec<Oid>,
    formats: Option<Vec<WireFormat>>,
}

impl<D: Driver> RawQuery<D> {
    pub fn new(driver: &D) -> Self {
        Self {
            writer: driver.sql_writer(),
            encoder: driver.encoder(),
            encoding: driver.encoding(),
            converted: false,
            query: Vec::new(),
            params: None,
            types: Vec::new(),
            formats: None,
        }
    }

    pub fn convert<Q: AsQuery + ?Sized>(&mut self, query: &Q, values: Option<Params>) -> Result<()> {
        let result = query
            .as_query_bytes(self.writer.as_dyn(), self.encoding)
            .context("Could not render the query text")
            .and_then(|bytes| {
                let bytes = bytes.into_owned();
                let dumped = values.map(|v| self.bind(&bytes, v)).transpose()?;
                Ok((bytes, dumped))
            });
        match result {
            Ok((query, dumped)) => {
                self.query = query;
                self.converted = true;
                self.publish(dumped);
                Ok(())
            }
            Err(e) => {
                log::error!("{:#}", e);
                Err(e)
            }
        }
    }

    pub fn dump(&mut self, values: Option<Params>) -> Result<()> {
        let Some(values) = values else {
            self.publish(None);
            return Ok(());
        };
        let result = if self.converted {
            self.bind(&self.query, values)
        } else {
            Err(QueryError::NotCompiled.into())
        };
        match result {
            Ok(dumped) => {
                self.publish(Some(dumped));
                Ok(())
            }
            Err(e) => {
                log::error!("{:#}", e);
                Err(e)
            }
        }
    }

    fn bind(&self, query: &[u8], values: Params) -> Result<DumpedParams> {
        let Params::Sequence(values) = values else {
            return Err(QueryError::RawRequiresSequence.into());
        };
        let query = printable(query);
        log::trace!("Binding {} values to: {}", values.len(), truncate_long!(query));
        let formats = vec![PlaceholderFormat::Auto; values.len()];
        self.encoder
            .dump_sequence(&values, &formats)
            .with_context(|| format!("While binding the parameters of: {}", truncate_long!(query)))
    }

    fn publish(&mut self, dumped: Option<DumpedParams>) {
        match dumped {
            Some(dumped) => {
                self.params = Some(dumped.params);
                self.types = dumped.types;
                self.formats = Some(dumped.formats);
            }
            None => {
                self.params = None;
                self.types.clear();
                self.formats = None;
            }
        }
    }

    pub fn query(&self) -> &[u8] {
        &self.query
    }

    pub fn params(&self) -> Option<&[Option<Vec<u8>>]> {
        self.params.as_deref()
    }

    pub fn types(&self) -> &[Oid] {
        &self.types
    }

    pub fn formats(&self) -> Option<&[WireFormat]> {
        self.formats.as_deref()
    }
}
