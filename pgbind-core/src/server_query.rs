use crate::{
    AsQuery, CompileCache, CompiledServerForm, Context, Driver, DumpedParams, Encoding, Oid,
    Params, QueryError, Result, SqlWriter, ValueEncoder, WireFormat, printable, reorder_params,
    truncate_long,
};
use std::sync::Arc;

/// Binds parameters out of band: the query is rewritten with `$n` markers and
/// the values are encoded separately by the driver's [`ValueEncoder`].
///
/// A query text is compiled once, further `convert` calls with the same text
/// and every `dump` only validate and encode the new values.
pub struct ServerQuery<D: Driver> {
    writer: D::SqlWriter,
    encoder: D::Encoder,
    encoding: Encoding,
    cache: Option<Arc<CompileCache<CompiledServerForm>>>,
    source: Option<Vec<u8>>,
    compiled: Option<Arc<CompiledServerForm>>,
    query: Vec<u8>,
    params: Option<Vec<Option<Vec<u8>>>>,
    types: Vec<Oid>,
    formats: Option<Vec<WireFormat>>,
}

impl<D: Driver> ServerQuery<D> {
    pub fn new(driver: &D) -> Self {
        Self {
            writer: driver.sql_writer(),
            encoder: driver.encoder(),
            encoding: driver.encoding(),
            cache: None,
            source: None,
            compiled: None,
            query: Vec::new(),
            params: None,
            types: Vec::new(),
            formats: None,
        }
    }

    /// Share compiled forms with the other binders using `cache`.
    pub fn with_cache(mut self, cache: Arc<CompileCache<CompiledServerForm>>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Compile `query` (unless it is the one already compiled) and bind `values`.
    ///
    /// Without values the query is used verbatim, placeholders and `%%` included.
    pub fn convert<Q: AsQuery + ?Sized>(&mut self, query: &Q, values: Option<Params>) -> Result<()> {
        let result = self.do_convert(query, values);
        if let Err(e) = &result {
            log::error!("{:#}", e);
        }
        result
    }

    /// Bind a new set of values to the compiled query, `None` clears them.
    pub fn dump(&mut self, values: Option<Params>) -> Result<()> {
        let Some(values) = values else {
            self.clear_params();
            return Ok(());
        };
        let result = match self.compiled.clone() {
            Some(compiled) => self.bind(&compiled, values).map(|dumped| self.publish(dumped)),
            None => Err(QueryError::NotCompiled.into()),
        };
        if let Err(e) = &result {
            log::error!("{:#}", e);
        }
        result
    }

    fn do_convert<Q: AsQuery + ?Sized>(&mut self, query: &Q, values: Option<Params>) -> Result<()> {
        let bytes = query
            .as_query_bytes(self.writer.as_dyn(), self.encoding)
            .context("Could not render the query text")?;
        let Some(values) = values else {
            self.query = bytes.into_owned();
            self.source = None;
            self.compiled = None;
            self.clear_params();
            return Ok(());
        };
        let compiled = match &self.compiled {
            Some(compiled) if self.source.as_deref() == Some(&*bytes) => compiled.clone(),
            _ => self.compile(&bytes, values.len())?,
        };
        let dumped = self.bind(&compiled, values)?;
        self.query.clone_from(&compiled.query);
        self.source = Some(bytes.into_owned());
        self.compiled = Some(compiled);
        self.publish(dumped);
        Ok(())
    }

    fn compile(&self, query: &[u8], params_count: usize) -> Result<Arc<CompiledServerForm>> {
        match &self.cache {
            Some(cache) => {
                cache.get_or_compile(query, self.encoding, params_count, CompiledServerForm::compile)
            }
            None => {
                log::debug!("Compiling query: {}", truncate_long!(printable(query)));
                CompiledServerForm::compile(query, self.encoding).map(Arc::new)
            }
        }
    }

    fn bind(&self, compiled: &CompiledServerForm, values: Params) -> Result<DumpedParams> {
        let values = reorder_params(&compiled.parsed, values, compiled.names.as_deref())?;
        let query = printable(&compiled.query);
        log::trace!("Binding {} values to: {}", values.len(), truncate_long!(query));
        self.encoder
            .dump_sequence(&values, &compiled.formats)
            .with_context(|| format!("While binding the parameters of: {}", truncate_long!(query)))
    }

    fn publish(&mut self, dumped: DumpedParams) {
        self.params = Some(dumped.params);
        self.types = dumped.types;
        self.formats = Some(dumped.formats);
    }

    fn clear_params(&mut self) {
        self.params = None;
        self.types.clear();
        self.formats = None;
    }

    /// Query to send, with `$n` markers once compiled.
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

    pub fn compiled(&self) -> Option<&Arc<CompiledServerForm>> {
        self.compiled.as_ref()
    }
}
