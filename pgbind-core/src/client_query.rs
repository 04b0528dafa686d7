use crate::{
    AsQuery, CompileCache, CompiledClientForm, Context, Driver, Encoding, Params, QueryError,
    Result, SqlWriter, Value, printable, reorder_params, truncate_long,
};
use std::sync::Arc;

/// Binds parameters by embedding them in the query text as literals.
///
/// The values are rendered by the driver's [`SqlWriter`], nothing is sent
/// besides the final query.
pub struct ClientQuery<D: Driver> {
    writer: D::SqlWriter,
    encoding: Encoding,
    cache: Option<Arc<CompileCache<CompiledClientForm>>>,
    source: Option<Vec<u8>>,
    compiled: Option<Arc<CompiledClientForm>>,
    query: Vec<u8>,
    params: Option<Vec<Vec<u8>>>,
}

impl<D: Driver> ClientQuery<D> {
    pub fn new(driver: &D) -> Self {
        Self {
            writer: driver.sql_writer(),
            encoding: driver.encoding(),
            cache: None,
            source: None,
            compiled: None,
            query: Vec::new(),
            params: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<CompileCache<CompiledClientForm>>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Compile `query` (unless it is the one already compiled) and embed `values`.
    ///
    /// Without values the query is used verbatim, `%%` is not collapsed.
    pub fn convert<Q: AsQuery + ?Sized>(&mut self, query: &Q, values: Option<Params>) -> Result<()> {
        let result = self.do_convert(query, values);
        if let Err(e) = &result {
            log::error!("{:#}", e);
        }
        result
    }

    /// Embed a new set of values in the compiled template, `None` clears them.
    pub fn dump(&mut self, values: Option<Params>) -> Result<()> {
        let Some(values) = values else {
            self.params = None;
            return Ok(());
        };
        let result = match self.compiled.clone() {
            Some(compiled) => self.bind(&compiled, values).map(|(query, params)| {
                self.query = query;
                self.params = Some(params);
            }),
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
            self.params = None;
            return Ok(());
        };
        let compiled = match &self.compiled {
            Some(compiled) if self.source.as_deref() == Some(&*bytes) => compiled.clone(),
            _ => self.compile(&bytes, values.len())?,
        };
        let (query, params) = self.bind(&compiled, values)?;
        self.query = query;
        self.params = Some(params);
        self.source = Some(bytes.into_owned());
        self.compiled = Some(compiled);
        Ok(())
    }

    fn compile(&self, query: &[u8], params_count: usize) -> Result<Arc<CompiledClientForm>> {
        match &self.cache {
            Some(cache) => {
                cache.get_or_compile(query, self.encoding, params_count, CompiledClientForm::compile)
            }
            None => {
                log::debug!("Compiling query: {}", truncate_long!(printable(query)));
                CompiledClientForm::compile(query, self.encoding).map(Arc::new)
            }
        }
    }

    /// Final query and the literal of every marker.
    fn bind(&self, compiled: &CompiledClientForm, values: Params) -> Result<(Vec<u8>, Vec<Vec<u8>>)> {
        let values = reorder_params(&compiled.parsed, values, compiled.names.as_deref())?;
        log::trace!(
            "Embedding {} values in: {}",
            values.len(),
            truncate_long!(printable(&compiled.template))
        );
        let literals = values
            .iter()
            .map(|value| self.render(value))
            .collect::<Result<Vec<_>>>()?;
        Ok((substitute(&compiled.template, &literals), literals))
    }

    fn render(&self, value: &Value) -> Result<Vec<u8>> {
        let literal = self.writer.as_literal(value);
        self.encoding
            .encode(&literal)
            .map(|v| v.into_owned())
            .with_context(|| format!("Could not encode the literal {}", truncate_long!(literal)))
    }

    /// Query with the literals embedded.
    pub fn query(&self) -> &[u8] {
        &self.query
    }

    /// Rendered literals, in marker order.
    pub fn params(&self) -> Option<&[Vec<u8>]> {
        self.params.as_deref()
    }

    pub fn compiled(&self) -> Option<&Arc<CompiledClientForm>> {
        self.compiled.as_ref()
    }
}

/// Replace the `%s` markers of `template` with `literals`, in order, and collapse `%%`.
fn substitute(template: &[u8], literals: &[Vec<u8>]) -> Vec<u8> {
    let mut result = Vec::with_capacity(
        template.len() + literals.iter().map(Vec::len).sum::<usize>(),
    );
    let mut literals = literals.iter();
    let mut rest = template;
    while let Some(i) = rest.iter().position(|&c| c == b'%') {
        result.extend_from_slice(&rest[..i]);
        match rest.get(i + 1) {
            Some(b'%') => result.push(b'%'),
            Some(b's') => result.extend_from_slice(literals.next().map_or(&b"NULL"[..], Vec::as_slice)),
            _ => {
                result.push(b'%');
                rest = &rest[i + 1..];
                continue;
            }
        }
        rest = &rest[i + 2..];
    }
    result.extend_from_slice(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::substitute;

    #[test]
    fn substitute_markers() {
        let literals = vec![b"1".to_vec(), b"'x'".to_vec()];
        assert_eq!(
            substitute(b"SELECT %s, %s, '5%%'", &literals),
            b"SELECT 1, 'x', '5%'"
        );
        assert_eq!(substitute(b"no markers", &[]), b"no markers");
    }
}
