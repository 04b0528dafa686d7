use crate::{
    Encoding, ParsedQuery, PlaceholderFormat, PlaceholderKey, PlaceholderStyle, QueryError,
    Result, scan,
};
use indexmap::IndexMap;

/// Query rewritten with numbered `$n` markers, ready to be sent along with
/// out-of-band parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledServerForm {
    /// Query text with `$1`, `$2`, ... in place of the placeholders.
    pub query: Vec<u8>,
    /// Requested format of each parameter, one entry per `$n` marker.
    pub formats: Vec<PlaceholderFormat>,
    /// Parameter names in first occurrence order, `None` for positional queries.
    pub names: Option<Vec<String>>,
    pub parsed: ParsedQuery,
}

impl CompiledServerForm {
    /// Scan (collapsing `%%`) and compile `query`.
    pub fn compile(query: &[u8], encoding: Encoding) -> Result<Self> {
        compile_server(scan(query, encoding, true)?)
    }

    pub fn params_count(&self) -> usize {
        self.formats.len()
    }
}

/// Query template with a `%s` marker per placeholder occurrence, the values
/// are embedded as literals when binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledClientForm {
    /// Query text with `%s` in place of the placeholders and `%%` still escaped.
    pub template: Vec<u8>,
    /// Parameter name of every marker, repeats included. `None` for positional queries.
    pub names: Option<Vec<String>>,
    pub parsed: ParsedQuery,
}

impl CompiledClientForm {
    /// Scan (keeping `%%`) and compile `query`.
    pub fn compile(query: &[u8], encoding: Encoding) -> Result<Self> {
        Ok(compile_client(scan(query, encoding, false)?))
    }
}

pub fn compile_server(parsed: ParsedQuery) -> Result<CompiledServerForm> {
    let mut query = Vec::with_capacity(parsed.tail.len() + parsed.parts.len() * 16);
    let mut formats = Vec::with_capacity(parsed.parts.len());
    let mut seen = IndexMap::<&str, (usize, PlaceholderFormat)>::new();
    let mut buffer = itoa::Buffer::new();
    for part in &parsed.parts {
        query.extend_from_slice(&part.prefix);
        let marker = match &part.key {
            PlaceholderKey::Position(i) => {
                formats.push(part.format);
                i + 1
            }
            PlaceholderKey::Name(name) => match seen.get(name.as_str()) {
                Some(&(marker, format)) => {
                    if format != part.format {
                        return Err(QueryError::FormatMismatch(name.clone()).into());
                    }
                    marker
                }
                None => {
                    let marker = seen.len() + 1;
                    seen.insert(name, (marker, part.format));
                    formats.push(part.format);
                    marker
                }
            },
        };
        query.push(b'$');
        query.extend_from_slice(buffer.format(marker).as_bytes());
    }
    query.extend_from_slice(&parsed.tail);
    let names = (parsed.style() == Some(PlaceholderStyle::Named))
        .then(|| seen.keys().map(|name| name.to_string()).collect());
    Ok(CompiledServerForm {
        query,
        formats,
        names,
        parsed,
    })
}

pub fn compile_client(parsed: ParsedQuery) -> CompiledClientForm {
    let mut template = Vec::with_capacity(parsed.tail.len() + parsed.parts.len() * 2);
    let mut names = Vec::new();
    for part in &parsed.parts {
        template.extend_from_slice(&part.prefix);
        template.extend_from_slice(b"%s");
        if let PlaceholderKey::Name(name) = &part.key {
            names.push(name.clone());
        }
    }
    template.extend_from_slice(&parsed.tail);
    let names = (parsed.style() == Some(PlaceholderStyle::Named)).then_some(names);
    CompiledClientForm {
        template,
        names,
        parsed,
    }
}
