use crate::{
    AsQuery, Encoding, Error, PlaceholderFormat, Result, SqlWriter, Value, separated_by,
};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
};

/// A query fragment rendered through a [`SqlWriter`].
///
/// Composables build queries out of trusted SQL snippets, identifiers and
/// values without string formatting. Their rendering is not escaped for `%`:
/// a `%` inside a [`Literal`] still reads as a placeholder when parameters
/// are bound.
pub trait Composable {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String);

    fn as_string(&self, writer: &dyn SqlWriter) -> String {
        let mut out = String::new();
        self.write_query(writer, &mut out);
        out
    }
}

/// Raw SQL text, written as is. It may contain placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sql(pub Cow<'static, str>);

impl Sql {
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Self(sql.into())
    }

    /// Compose `items` separated by this snippet.
    pub fn join<C: Composable + 'static>(&self, items: impl IntoIterator<Item = C>) -> Composed {
        let mut result = Composed::default();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                result.push(self.clone());
            }
            result.push(item);
        }
        result
    }
}

/// A possibly qualified identifier, every component is quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(pub Vec<String>);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn qualified<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }
}

/// A value rendered as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(pub Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

/// A `%s`, `%t`, `%b` or `%(name)s` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: Option<String>,
    pub format: PlaceholderFormat,
}

impl Placeholder {
    pub fn new(format: PlaceholderFormat) -> Self {
        Self { name: None, format }
    }

    pub fn named(name: impl Into<String>, format: PlaceholderFormat) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(')') {
            return Err(Error::msg(format!("Invalid placeholder name: `{}`", name)));
        }
        Ok(Self {
            name: Some(name),
            format,
        })
    }
}

/// Sequence of composables rendered one after the other.
#[derive(Default)]
pub struct Composed(pub Vec<Box<dyn Composable>>);

impl Composed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Composable + 'static) -> &mut Self {
        self.0.push(Box::new(item));
        self
    }

    pub fn with(mut self, item: impl Composable + 'static) -> Self {
        self.push(item);
        self
    }
}

impl Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Composed").field(&self.0.len()).finish()
    }
}

impl Composable for Sql {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(&self.0);
    }
}

impl Composable for Identifier {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String) {
        separated_by(
            out,
            &self.0,
            |out, v| writer.write_identifier_quoted(out, v),
            ".",
        );
    }
}

impl Composable for Literal {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value(out, &self.0);
    }
}

impl Composable for Placeholder {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push('%');
        if let Some(name) = &self.name {
            out.push('(');
            out.push_str(name);
            out.push(')');
        }
        out.push(self.format.as_char());
    }
}

impl Composable for Composed {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String) {
        for item in &self.0 {
            item.write_query(writer, out);
        }
    }
}

macro_rules! impl_as_query {
    ($($composable:ty),+ $(,)?) => {
        $(
            impl AsQuery for $composable {
                fn as_query_bytes(
                    &self,
                    writer: &dyn SqlWriter,
                    encoding: Encoding,
                ) -> Result<Cow<'_, [u8]>> {
                    let query = self.as_string(writer);
                    Ok(Cow::Owned(encoding.encode(&query)?.into_owned()))
                }
            }
        )+
    };
}

impl_as_query!(Sql, Identifier, Literal, Placeholder, Composed);
