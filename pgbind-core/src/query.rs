use crate::{Encoding, Result, SqlWriter};
use std::borrow::Cow;

/// Anything a binder accepts as query text.
///
/// Strings are encoded with the connection encoding, byte strings are taken
/// verbatim and composables (see [`crate::Composable`]) are rendered first.
pub trait AsQuery {
    fn as_query_bytes(&self, writer: &dyn SqlWriter, encoding: Encoding) -> Result<Cow<'_, [u8]>>;
}

impl AsQuery for str {
    fn as_query_bytes(&self, _writer: &dyn SqlWriter, encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        encoding.encode(self)
    }
}

impl AsQuery for String {
    fn as_query_bytes(&self, writer: &dyn SqlWriter, encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        self.as_str().as_query_bytes(writer, encoding)
    }
}

impl AsQuery for Cow<'_, str> {
    fn as_query_bytes(&self, writer: &dyn SqlWriter, encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        self.as_ref().as_query_bytes(writer, encoding)
    }
}

impl AsQuery for [u8] {
    fn as_query_bytes(&self, _writer: &dyn SqlWriter, _encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsQuery for Vec<u8> {
    fn as_query_bytes(&self, _writer: &dyn SqlWriter, _encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: AsQuery + ?Sized> AsQuery for &T {
    fn as_query_bytes(&self, writer: &dyn SqlWriter, encoding: Encoding) -> Result<Cow<'_, [u8]>> {
        (**self).as_query_bytes(writer, encoding)
    }
}
