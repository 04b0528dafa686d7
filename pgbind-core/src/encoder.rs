use crate::{PlaceholderFormat, Result, Value, WireFormat};

/// Object identifier of a server type, `0` lets the server infer it.
pub type Oid = u32;

/// Parameters encoded for the wire, aligned by index.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DumpedParams {
    /// Encoded buffers, `None` is SQL NULL.
    pub params: Vec<Option<Vec<u8>>>,
    /// Type of each parameter.
    pub types: Vec<Oid>,
    /// Resolved format of each parameter.
    pub formats: Vec<WireFormat>,
}

impl DumpedParams {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// The value-encoding service used by server side binding.
///
/// Given the values in marker order and the format each marker requested it
/// produces the wire buffers, resolving [`PlaceholderFormat::Auto`] to a
/// concrete [`WireFormat`].
pub trait ValueEncoder {
    fn dump_sequence(
        &self,
        values: &[Value],
        formats: &[PlaceholderFormat],
    ) -> Result<DumpedParams>;
}
