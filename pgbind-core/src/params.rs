use crate::{ParsedQuery, PlaceholderStyle, QueryError, Result, Value};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// Parameters supplied by the caller.
///
/// Positional queries take a `Sequence`, named queries a `Mapping`.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    Sequence(Vec<Value>),
    Mapping(HashMap<String, Value>),
}

impl Params {
    /// Classify a dynamic value: lists are sequences, maps are mappings.
    ///
    /// Anything else is rejected, text and byte strings included.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(Some(values), ..) => Ok(Params::Sequence(values)),
            Value::Map(Some(values), ..) => Ok(Params::Mapping(values.into_iter().collect())),
            other => Err(QueryError::NotAContainer(other.type_name()).into()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Params::Sequence(values) => values.len(),
            Params::Mapping(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Into<Value>> From<Vec<T>> for Params {
    fn from(value: Vec<T>) -> Self {
        Params::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Params {
    fn from(value: [T; N]) -> Self {
        Params::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<HashMap<K, T>> for Params {
    fn from(value: HashMap<K, T>) -> Self {
        Params::Mapping(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Params {
    fn from(value: BTreeMap<K, T>) -> Self {
        Params::Mapping(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<IndexMap<K, T>> for Params {
    fn from(value: IndexMap<K, T>) -> Self {
        Params::Mapping(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Build [`Params`]: `params![1, "a"]` for a sequence, `params! { "a" => 1 }`
/// for a mapping.
#[macro_export]
macro_rules! params {
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::Params::Mapping(
            [$((::std::string::String::from($key), $crate::Value::from($value))),+]
                .into_iter()
                .collect(),
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::Params::Sequence(::std::vec![$($crate::Value::from($value)),*])
    };
}

/// Validate `params` against the placeholders of `parsed` and return the values
/// in the order the markers consume them.
///
/// `names` drives the lookup of mappings: first occurrence order for
/// [`crate::CompiledServerForm`], every occurrence for [`crate::CompiledClientForm`].
pub fn reorder_params(
    parsed: &ParsedQuery,
    params: Params,
    names: Option<&[String]>,
) -> Result<Vec<Value>> {
    let expected = parsed.placeholders_count();
    match params {
        Params::Sequence(values) => {
            if values.len() != expected {
                return Err(QueryError::ArityMismatch {
                    expected,
                    actual: values.len(),
                }
                .into());
            }
            if !values.is_empty() && parsed.style() == Some(PlaceholderStyle::Named) {
                return Err(QueryError::NamedRequiresMapping.into());
            }
            Ok(values)
        }
        Params::Mapping(values) => {
            if parsed.style() == Some(PlaceholderStyle::Positional) {
                return Err(QueryError::PositionalRequiresSequence.into());
            }
            let names = names.unwrap_or_default();
            let mut missing = names
                .iter()
                .filter(|name| !values.contains_key(name.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !missing.is_empty() {
                missing.sort();
                missing.dedup();
                return Err(QueryError::MissingParameters(missing).into());
            }
            Ok(names
                .iter()
                .filter_map(|name| values.get(name.as_str()).cloned())
                .collect())
        }
    }
}
