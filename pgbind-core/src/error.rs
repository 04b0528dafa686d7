use thiserror::Error;

/// Broad classification of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed placeholder grammar.
    Syntax,
    /// Positional and named placeholders combined, or one name used with two formats.
    MixedStyle,
    /// Number of parameters different from the number of placeholders.
    Arity,
    /// Sequence passed to a named query, mapping passed to a positional one, or not a container at all.
    ShapeMismatch,
    /// Mapping without one or more of the required names.
    MissingKey,
    /// Binder used out of order.
    State,
}

impl ErrorKind {
    /// Whether the condition is about the type of the parameters container rather than the query.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ErrorKind::ShapeMismatch)
    }
}

/// Errors raised while scanning, compiling or binding a query.
///
/// They travel inside [`crate::Error`], use `downcast_ref::<QueryError>()` to inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("incomplete placeholder: '{0}'")]
    IncompletePlaceholder(String),
    #[error(
        "incomplete placeholder: '%'; if you want to use '%' as an operator you can double it up, i.e. use '%%'"
    )]
    BarePercent,
    #[error("only '%s', '%b', '%t' are allowed as placeholders, got '{0}'")]
    InvalidFormat(String),
    #[error("placeholder name '{0}' cannot be decoded with the connection encoding")]
    InvalidName(String),
    #[error("positional and named placeholders cannot be mixed")]
    MixedStyles,
    #[error("placeholder '{0}' cannot have different formats")]
    FormatMismatch(String),
    #[error("the query has {expected} placeholders but {actual} parameters were passed")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("query parameters should be a sequence or a mapping, got {0}")]
    NotAContainer(&'static str),
    #[error("named placeholders require a mapping of parameters")]
    NamedRequiresMapping,
    #[error("positional placeholders (%s) require a sequence of parameters")]
    PositionalRequiresSequence,
    #[error("raw queries require a sequence of parameters")]
    RawRequiresSequence,
    #[error("query parameter missing: {}", .0.join(", "))]
    MissingParameters(Vec<String>),
    #[error("no query has been converted yet, call convert() before dump()")]
    NotCompiled,
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::IncompletePlaceholder(..)
            | QueryError::BarePercent
            | QueryError::InvalidFormat(..)
            | QueryError::InvalidName(..) => ErrorKind::Syntax,
            QueryError::MixedStyles | QueryError::FormatMismatch(..) => ErrorKind::MixedStyle,
            QueryError::ArityMismatch { .. } => ErrorKind::Arity,
            QueryError::NotAContainer(..)
            | QueryError::NamedRequiresMapping
            | QueryError::PositionalRequiresSequence
            | QueryError::RawRequiresSequence => ErrorKind::ShapeMismatch,
            QueryError::MissingParameters(..) => ErrorKind::MissingKey,
            QueryError::NotCompiled => ErrorKind::State,
        }
    }
}

/// Kind of the [`QueryError`] carried by `error`, if any.
pub fn error_kind(error: &crate::Error) -> Option<ErrorKind> {
    error.downcast_ref::<QueryError>().map(QueryError::kind)
}
