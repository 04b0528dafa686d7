use crate::{Error, Result};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Text encoding of a connection.
///
/// Placeholder names are decoded with it, string queries and rendered
/// literals are encoded with it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl Encoding {
    /// Map a PostgreSQL `client_encoding` name to an [`Encoding`].
    pub fn from_pg_name(name: &str) -> Result<Self> {
        let normalized = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "UTF8" | "UNICODE" => Ok(Encoding::Utf8),
            "LATIN1" | "ISO88591" => Ok(Encoding::Latin1),
            "SQLASCII" => Ok(Encoding::Ascii),
            _ => Err(Error::msg(format!(
                "Encoding `{}` is not supported",
                name
            ))),
        }
    }

    /// Name as reported by the server.
    pub fn pg_name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF8",
            Encoding::Latin1 => "LATIN1",
            Encoding::Ascii => "SQL_ASCII",
        }
    }

    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(|e| {
                Error::new(e).context(format!(
                    "Cannot decode `{}` as {}",
                    String::from_utf8_lossy(bytes),
                    self
                ))
            }),
            Encoding::Latin1 => Ok(if bytes.is_ascii() {
                Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default())
            } else {
                Cow::Owned(bytes.iter().map(|b| *b as char).collect())
            }),
            Encoding::Ascii => {
                if let Some(b) = bytes.iter().find(|b| !b.is_ascii()) {
                    return Err(Error::msg(format!(
                        "Cannot decode byte 0x{:02x} of `{}` as {}",
                        b,
                        String::from_utf8_lossy(bytes),
                        self
                    )));
                }
                Ok(Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default()))
            }
        }
    }

    pub fn encode<'a>(&self, value: &'a str) -> Result<Cow<'a, [u8]>> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(value.as_bytes())),
            Encoding::Latin1 | Encoding::Ascii if value.is_ascii() => {
                Ok(Cow::Borrowed(value.as_bytes()))
            }
            Encoding::Latin1 => value
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        Error::msg(format!("Character `{}` cannot be encoded as {}", c, self))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Cow::Owned),
            Encoding::Ascii => Err(Error::msg(format!(
                "`{}` contains non ASCII characters and cannot be encoded as {}",
                value, self
            ))),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pg_name())
    }
}
