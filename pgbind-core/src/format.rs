use std::fmt::{self, Display};

/// Wire representation requested by a placeholder.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderFormat {
    /// `%s`, let the encoder pick.
    #[default]
    Auto,
    /// `%t`
    Text,
    /// `%b`
    Binary,
}

impl PlaceholderFormat {
    pub fn from_char(c: u8) -> Option<Self> {
        match c {
            b's' => Some(Self::Auto),
            b't' => Some(Self::Text),
            b'b' => Some(Self::Binary),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Auto => 's',
            Self::Text => 't',
            Self::Binary => 'b',
        }
    }
}

impl Display for PlaceholderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.as_char())
    }
}

/// Format actually sent to the server, values match the protocol format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum WireFormat {
    Text = 0,
    Binary = 1,
}

impl WireFormat {
    pub fn code(&self) -> i16 {
        *self as i16
    }
}
