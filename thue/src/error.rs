//! Common error type.

use core::fmt::{self, Display};

/// Common error type.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The program text is malformed.
    Parse(thue_parse::Error),
    /// A rule has an empty left-hand side.
    EmptyPattern,
}

impl From<thue_parse::Error> for Error {
    fn from(err: thue_parse::Error) -> Self {
        Self::Parse(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::EmptyPattern => write!(f, "rule with empty left-hand side"),
        }
    }
}

impl std::error::Error for Error {}
