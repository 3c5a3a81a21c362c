use core::fmt::{self, Display};
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Thue(thue::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<thue::Error> for Error {
    fn from(err: thue::Error) -> Self {
        Self::Thue(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Thue(e) => e.fmt(f),
        }
    }
}
