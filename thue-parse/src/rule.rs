//! Rule lines.

use crate::{DELIMITER, PRINT, READ};
use core::fmt::{self, Display};

/// Rewrite rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<S> {
    /// left-hand side (pattern to search for)
    pub lhs: S,
    /// right-hand side (what to do with an occurrence of the pattern)
    pub rhs: Rhs<S>,
}

/// Right-hand side of a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rhs<S> {
    /// Replace the occurrence by a fixed string
    Replace(S),
    /// Print a message (a newline if empty) and remove the occurrence
    Print(S),
    /// Replace the occurrence by a line of input
    Read,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedDelimiter,
    EmptyPattern,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedDelimiter => write!(f, "expected {}", DELIMITER),
            Self::EmptyPattern => write!(f, "empty left-hand side"),
        }
    }
}

impl<'s> Rule<&'s str> {
    /// Parse a single rule line.
    ///
    /// The line is split at the first delimiter,
    /// so the right-hand side may itself contain delimiters.
    /// Neither side is trimmed.
    pub fn parse_str(s: &'s str) -> Result<Self, Error> {
        let (lhs, rhs) = s.split_once(DELIMITER).ok_or(Error::ExpectedDelimiter)?;
        if lhs.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let rhs = Rhs::from(rhs);
        Ok(Self { lhs, rhs })
    }
}

impl<'s> From<&'s str> for Rhs<&'s str> {
    fn from(s: &'s str) -> Self {
        if s == READ {
            Self::Read
        } else if let Some(msg) = s.strip_prefix(PRINT) {
            Self::Print(msg)
        } else {
            Self::Replace(s)
        }
    }
}

impl<S> Rule<S> {
    pub fn map<T>(self, f: impl Fn(S) -> T) -> Rule<T> {
        Rule {
            lhs: f(self.lhs),
            rhs: self.rhs.map(f),
        }
    }
}

impl<S> Rhs<S> {
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Rhs<T> {
        match self {
            Self::Replace(s) => Rhs::Replace(f(s)),
            Self::Print(s) => Rhs::Print(f(s)),
            Self::Read => Rhs::Read,
        }
    }
}

impl<S: Display> Display for Rhs<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(s) => s.fmt(f),
            Self::Print(msg) => write!(f, "{}{}", PRINT, msg),
            Self::Read => READ.fmt(f),
        }
    }
}

impl<S: Display> Display for Rule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, DELIMITER, self.rhs)
    }
}

#[test]
fn positive() -> Result<(), Error> {
    let rule = Rule::parse_str("a::=b")?;
    assert_eq!(rule.lhs, "a");
    assert_eq!(rule.rhs, Rhs::Replace("b"));

    assert_eq!(Rule::parse_str("x::=:::")?.rhs, Rhs::Read);
    assert_eq!(Rule::parse_str("x::=~hi")?.rhs, Rhs::Print("hi"));
    assert_eq!(Rule::parse_str("x::=~")?.rhs, Rhs::Print(""));
    assert_eq!(Rule::parse_str("x::=")?.rhs, Rhs::Replace(""));
    // only the first delimiter separates the sides
    assert_eq!(Rule::parse_str("x::=y::=z")?.rhs, Rhs::Replace("y::=z"));
    assert_eq!(Rule::parse_str("x::=::::")?.rhs, Rhs::Replace("::::"));
    // inner spaces are significant
    assert_eq!(Rule::parse_str("a b ::= c")?.lhs, "a b ");
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    assert_eq!(Rule::parse_str("ab"), Err(ExpectedDelimiter));
    assert_eq!(Rule::parse_str("a:=b"), Err(ExpectedDelimiter));
    assert_eq!(Rule::parse_str("::=b"), Err(EmptyPattern));
}

#[test]
fn display() -> Result<(), Error> {
    use alloc::string::ToString;
    for line in ["a::=b", "x::=:::", "x::=~hi", "x::=~", "1_::=1++"] {
        assert_eq!(Rule::parse_str(line)?.to_string(), line);
    }
    Ok(())
}
