//! Rewrite rules.

use crate::{matching, Console, Error};
use core::fmt::{self, Display};
use rand::Rng;
use thue_parse::Rhs;

/// Rewrite rule.
///
/// The pattern of a rule is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pattern: String,
    kind: Kind,
}

/// What a rule does with an occurrence of its pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Replace the occurrence by a fixed string.
    Standard(String),
    /// Print a message (a newline if empty) and remove the occurrence.
    Print(String),
    /// Replace the occurrence by a line of input.
    Read,
}

impl Kind {
    /// Produce the replacement for an occurrence,
    /// printing or reading via the console if the rule demands it.
    pub fn output<C: Console + ?Sized>(&self, console: &mut C) -> String {
        match self {
            Self::Standard(replacement) => replacement.clone(),
            Self::Print(msg) if msg.is_empty() => {
                console.write_line();
                String::new()
            }
            Self::Print(msg) => {
                console.write(msg);
                String::new()
            }
            Self::Read => console.read_line(),
        }
    }
}

impl Rule {
    pub fn new(pattern: impl Into<String>, kind: Kind) -> Result<Self, Error> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self { pattern, kind })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return all positions in the state where the pattern starts.
    pub fn occurrences(&self, state: &str) -> Vec<usize> {
        matching::occurrences(state, &self.pattern)
    }

    /// Rewrite a randomly chosen occurrence of the pattern in the state.
    ///
    /// Return `None` if the pattern does not occur in the state.
    /// Otherwise, the console is used at most once.
    pub fn substitute<R, C>(&self, state: &str, rng: &mut R, console: &mut C) -> Option<String>
    where
        R: Rng + ?Sized,
        C: Console + ?Sized,
    {
        let start = matching::choose(&self.occurrences(state), rng)?;
        let output = self.kind.output(console);
        let range = start..start + self.pattern.len();
        Some(matching::splice(state, range, &output))
    }
}

impl<S: Into<String>> TryFrom<thue_parse::Rule<S>> for Rule {
    type Error = Error;
    fn try_from(rule: thue_parse::Rule<S>) -> Result<Self, Self::Error> {
        let kind = match rule.rhs {
            Rhs::Replace(s) => Kind::Standard(s.into()),
            Rhs::Print(msg) => Kind::Print(msg.into()),
            Rhs::Read => Kind::Read,
        };
        Self::new(rule.lhs, kind)
    }
}

impl<'a> From<&'a Rule> for thue_parse::Rule<&'a str> {
    fn from(rule: &'a Rule) -> Self {
        let rhs = match &rule.kind {
            Kind::Standard(s) => Rhs::Replace(s.as_str()),
            Kind::Print(msg) => Rhs::Print(msg.as_str()),
            Kind::Read => Rhs::Read,
        };
        let lhs = rule.pattern.as_str();
        Self { lhs, rhs }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        thue_parse::Rule::from(self).fmt(f)
    }
}
