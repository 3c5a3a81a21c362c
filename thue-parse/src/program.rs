use crate::{Error, Item, LineIter, Rule};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Rules in declaration order, followed by the start state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program<S> {
    pub rules: Vec<Rule<S>>,
    pub start: S,
}

impl<'s> Program<&'s str> {
    /// Parse a whole program.
    ///
    /// Fails on the first malformed line; no partial program is returned.
    pub fn parse_str(s: &'s str) -> Result<Self, Error> {
        let mut rules = Vec::new();
        let mut start = None;
        for item in LineIter::new(s) {
            match item? {
                Item::Rule(rule) => {
                    log::debug!("Parsed rule {}", rule);
                    rules.push(rule)
                }
                Item::Start(state) => start = Some(state),
            }
        }
        let start = start.ok_or(Error::ExpectedStart)?;
        log::debug!("Parsed start state {}", start);
        Ok(Self { rules, start })
    }
}

impl<S> Program<S> {
    pub fn map<T>(self, f: impl Fn(S) -> T) -> Program<T> {
        Program {
            rules: self.rules.into_iter().map(|r| r.map(&f)).collect(),
            start: f(self.start),
        }
    }
}

impl<S: Display> Display for Program<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rules.iter().try_for_each(|r| writeln!(f, "{}", r))?;
        writeln!(f, "{}", crate::DELIMITER)?;
        writeln!(f, "{}", self.start)
    }
}
