use crate::{rule, Rule, DELIMITER};
use core::fmt::{self, Display};
use core::iter::Enumerate;
use core::str::Lines;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed rule on the given line
    Rule(usize, rule::Error),
    /// Second delimiter line instead of a start state on the given line
    DuplicateDelimiter(usize),
    /// Non-empty line after the start state
    TrailingLine(usize),
    /// Input ended before a start state was given
    ExpectedStart,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(line, e) => write!(f, "line {}: {}", line, e),
            Self::DuplicateDelimiter(line) => write!(f, "line {}: expected start state", line),
            Self::TrailingLine(line) => write!(f, "line {}: unexpected line after start state", line),
            Self::ExpectedStart => write!(f, "expected start state"),
        }
    }
}

/// A line of a program that carries meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item<S> {
    Rule(Rule<S>),
    Start(S),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Rules,
    Start,
    End,
}

/// Lazy parser yielding rules and the start state of a program.
///
/// Lines end with `\n` or `\r\n`.
/// They are trimmed of spaces (but no other whitespace), and empty lines are skipped.
/// After the first error, the iterator should not be consumed further.
pub struct LineIter<'s> {
    lines: Enumerate<Lines<'s>>,
    state: State,
}

impl<'s> LineIter<'s> {
    pub fn new(s: &'s str) -> Self {
        Self {
            lines: s.lines().enumerate(),
            state: State::Rules,
        }
    }
}

impl<'s> Iterator for LineIter<'s> {
    type Item = Result<Item<&'s str>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        for (i, line) in &mut self.lines {
            let line = line.trim_matches(' ');
            if line.is_empty() {
                continue;
            }
            let line_no = i + 1;
            match self.state {
                State::Rules if line == DELIMITER => self.state = State::Start,
                State::Rules => {
                    let rule = Rule::parse_str(line).map_err(|e| Error::Rule(line_no, e));
                    return Some(rule.map(Item::Rule));
                }
                State::Start if line == DELIMITER => {
                    return Some(Err(Error::DuplicateDelimiter(line_no)))
                }
                State::Start => {
                    self.state = State::End;
                    return Some(Ok(Item::Start(line)));
                }
                State::End => return Some(Err(Error::TrailingLine(line_no))),
            }
        }
        (self.state != State::End).then(|| {
            self.state = State::End;
            Err(Error::ExpectedStart)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rhs;
    use alloc::vec::Vec;

    fn items(s: &str) -> Result<Vec<Item<&str>>, Error> {
        LineIter::new(s).collect()
    }

    #[test]
    fn phases() -> Result<(), Error> {
        let expected = [
            Item::Rule(Rule { lhs: "a", rhs: Rhs::Replace("b") }),
            Item::Start("aaa"),
        ];
        assert_eq!(items("a::=b\n::=\naaa")?, expected);
        // blank lines and surrounding spaces carry no meaning
        assert_eq!(items("\n  a::=b  \n\n   ::=\n\n  aaa \n\n")?, expected);
        assert_eq!(items("a::=b\r\n::=\r\naaa\r\n")?, expected);
        Ok(())
    }

    #[test]
    fn tabs_kept() -> Result<(), Error> {
        let expected = [
            Item::Rule(Rule { lhs: "\ta", rhs: Rhs::Replace("b\t") }),
            Item::Start("\tää"),
        ];
        assert_eq!(items(" \ta::=b\t \n::=\n\tää")?, expected);
        Ok(())
    }

    #[test]
    fn no_rules() -> Result<(), Error> {
        assert_eq!(items("::=\nx")?, [Item::Start("x")]);
        Ok(())
    }

    #[test]
    fn errors() {
        use rule::Error::*;
        assert_eq!(items(""), Err(Error::ExpectedStart));
        assert_eq!(items("a::=b"), Err(Error::ExpectedStart));
        assert_eq!(items("a::=b\n::="), Err(Error::ExpectedStart));
        assert_eq!(items("a::=b\nab"), Err(Error::Rule(2, ExpectedDelimiter)));
        assert_eq!(items("::=b\n::=\nx"), Err(Error::Rule(1, EmptyPattern)));
        assert_eq!(items("::=\n::=\nx"), Err(Error::DuplicateDelimiter(2)));
        assert_eq!(items("::=\nx\n\ny"), Err(Error::TrailingLine(4)));
        // a CRLF line ending is a single line break
        assert_eq!(items("a::=b\r\nab\r\n::=\r\nx"), Err(Error::Rule(2, ExpectedDelimiter)));
        assert_eq!(items("::=\r\n\r\n::=\r\nx"), Err(Error::DuplicateDelimiter(3)));
        assert_eq!(items("::=\r\nx\r\ny"), Err(Error::TrailingLine(3)));
    }

    #[test]
    fn exhausted() {
        let mut iter = LineIter::new("a::=b");
        assert!(matches!(iter.next(), Some(Ok(Item::Rule(_)))));
        assert_eq!(iter.next(), Some(Err(Error::ExpectedStart)));
        assert_eq!(iter.next(), None);
    }
}
