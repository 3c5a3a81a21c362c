use crate::{Error, Rule};
use core::fmt::{self, Display};

/// Rewrite rules together with the state they rewrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// rules in declaration order
    pub rules: Vec<Rule>,
    /// current state, initially the start state
    pub state: String,
    /// number of substitutions performed so far
    pub steps: usize,
}

impl Program {
    pub fn new(rules: Vec<Rule>, state: impl Into<String>) -> Self {
        let state = state.into();
        Self {
            rules,
            state,
            steps: 0,
        }
    }

    /// Parse a program from its textual form.
    ///
    /// ~~~
    /// # use thue::{Error, Program};
    /// let prog = Program::parse("a::=b\n::=\naaa")?;
    /// assert_eq!(prog.rules.len(), 1);
    /// assert_eq!(prog.state, "aaa");
    ///
    /// assert!(Program::parse("a::=b\naaa").is_err());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::try_from(thue_parse::Program::parse_str(s)?)
    }
}

impl<S: Into<String>> TryFrom<thue_parse::Program<S>> for Program {
    type Error = Error;
    fn try_from(prog: thue_parse::Program<S>) -> Result<Self, Self::Error> {
        let rules = prog.rules.into_iter().map(Rule::try_from);
        Ok(Self::new(rules.collect::<Result<_, _>>()?, prog.start))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.rules.iter().try_for_each(|r| writeln!(f, "{}", r))?;
        writeln!(f, "{}", thue_parse::DELIMITER)?;
        writeln!(f, "{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn parse() -> Result<(), Error> {
        let prog = Program::parse("x::=:::\ny::=~\nz::=~hi\n::=\nxyz")?;
        let kinds: Vec<_> = prog.rules.iter().map(Rule::kind).cloned().collect();
        assert_eq!(kinds, [Kind::Read, Kind::Print("".into()), Kind::Print("hi".into())]);
        assert_eq!(prog.state, "xyz");
        assert_eq!(prog.steps, 0);
        Ok(())
    }

    #[test]
    fn parse_twice() -> Result<(), Error> {
        let text = "a::=b\nb::=~b\n::=\nab";
        assert_eq!(Program::parse(text)?, Program::parse(text)?);
        Ok(())
    }

    #[test]
    fn reparse() -> Result<(), Error> {
        let prog = Program::parse("a::=b\nb::=~b\nc::=:::\n::=\nabc")?;
        assert_eq!(Program::parse(&prog.to_string())?, prog);
        Ok(())
    }

    #[test]
    fn no_program() {
        assert!(matches!(Program::parse(""), Err(Error::Parse(_))));
        assert!(matches!(Program::parse("a::=b\naaa"), Err(Error::Parse(_))));
        assert!(matches!(Program::parse("::=b\n::=\nx"), Err(Error::Parse(_))));
        assert!(matches!(Program::parse("::=\nx\ny"), Err(Error::Parse(_))));
    }
}
