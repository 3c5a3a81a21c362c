//! Parser for Thue programs.
//!
//! A Thue program is a list of rewrite rules, one per line,
//! followed by a line consisting only of `::=` and then the start state.
//!
//! Example usage:
//!
//! ~~~
//! use thue_parse::{Error, Program, Rhs};
//!
//! let prog = "a::=b\nb::=~done\n::=\naaa";
//! let prog = Program::parse_str(prog)?;
//! assert_eq!(prog.rules.len(), 2);
//! assert_eq!(prog.rules[1].rhs, Rhs::Print("done"));
//! assert_eq!(prog.start, "aaa");
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

mod lineiter;
mod program;
pub mod rule;

pub use lineiter::{Error, Item, LineIter};
pub use program::Program;
pub use rule::{Rhs, Rule};

/// Separator between the left- and right-hand side of a rule.
///
/// On a line of its own, it ends the list of rules.
pub const DELIMITER: &str = "::=";

/// Right-hand side of rules that read a line of input.
pub const READ: &str = ":::";

/// First character of right-hand sides of rules that print a message.
pub const PRINT: char = '~';
