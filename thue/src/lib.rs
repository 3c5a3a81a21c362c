#![forbid(unsafe_code)]

//! Nondeterministic string rewriting for Thue programs.
//!
//! A Thue program consists of rewrite rules and a start state.
//! Running a program repeatedly replaces an occurrence of
//! some rule's left-hand side in the state,
//! until no left-hand side occurs in the state any more.
//! Which rule is applied and which occurrence it rewrites
//! is chosen uniformly at random.
//!
//! Apart from replacing an occurrence by a fixed string,
//! rules may print a message (`lhs::=~message`) or
//! replace an occurrence by a line of input (`lhs::=:::`).
//! All input and output goes through a [`Console`],
//! and all randomness comes from an [`Rng`](rand::Rng) given to the [`Engine`].
//!
//! The following example parses a program and runs it to completion:
//!
//! ~~~
//! # use thue::{console::Buffer, Engine, Error, Program};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut prog = Program::parse("a::=b\nb::=~!\n::=\naaa")?;
//!
//! let mut engine = Engine::new(Buffer::new(), StdRng::seed_from_u64(0));
//! engine.run(&mut prog);
//!
//! // every `a` became a `b`, and every `b` was printed and removed
//! assert_eq!(prog.state, "");
//! assert_eq!(engine.console().output(), "!!!");
//! # Ok::<_, Error>(())
//! ~~~
//!
//! # Organisation
//!
//! * The [`matching`] module finds occurrences of patterns and splices states.
//! * The [`order`] module permutes rules before every pass.
//! * The [`console`] module contains the input and output capabilities.
//! * The [`Engine`] drives a [`Program`] to a fixpoint.

pub mod console;
mod engine;
pub mod error;
pub mod matching;
pub mod order;
mod program;
mod rule;
pub mod sample;

pub use console::Console;
pub use engine::{Engine, Halt};
pub use error::Error;
pub use program::Program;
pub use rule::{Kind, Rule};
