//! Execution of programs.

use crate::console::{Console, Stdio};
use crate::{order, Program};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Reason why execution stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Halt {
    /// No rule matches the state any more.
    Fixpoint,
    /// The maximal number of passes was reached.
    Limit,
}

/// Rewrite engine.
///
/// The engine performs passes over the rules of a program.
/// In every pass, the rules are traversed in a random order, and
/// the first rule whose pattern occurs in the state rewrites it.
/// Execution ends with the first pass that rewrites nothing.
pub struct Engine<C, R> {
    console: C,
    rng: R,
    /// indices of rules in the order of the current pass
    order: Vec<usize>,
}

impl Engine<Stdio, StdRng> {
    /// Create an engine on the process console with a random seed.
    pub fn stdio() -> Self {
        Self::new(Stdio, StdRng::from_entropy())
    }
}

impl<C: Console, R: Rng> Engine<C, R> {
    pub fn new(console: C, rng: R) -> Self {
        Self {
            console,
            rng,
            order: Vec::new(),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Perform at most one substitution, returning whether one was performed.
    pub fn pass(&mut self, prog: &mut Program) -> bool {
        self.order.clear();
        self.order.extend(0..prog.rules.len());
        order::permute(&mut self.order, &mut self.rng);
        log::trace!("Pass {} with rule order {:?}", prog.steps, self.order);

        for &i in &self.order {
            let rule = &prog.rules[i];
            if let Some(state) = rule.substitute(&prog.state, &mut self.rng, &mut self.console) {
                log::debug!("Apply {}: {}", rule, state);
                prog.state = state;
                prog.steps += 1;
                return true;
            }
        }
        false
    }

    /// Run the program until no rule matches.
    ///
    /// This does not terminate for programs without reachable fixpoint.
    pub fn run(&mut self, prog: &mut Program) {
        while self.pass(prog) {}
        log::info!("Halted after {} steps", prog.steps);
    }

    /// Run the program for at most `max_passes` passes.
    ///
    /// If all passes rewrite the state, [`Halt::Limit`] is returned,
    /// even if the resulting state happens to be a fixpoint.
    pub fn run_bounded(&mut self, prog: &mut Program, max_passes: usize) -> Halt {
        for _ in 0..max_passes {
            if !self.pass(prog) {
                log::info!("Halted after {} steps", prog.steps);
                return Halt::Fixpoint;
            }
        }
        log::info!("Stopped after {} passes", max_passes);
        Halt::Limit
    }
}
