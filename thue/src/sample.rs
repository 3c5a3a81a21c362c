//! Sample programs.

/// Increment a binary number.
///
/// The number is delimited by underscores on both sides.
/// The marker `++` carries the increment from the last digit to the left.
pub const BINARY_INCREMENT: &str = "
1_::=1++
0_::=1
01++::=10

11++::=1++0

_0::=_
_1++::=10

::=

_1111111111_
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{console::Buffer, Engine, Error, Halt, Program};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn binary_increment() -> Result<(), Error> {
        for seed in 0..5 {
            let mut prog = Program::parse(BINARY_INCREMENT)?;
            let mut engine = Engine::new(Buffer::new(), StdRng::seed_from_u64(seed));
            assert_eq!(engine.run_bounded(&mut prog, 1000), Halt::Fixpoint);
            assert_eq!(prog.state, "10000000000");
            assert_eq!(engine.console().output(), "");
        }
        Ok(())
    }
}
