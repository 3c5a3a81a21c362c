mod error;
mod opt;
mod path_read;

pub use error::Error;
pub use opt::Opt;
pub use path_read::PathRead;

use rand::{rngs::StdRng, SeedableRng};
use thue::console::Stdio;
use thue::{sample, Engine, Halt, Program};

/// Parse and run a single program, printing its final state.
///
/// If the program cannot be parsed, the empty final state is printed
/// before the parse error is returned.
pub fn run_text(text: &str, opt: &Opt, engine: &mut Engine<Stdio, StdRng>) -> Result<String, Error> {
    let result = Program::parse(text).map(|mut prog| {
        log::info!("Run program with {} rules", prog.rules.len());
        match opt.max_passes {
            Some(max) => {
                if engine.run_bounded(&mut prog, max) == Halt::Limit {
                    log::warn!("No fixpoint reached after {} passes", max)
                }
            }
            None => engine.run(&mut prog),
        }
        prog.state
    });

    if !opt.quiet {
        println!("FINAL STATE: {}", result.as_deref().unwrap_or_default());
    }
    Ok(result?)
}

/// Run the sample program if requested, then all given files.
pub fn run(opt: &Opt) -> Result<(), Error> {
    let mut engine = match opt.seed {
        Some(seed) => Engine::new(Stdio, StdRng::seed_from_u64(seed)),
        None => Engine::stdio(),
    };

    if opt.sample {
        run_text(sample::BINARY_INCREMENT, opt, &mut engine)?;
    }

    for file in &opt.files {
        let file = PathRead::try_from(file)?;
        log::info!("Read {}", file.name);
        run_text(&file.read_to_string()?, opt, &mut engine)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn quiet() -> Opt {
        Opt {
            seed: Some(1),
            max_passes: Some(100),
            sample: false,
            quiet: true,
            files: Vec::new(),
        }
    }

    #[test]
    fn final_state() -> Result<(), Error> {
        let mut engine = Engine::new(Stdio, StdRng::seed_from_u64(0));
        let state = run_text("a::=b\n::=\naaa", &quiet(), &mut engine)?;
        assert_eq!(state, "bbb");
        Ok(())
    }

    #[test]
    fn bounded() -> Result<(), Error> {
        let mut engine = Engine::new(Stdio, StdRng::seed_from_u64(0));
        let state = run_text("a::=aa\n::=\na", &quiet(), &mut engine)?;
        assert_eq!(state.len(), 101);
        Ok(())
    }

    #[test]
    fn parse_error() {
        let mut engine = Engine::new(Stdio, StdRng::seed_from_u64(0));
        let result = run_text("a::=b\naaa", &quiet(), &mut engine);
        assert!(matches!(result, Err(Error::Thue(thue::Error::Parse(_)))));
    }

    #[test]
    fn unseeded_sample() -> Result<(), Error> {
        run(&Opt::parse_from(["thuerun", "--quiet", "--sample"]))
    }

    #[test]
    fn files() -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("thuerun-{}.t", std::process::id()));
        std::fs::write(&path, "x::=y\n::=\nxx\n")?;
        let mut opt = quiet();
        opt.files.push(path.clone());
        let result = run(&opt);
        std::fs::remove_file(&path)?;
        result
    }
}
