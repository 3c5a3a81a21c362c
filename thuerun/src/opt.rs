use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
/// Interpreter for Thue, a nondeterministic string rewriting language
pub struct Opt {
    /// Seed the random source
    ///
    /// Rules and the positions they rewrite are chosen at random.
    /// Runs with the same seed and the same input behave identically.
    #[clap(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Stop after the given number of passes
    ///
    /// Every pass performs at most one substitution.
    /// Programs without fixpoint run forever unless this option is given.
    #[clap(long, value_name = "N")]
    pub max_passes: Option<usize>,

    /// Run the built-in sample program (binary increment)
    #[clap(long)]
    pub sample: bool,

    /// Do not print the final state
    #[clap(long)]
    pub quiet: bool,

    /// Programs to run (one after the other)
    ///
    /// To read a program from standard input, use "-" as file name.
    #[clap(value_name = "FILE", required_unless_present = "sample")]
    pub files: Vec<PathBuf>,
}

#[test]
fn options() {
    let opt = Opt::parse_from(["thuerun", "--seed", "3", "a.t", "-"]);
    assert_eq!(opt.seed, Some(3));
    assert_eq!(opt.max_passes, None);
    assert_eq!(opt.files, [PathBuf::from("a.t"), PathBuf::from("-")]);

    assert!(Opt::try_parse_from(["thuerun"]).is_err());
    assert!(Opt::try_parse_from(["thuerun", "--sample"]).is_ok());
}
