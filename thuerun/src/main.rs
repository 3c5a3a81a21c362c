//! An interpreter for Thue, a nondeterministic string rewriting language.

use clap::Parser;
use thuerun::{Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    thuerun::run(&opt)
}
