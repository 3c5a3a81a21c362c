use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use thue::console::Buffer;
use thue::{matching, sample, Engine, Program};

fn run(prog: &Program, seed: u64) -> Program {
    let mut prog = prog.clone();
    let mut engine = Engine::new(Buffer::new(), StdRng::seed_from_u64(seed));
    engine.run(&mut prog);
    prog
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let increment = Program::parse(sample::BINARY_INCREMENT).unwrap();

    // every pass rewrites one of many occurrences
    let text = format!("a::=b\nb::=c\n::=\n{}", "a".repeat(200));
    let rewrite = Program::parse(&text).unwrap();

    let state = "ab".repeat(10_000);

    c.bench_function("parse", |b| b.iter(|| Program::parse(sample::BINARY_INCREMENT).unwrap()));
    c.bench_function("increment", |b| b.iter(|| run(&increment, 0)));
    c.bench_function("rewrite", |b| b.iter(|| run(&rewrite, 0)));
    c.bench_function("occurrences", |b| b.iter(|| matching::occurrences(&state, "ba")));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
