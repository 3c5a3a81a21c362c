//! Input and output of programs.
//!
//! Rules that print or read do so through a [`Console`].
//! This allows running programs on the process console ([`Stdio`]) as well as
//! on an in-memory console ([`Buffer`]), for example in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-based input and output capabilities.
///
/// Consoles do not fail:
/// output that cannot be written is dropped, and
/// input that cannot be read is treated as an empty line.
pub trait Console {
    /// Write text without a trailing newline.
    fn write(&mut self, text: &str);

    /// Write a newline.
    fn write_line(&mut self);

    /// Block until a line of input is available and return it
    /// without its line terminator.
    ///
    /// Return the empty string if no more input is available.
    fn read_line(&mut self) -> String;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write(&mut self, text: &str) {
        (**self).write(text)
    }

    fn write_line(&mut self) {
        (**self).write_line()
    }

    fn read_line(&mut self) -> String {
        (**self).read_line()
    }
}

/// Standard input and output of the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdio;

impl Stdio {
    fn output(result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("Could not write output: {}", e)
        }
    }
}

impl Console for Stdio {
    fn write(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        // flush so that prompts appear before reading input
        Self::output(out.write_all(text.as_bytes()).and_then(|()| out.flush()))
    }

    fn write_line(&mut self) {
        let mut out = io::stdout().lock();
        Self::output(writeln!(out).and_then(|()| out.flush()))
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => log::debug!("End of input"),
            Ok(_) => trim_newline(&mut line),
            Err(e) => {
                log::warn!("Could not read input: {}", e);
                line.clear()
            }
        }
        line
    }
}

fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// In-memory console with queued input lines and captured output.
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    input: VecDeque<String>,
    output: String,
}

impl Buffer {
    /// Create a console without input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that yields the given lines as input.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Add a line to the end of the input.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into())
    }

    /// Return everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Return the number of input lines not yet read.
    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl Console for Buffer {
    fn write(&mut self, text: &str) {
        self.output.push_str(text)
    }

    fn write_line(&mut self) {
        self.output.push('\n')
    }

    fn read_line(&mut self) -> String {
        self.input.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer() {
        let mut buf = Buffer::with_input(["one", "two"]);
        buf.write("a");
        buf.write_line();
        buf.write("b");
        assert_eq!(buf.output(), "a\nb");
        assert_eq!(buf.read_line(), "one");
        assert_eq!(buf.pending(), 1);
        assert_eq!(buf.read_line(), "two");
        assert_eq!(buf.read_line(), "");
        buf.push_input("three");
        assert_eq!(buf.pending(), 1);
        assert_eq!(buf.read_line(), "three");
    }

    #[test]
    fn by_reference() {
        fn greet(mut console: impl Console) {
            console.write("hi")
        }
        let mut buf = Buffer::new();
        greet(&mut buf);
        assert_eq!(buf.output(), "hi");
    }

    #[test]
    fn newlines() {
        let trimmed = |s: &str| {
            let mut s = String::from(s);
            trim_newline(&mut s);
            s
        };
        assert_eq!(trimmed("abc\n"), "abc");
        assert_eq!(trimmed("abc\r\n"), "abc");
        assert_eq!(trimmed("abc"), "abc");
        assert_eq!(trimmed("\n"), "");
    }
}
