use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Line-oriented prompt over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one trimmed line. `None` once input is
    /// exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints a message padded by blank lines, the way every result is shown.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}\n", text)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "\n{} {}\n", "[ERROR]".red().bold(), text)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
