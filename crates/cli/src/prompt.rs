use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-based question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` without a newline and returns the trimmed answer.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("could not write prompt")?;
        self.output.flush().context("could not flush prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("could not read answer")?;
        Ok(line.trim().to_string())
    }

    /// True only for `y` or `yes`, any case.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?.to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("could not write output")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
