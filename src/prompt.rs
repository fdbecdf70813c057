use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read, Write};

/// Line-oriented conversation with the user.
///
/// Commands talk through this trait so they can be driven by a scripted
/// reader in tests instead of the controlling terminal.
pub trait Prompt {
    /// Print `question` without a newline and read one trimmed line.
    /// End of input yields an empty answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Print a full line of output.
    fn say(&mut self, line: &str) -> Result<()>;
}

pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub type TerminalPrompt = LinePrompt<Box<dyn BufRead>, std::io::Stdout>;

impl TerminalPrompt {
    /// Prompt on the process's stdin/stdout.
    ///
    /// Stdin is read without read-ahead so that any input after the last
    /// answer is still there for a script run from the menu.
    pub fn terminal() -> Self {
        Self::new(unbuffered_stdin(), std::io::stdout())
    }
}

/// Reader that never pulls more than one byte past the current line.
fn unbuffered<R: Read + 'static>(inner: R) -> Box<dyn BufRead> {
    Box::new(BufReader::with_capacity(1, inner))
}

#[cfg(unix)]
fn unbuffered_stdin() -> Box<dyn BufRead> {
    use std::os::fd::AsFd;

    match std::io::stdin().as_fd().try_clone_to_owned() {
        Ok(fd) => unbuffered(std::fs::File::from(fd)),
        Err(e) => {
            tracing::warn!("Falling back to buffered stdin: {}", e);
            Box::new(std::io::stdin().lock())
        }
    }
}

#[cfg(not(unix))]
fn unbuffered_stdin() -> Box<dyn BufRead> {
    Box::new(std::io::stdin().lock())
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{}", question).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).context("Failed to write output")?;
        Ok(())
    }
}
