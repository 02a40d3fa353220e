//! Form input and dialog rendering
//!
//! [`FormIo`] is what the forms need from a frontend: field prompts and
//! blocking dialogs. [`TerminalIo`] renders them on a line-oriented terminal.

use crate::constants::forms::BODY_TERMINATOR;
use colored::*;
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Field prompts and blocking dialogs used by the forms
pub trait FormIo {
    /// Ask for a single-line field. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>>;

    /// Ask for a multi-line field, trimmed. Returns `None` at end of input.
    fn prompt_multiline(&mut self, label: &str) -> io::Result<Option<String>>;

    fn show_info(&mut self, title: &str, message: &str) -> io::Result<()>;

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()>;

    /// Non-blocking status line, e.g. a window title or progress note
    fn show_status(&mut self, message: &str) -> io::Result<()>;
}

/// Terminal rendering of the forms
pub struct TerminalIo<R, W> {
    reader: R,
    writer: W,
}

impl TerminalIo<io::StdinLock<'static>, Stdout> {
    /// Forms on the process stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> FormIo for TerminalIo<R, W> {
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}: ", label.bold())?;
        self.writer.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn prompt_multiline(&mut self, label: &str) -> io::Result<Option<String>> {
        writeln!(
            self.writer,
            "{} (finish with a line containing only '{}'):",
            label.bold(),
            BODY_TERMINATOR
        )?;
        self.writer.flush()?;

        let mut lines = Vec::new();
        loop {
            match self.read_line()? {
                Some(line) if line.trim() == BODY_TERMINATOR => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => return Ok(None),
                None => break,
            }
        }

        Ok(Some(lines.join("\n").trim().to_string()))
    }

    fn show_info(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", format!("[{title}]").green().bold(), message)
    }

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{} {}", format!("[{title}]").red().bold(), message)
    }

    fn show_status(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message.cyan())
    }
}
