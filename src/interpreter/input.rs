//! Character sources for the `,` instruction
//!
//! The engine never touches a terminal itself. Whoever runs a program hands it
//! an [`InputSource`], and each `,` asks that source for exactly one character.
//!
//! - [`LinePrompt`]: line-oriented prompt that re-asks until a line holds
//!   exactly one character (stdin/stderr via [`LinePrompt::stdin`])
//! - [`QueuedInput`]: characters supplied up front
//! - [`CallbackInput`]: any closure producing one character per call

use crate::interpreter::errors::RuntimeError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Supplies one character per `,` instruction
pub trait InputSource {
    fn next_char(&mut self) -> Result<char, RuntimeError>;
}

/// Prompt on `writer`, read lines from `reader`
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W, prompt: impl Into<String>) -> Self {
        LinePrompt {
            reader,
            writer,
            prompt: prompt.into(),
        }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr so program output on stdout stays clean
    pub fn stdin() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stderr(), "input> ")
    }
}

impl<R: BufRead, W: Write> InputSource for LinePrompt<R, W> {
    fn next_char(&mut self) -> Result<char, RuntimeError> {
        let io_err = |e: io::Error| RuntimeError::InputUnavailable {
            message: e.to_string(),
        };

        loop {
            write!(self.writer, "{}", self.prompt).map_err(io_err)?;
            self.writer.flush().map_err(io_err)?;

            let mut line = String::new();
            if self.reader.read_line(&mut line).map_err(io_err)? == 0 {
                return Err(RuntimeError::InputUnavailable {
                    message: "end of input".to_string(),
                });
            }

            let line = line.trim_end_matches(['\n', '\r']);
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => return Ok(c),
                _ => {
                    warn!(len = line.chars().count(), "expected exactly one character");
                    writeln!(self.writer, "Please enter exactly one character.")
                        .map_err(io_err)?;
                }
            }
        }
    }
}

/// Characters supplied ahead of time, consumed front to back
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    pending: VecDeque<char>,
}

impl QueuedInput {
    pub fn new(text: &str) -> Self {
        QueuedInput {
            pending: text.chars().collect(),
        }
    }
}

impl InputSource for QueuedInput {
    fn next_char(&mut self) -> Result<char, RuntimeError> {
        self.pending
            .pop_front()
            .ok_or_else(|| RuntimeError::InputUnavailable {
                message: "input queue exhausted".to_string(),
            })
    }
}

/// Adapts a closure into an [`InputSource`]
pub struct CallbackInput<F>(pub F);

impl<F> InputSource for CallbackInput<F>
where
    F: FnMut() -> Result<char, RuntimeError>,
{
    fn next_char(&mut self) -> Result<char, RuntimeError> {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_prompt_reasks_until_single_char() {
        let input = b"\nab\nx\n" as &[u8];
        let mut out = Vec::new();
        let c = LinePrompt::new(input, &mut out, "? ").next_char().unwrap();
        assert_eq!(c, 'x');

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("? ").count(), 3);
        assert_eq!(transcript.matches("exactly one character").count(), 2);
    }

    #[test]
    fn test_line_prompt_eof_is_unavailable() {
        let mut out = Vec::new();
        let err = LinePrompt::new(b"" as &[u8], &mut out, "? ")
            .next_char()
            .unwrap_err();
        assert!(matches!(err, RuntimeError::InputUnavailable { .. }));
    }

    #[test]
    fn test_queued_input_drains_in_order() {
        let mut q = QueuedInput::new("hi");
        assert_eq!(q.next_char(), Ok('h'));
        assert_eq!(q.next_char(), Ok('i'));
        assert!(q.next_char().is_err());
    }
}
