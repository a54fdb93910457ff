//! Tape-language execution engine
//!
//! This module provides the core execution logic:
//! - [`program`]: filtering raw text into the instruction stream
//! - [`engine`]: the stepping [`Interpreter`](engine::Interpreter) with optional history
//! - [`input`]: character sources for the `,` instruction
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! Brackets are matched once, up front, against the filtered stream. Execution
//! then walks the stream one instruction at a time. A taken jump lands *on*
//! the partner bracket and the usual post-increment moves past it, so the
//! partner is never re-evaluated.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod input;
pub mod program;

use engine::Interpreter;
use errors::RuntimeError;
use input::{InputSource, LinePrompt};

/// Run `source` and return everything it printed.
///
/// Any `,` prompts on stderr and reads a line from stdin.
pub fn interpret(source: &str) -> Result<String, RuntimeError> {
    interpret_with(source, &mut LinePrompt::stdin())
}

/// Run `source`, answering `,` from `input`
pub fn interpret_with(source: &str, input: &mut dyn InputSource) -> Result<String, RuntimeError> {
    let mut interpreter = Interpreter::new(source)?;
    if interpreter.is_finished() {
        return Ok(String::new());
    }
    interpreter.run(input)
}
