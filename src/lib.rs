//! # Introduction
//!
//! tapetty runs programs written in the eight-symbol tape language
//! (`+ - < > . , [ ]`), synthesizes such programs from plain text, and can
//! step through an execution forward and backward in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui). It also carries a handful of small
//! text codecs.
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → Synthesizer → Program text → Filter + bracket scan → Interpreter → Output
//!                                                                  ↓
//!                                                              Snapshots → TUI
//! ```
//!
//! 1. [`synth`]: buckets character codes and emits a setup loop plus a
//!    straight-line printing program.
//! 2. [`interpreter`]: filters raw text to instructions, matches brackets,
//!    and executes one instruction at a time.
//! 3. [`machine`]: the byte-cell tape, its cursor and the bracket table.
//! 4. [`snapshot`]: execution history with a memory limit, and the output buffer.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 6. [`codec`]: digests, PBKDF2, base64, Morse and rot13.
//!
//! ## Quick start
//!
//! ```
//! let program = tapetty::synth::synthesize("Hi!", 10).unwrap();
//! let mut no_input = tapetty::interpreter::input::QueuedInput::default();
//! let output = tapetty::interpreter::interpret_with(&program, &mut no_input).unwrap();
//! assert_eq!(output, "Hi!");
//! ```

pub mod codec;
pub mod interpreter;
pub mod machine;
pub mod snapshot;
pub mod synth;
pub mod ui;
