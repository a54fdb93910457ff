//! Tape machine execution state
//!
//! This module provides the mutable context an interpreter run operates on:
//! - [`tape`]: the growable byte-cell tape and its cursor
//! - [`brackets`]: the stack-built `[`/`]` jump table
//!
//! # Cell Semantics
//!
//! Cells are `u8`. Arithmetic wraps in both directions:
//! ```text
//! 255 + 1  →  0
//!   0 - 1  →  255
//! ```
//!
//! Characters are read and written as code points in `0..=255`, so a cell
//! maps onto a Latin-1 character.

pub mod brackets;
pub mod tape;

use brackets::BracketMap;
use tape::Tape;

/// One execution context: tape, cursor and bracket correspondence
#[derive(Debug, Clone, Default)]
pub struct TapeMachine {
    tape: Tape,
    brackets: BracketMap,
}

impl TapeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_right(&mut self) {
        self.tape.advance_right();
    }

    pub fn advance_left(&mut self) -> Result<(), String> {
        self.tape.advance_left()
    }

    pub fn increment(&mut self) {
        self.tape.increment();
    }

    pub fn decrement(&mut self) {
        self.tape.decrement();
    }

    /// Current cell reinterpreted as a character
    pub fn read_char(&self) -> char {
        char::from(self.tape.current_value())
    }

    /// Store the code point of `ch` in the current cell
    pub fn write_char(&mut self, ch: char) -> Result<(), String> {
        let value = u8::try_from(u32::from(ch))
            .map_err(|_| format!("'{}' (U+{:04X}) does not fit in a cell", ch, ch as u32))?;
        self.tape.set_current(value);
        Ok(())
    }

    pub fn current_value(&self) -> u8 {
        self.tape.current_value()
    }

    pub fn register_open(&mut self, pos: usize) {
        self.brackets.register_open(pos);
    }

    pub fn register_close(&mut self, pos: usize) -> Result<usize, String> {
        self.brackets.register_close(pos)
    }

    pub fn partner(&self, pos: usize) -> Option<usize> {
        self.brackets.partner(pos)
    }

    pub fn unclosed_open(&self) -> Option<usize> {
        self.brackets.unclosed_open()
    }

    pub fn cursor(&self) -> usize {
        self.tape.cursor()
    }

    pub fn cells(&self) -> &[u8] {
        self.tape.cells()
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Swap in a previously captured tape; the bracket map is left alone
    pub fn restore_tape(&mut self, tape: Tape) {
        self.tape = tape;
    }

    pub fn brackets(&self) -> &BracketMap {
        &self.brackets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_wraps_to_zero() {
        let mut machine = TapeMachine::new();
        for _ in 0..255 {
            machine.increment();
        }
        assert_eq!(machine.current_value(), 255);
        machine.increment();
        assert_eq!(machine.current_value(), 0);
    }

    #[test]
    fn test_decrement_wraps_to_max() {
        let mut machine = TapeMachine::new();
        machine.decrement();
        assert_eq!(machine.current_value(), 255);
    }

    #[test]
    fn test_tape_grows_one_cell_at_a_time() {
        let mut machine = TapeMachine::new();
        assert_eq!(machine.cells().len(), 1);
        assert!(!machine.tape().is_empty());
        machine.advance_right();
        machine.advance_right();
        assert_eq!(machine.cells(), &[0, 0, 0]);
        assert_eq!(machine.cursor(), 2);

        // Walking back and forth over existing cells does not grow the tape
        machine.advance_left().unwrap();
        machine.advance_right();
        assert_eq!(machine.cells().len(), 3);
    }

    #[test]
    fn test_advance_left_at_origin_fails() {
        let mut machine = TapeMachine::new();
        assert!(machine.advance_left().is_err());
        assert_eq!(machine.cursor(), 0);
    }

    #[test]
    fn test_write_and_read_char() {
        let mut machine = TapeMachine::new();
        machine.write_char('A').unwrap();
        assert_eq!(machine.current_value(), 65);
        assert_eq!(machine.read_char(), 'A');

        machine.write_char('ÿ').unwrap();
        assert_eq!(machine.current_value(), 255);

        assert!(machine.write_char('€').is_err());
        assert_eq!(machine.current_value(), 255);
    }
}
