//! Byte-cell tape with a fixed left origin
//!
//! The tape starts as a single zero cell and grows rightward one cell at a
//! time as the cursor walks past its end. Cells are never removed.

/// Growable array of byte cells plus the cursor into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: usize,
}

impl Tape {
    pub fn new() -> Self {
        Tape {
            cells: vec![0],
            cursor: 0,
        }
    }

    /// Move one cell right, appending a zero cell when walking off the end
    pub fn advance_right(&mut self) {
        self.cursor += 1;
        if self.cursor == self.cells.len() {
            self.cells.push(0);
        }
    }

    /// Move one cell left; the cursor never goes below cell 0
    pub fn advance_left(&mut self) -> Result<(), String> {
        if self.cursor == 0 {
            return Err("cursor moved left of cell 0".to_string());
        }
        self.cursor -= 1;
        Ok(())
    }

    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(1);
    }

    pub fn current_value(&self) -> u8 {
        self.cells[self.cursor]
    }

    pub fn set_current(&mut self, value: u8) {
        self.cells[self.cursor] = value;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A tape is never empty: it starts with its origin cell and cells are never removed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
