//! Loop bracket correspondence
//!
//! Open brackets are pushed onto a stack as they are registered; each close
//! pairs with whatever open sits on top. The resulting map is bijective: every
//! paired position can be looked up from either end.

use rustc_hash::FxHashMap;

/// Jump table between matching `[` and `]` positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketMap {
    pairs: FxHashMap<usize, usize>,
    unpaired: Vec<usize>,
}

impl BracketMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_open(&mut self, pos: usize) {
        self.unpaired.push(pos);
    }

    /// Pair `pos` with the most recently registered open bracket.
    /// Returns the position of that open bracket.
    pub fn register_close(&mut self, pos: usize) -> Result<usize, String> {
        let open = self
            .unpaired
            .pop()
            .ok_or_else(|| format!("']' at {} has no matching '['", pos))?;
        self.pairs.insert(open, pos);
        self.pairs.insert(pos, open);
        Ok(open)
    }

    /// The other end of the bracket at `pos`
    pub fn partner(&self, pos: usize) -> Option<usize> {
        self.pairs.get(&pos).copied()
    }

    /// Innermost open bracket still waiting for its close, if any
    pub fn unclosed_open(&self) -> Option<usize> {
        self.unpaired.last().copied()
    }

    /// Number of completed pairs
    pub fn pair_count(&self) -> usize {
        self.pairs.len() / 2
    }
}
