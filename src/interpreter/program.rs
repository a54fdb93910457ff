//! Instruction stream decoding
//!
//! Raw program text is reduced to the eight-symbol instruction alphabet;
//! everything else (comments, whitespace, letters) is dropped before any
//! position is assigned. All instruction positions used by the engine and
//! the bracket map index this filtered stream.

use std::fmt;

/// One tape-language instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    Right,
    /// `<`
    Left,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '>' => Some(Instruction::Right),
            '<' => Some(Instruction::Left),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Right => '>',
            Instruction::Left => '<',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

/// Filtered instruction stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Keep only instruction characters, in order
    pub fn parse(source: &str) -> Self {
        Program {
            instructions: source.chars().filter_map(Instruction::from_char).collect(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, position: usize) -> Option<Instruction> {
        self.instructions.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            write!(f, "{}", inst.as_char())?;
        }
        Ok(())
    }
}
