// Execution engine for the tape interpreter

use crate::interpreter::errors::{BracketFault, RuntimeError};
use crate::interpreter::input::InputSource;
use crate::interpreter::program::{Instruction, Program};
use crate::machine::TapeMachine;
use crate::snapshot::{OutputBuffer, Snapshot, SnapshotManager};
use tracing::{debug, trace, warn};

/// What a single call to [`Interpreter::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction ran and the position moved on
    Executed,
    /// The current instruction is `,` and is waiting for [`Interpreter::provide_input`]
    NeedsInput,
    /// The position has reached the end of the program
    Finished,
}

/// Drives a [`TapeMachine`] through a filtered instruction stream
pub struct Interpreter {
    /// Filtered instruction stream
    program: Program,

    /// Tape, cursor and bracket table
    machine: TapeMachine,

    /// Characters produced by `.`
    output: OutputBuffer,

    /// Index of the next instruction to execute
    position: usize,

    /// Instructions completed so far (jumps count as one)
    steps_executed: usize,

    /// Whether the current `,` is waiting for a character
    awaiting_input: bool,

    /// Whether the position has run off the end of the program
    finished: bool,

    /// Recorded history, present only when stepping backward is wanted
    history: Option<SnapshotManager>,

    /// Index of the snapshot matching the current state
    history_position: usize,
}

impl Interpreter {
    /// Filter `source` and build the bracket table.
    ///
    /// Fails with [`RuntimeError::MalformedProgram`] before anything runs if
    /// the brackets are unbalanced.
    pub fn new(source: &str) -> Result<Self, RuntimeError> {
        let program = Program::parse(source);
        let mut machine = TapeMachine::new();

        for (position, inst) in program.instructions().iter().enumerate() {
            match inst {
                Instruction::LoopStart => machine.register_open(position),
                Instruction::LoopEnd => {
                    machine
                        .register_close(position)
                        .map_err(|_| RuntimeError::MalformedProgram {
                            fault: BracketFault::UnmatchedClose,
                            position,
                        })?;
                }
                _ => {}
            }
        }

        if let Some(position) = machine.unclosed_open() {
            return Err(RuntimeError::MalformedProgram {
                fault: BracketFault::UnclosedOpen,
                position,
            });
        }

        debug!(
            instructions = program.len(),
            loops = machine.brackets().pair_count(),
            "program loaded"
        );

        let finished = program.is_empty();
        Ok(Interpreter {
            program,
            machine,
            output: OutputBuffer::new(),
            position: 0,
            steps_executed: 0,
            awaiting_input: false,
            finished,
            history: None,
            history_position: 0,
        })
    }

    /// Record a snapshot after every instruction, bounded by `memory_limit` bytes
    pub fn with_history(mut self, memory_limit: usize) -> Result<Self, RuntimeError> {
        self.history = Some(SnapshotManager::new(memory_limit));
        self.take_snapshot()?;
        Ok(self)
    }

    /// Run to completion, answering every `,` from `input`
    pub fn run(&mut self, input: &mut dyn InputSource) -> Result<String, RuntimeError> {
        loop {
            match self.step()? {
                StepOutcome::Executed => {}
                StepOutcome::NeedsInput => {
                    let ch = input.next_char()?;
                    self.provide_input(ch)?;
                }
                StepOutcome::Finished => break,
            }
        }

        debug!(
            steps = self.steps_executed,
            cells = self.machine.cells().len(),
            output_len = self.output.len(),
            "execution finished"
        );
        Ok(self.output.as_str().to_string())
    }

    /// Execute exactly one instruction
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.finished {
            return Ok(StepOutcome::Finished);
        }
        if self.awaiting_input {
            return Ok(StepOutcome::NeedsInput);
        }

        let position = self.position;
        let Some(inst) = self.program.get(position) else {
            self.finished = true;
            return Ok(StepOutcome::Finished);
        };

        trace!(position, instruction = %inst.as_char(), cell = self.machine.current_value());

        match inst {
            Instruction::Increment => self.machine.increment(),
            Instruction::Decrement => self.machine.decrement(),
            Instruction::Right => self.machine.advance_right(),
            Instruction::Left => {
                self.machine
                    .advance_left()
                    .map_err(|_| RuntimeError::TapeUnderflow { position })?;
            }
            Instruction::Output => self.output.push(self.machine.read_char()),
            Instruction::Input => {
                self.awaiting_input = true;
                return Ok(StepOutcome::NeedsInput);
            }
            Instruction::LoopStart => {
                if self.machine.current_value() == 0 {
                    self.position = self.jump_target(position, BracketFault::UnclosedOpen)?;
                }
            }
            Instruction::LoopEnd => {
                if self.machine.current_value() != 0 {
                    self.position = self.jump_target(position, BracketFault::UnmatchedClose)?;
                }
            }
        }

        self.complete_instruction()?;
        Ok(StepOutcome::Executed)
    }

    /// Complete a pending `,` with `ch`
    pub fn provide_input(&mut self, ch: char) -> Result<(), RuntimeError> {
        if !self.awaiting_input {
            return Err(RuntimeError::InputNotExpected {
                position: self.position,
            });
        }

        let position = self.position;
        self.machine
            .write_char(ch)
            .map_err(|_| RuntimeError::InputOutOfRange { ch, position })?;
        self.awaiting_input = false;
        self.complete_instruction()
    }

    fn jump_target(&self, position: usize, fault: BracketFault) -> Result<usize, RuntimeError> {
        self.machine
            .partner(position)
            .ok_or(RuntimeError::MalformedProgram { fault, position })
    }

    /// Post-increment shared by every instruction, including taken jumps.
    ///
    /// With history on, an instruction whose snapshot does not fit the budget
    /// is rolled back, so a failed step leaves the state as it was.
    fn complete_instruction(&mut self) -> Result<(), RuntimeError> {
        self.position += 1;
        self.steps_executed += 1;
        if self.position >= self.program.len() {
            self.finished = true;
        }
        if self.history.is_some() {
            self.take_snapshot()?;
        }
        Ok(())
    }

    /// Take a snapshot of the current execution state
    fn take_snapshot(&mut self) -> Result<(), RuntimeError> {
        let snapshot = Snapshot {
            tape: self.machine.tape().clone(),
            output: self.output.clone(),
            position: self.position,
            steps_executed: self.steps_executed,
            finished: self.finished,
        };

        let Some(history) = self.history.as_mut() else {
            return Ok(());
        };

        // Executing from a rewound position discards the old future
        if !history.is_empty() {
            history.truncate(self.history_position + 1);
        }

        if history.push(snapshot).is_err() {
            let err = RuntimeError::SnapshotLimitExceeded {
                current: history.memory_usage(),
                limit: history.memory_limit(),
            };
            // Undo the instruction that could not be recorded
            let last = history.get(self.history_position).cloned();
            if let Some(last) = last {
                self.restore_snapshot(&last);
            }
            warn!(
                position = self.position,
                snapshots = self.total_snapshots(),
                "snapshot budget exhausted"
            );
            return Err(err);
        }

        self.history_position = history.len() - 1;
        Ok(())
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.machine.restore_tape(snapshot.tape.clone());
        self.output = snapshot.output.clone();
        self.position = snapshot.position;
        self.steps_executed = snapshot.steps_executed;
        self.finished = snapshot.finished;
        self.awaiting_input = false;
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(RuntimeError::HistoryOperationFailed {
                message: "Already at the beginning of execution".to_string(),
            });
        }
        self.restore_history(self.history_position - 1)
    }

    /// Step forward in execution (replay the next snapshot if there is one,
    /// otherwise execute the next instruction)
    pub fn step_forward(&mut self) -> Result<StepOutcome, RuntimeError> {
        let next = self.history_position + 1;
        if self.history.as_ref().is_some_and(|h| next < h.len()) {
            self.restore_history(next)?;
            return Ok(StepOutcome::Executed);
        }
        self.step()
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        self.restore_history(0)
    }

    fn restore_history(&mut self, index: usize) -> Result<(), RuntimeError> {
        let snapshot = self
            .history
            .as_ref()
            .and_then(|h| h.get(index))
            .cloned()
            .ok_or_else(|| RuntimeError::HistoryOperationFailed {
                message: format!("Snapshot {} not found in history", index),
            })?;

        self.restore_snapshot(&snapshot);
        self.history_position = index;
        Ok(())
    }

    // ========== Getter methods for UI ==========

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn machine(&self) -> &TapeMachine {
        &self.machine
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn steps_executed(&self) -> usize {
        self.steps_executed
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Number of recorded snapshots (0 when history is off)
    pub fn total_snapshots(&self) -> usize {
        self.history.as_ref().map_or(0, SnapshotManager::len)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn awaiting_input(&self) -> bool {
        self.awaiting_input
    }
}
