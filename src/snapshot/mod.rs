// Snapshot management for time-travel stepping

use crate::interpreter::constants::SNAPSHOT_BASE_SIZE;
use crate::machine::tape::Tape;

/// Append-only record of characters produced by `.`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters written so far
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Output split into display lines
    pub fn get_output(&self) -> Vec<String> {
        let mut result: Vec<String> = self.text.split('\n').map(|s| s.to_string()).collect();
        // Remove trailing empty string if text ended with newline
        if result.last().is_some_and(|s| s.is_empty()) {
            result.pop();
        }
        result
    }
}

/// Execution state captured after one instruction
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tape: Tape,
    pub output: OutputBuffer,
    pub position: usize,
    pub steps_executed: usize,
    pub finished: bool,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        SNAPSHOT_BASE_SIZE + self.tape.len() + self.output.as_str().len()
    }
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Drop every snapshot at index `len` and beyond
    pub fn truncate(&mut self, len: usize) {
        if len >= self.snapshots.len() {
            return;
        }
        let freed: usize = self.snapshots[len..]
            .iter()
            .map(Snapshot::estimated_size)
            .sum();
        self.snapshots.truncate(len);
        self.current_memory -= freed;
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
