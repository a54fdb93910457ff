// Constants for the tape interpreter and synthesizer

/// Bucket size used by the synthesizer when none is given
pub const DEFAULT_BUCKET_SIZE: usize = 10;

/// Byte budget for the execution history kept by the TUI (64 MiB)
pub const SNAPSHOT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Fixed per-snapshot overhead used in size estimates
pub const SNAPSHOT_BASE_SIZE: usize = 64;

/// Delay between steps while auto-play is active
pub const PLAY_INTERVAL_MS: u64 = 250;

/// Most instructions a single "jump to end" keypress will execute
pub const RUN_TO_END_STEP_LIMIT: usize = 1_000_000;
