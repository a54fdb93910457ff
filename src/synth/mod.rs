//! Program synthesizer
//!
//! Produces a tape program that prints a given text when interpreted.
//!
//! Reaching a character code one `+` at a time from zero is expensive, so the
//! synthesizer first runs a counter loop that preloads one cell per used
//! [bucket](buckets) with a multiple of the bucket size. Each character is
//! then printed by walking to its bucket's cell, nudging that cell from its
//! last known value to the exact code, and emitting `.`:
//!
//! ```text
//! "A" (65), bucket size 10
//!
//! ++++++++++[>++++++<-]   cell 1 = 10 * 6 = 60
//! >+++++.                 60 → 65, print
//! ```
//!
//! Apart from that one optional loop the generated program is straight-line:
//! it never contains `,` and never contains other brackets.

pub mod buckets;

use buckets::BucketPlan;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

/// Synthesizer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    #[error("character {ch:?} at index {index} does not fit in a byte cell")]
    UnencodableCharacter { ch: char, index: usize },
}

/// Bucket plan `synthesize` would use for `text`
pub fn plan(text: &str, bucket_size: usize) -> Result<BucketPlan, SynthError> {
    BucketPlan::new(text, bucket_size)
}

/// Build a program whose output is exactly `text`
pub fn synthesize(text: &str, bucket_size: usize) -> Result<String, SynthError> {
    let plan = BucketPlan::new(text, bucket_size)?;
    let mut program = plan.setup_code();

    // Last value known to be loaded into each cell
    let mut baselines: FxHashMap<usize, usize> = FxHashMap::default();
    baselines.insert(0, 0);
    for cell in plan.cells() {
        baselines.insert(cell.cell, cell.baseline);
    }

    let mut cursor = 0;
    for ch in text.chars() {
        let code = ch as usize;
        let cell = plan.cell_of(plan.bucket_of(code));

        push_moves(&mut program, cursor, cell);
        cursor = cell;

        let baseline = baselines.get(&cell).copied().unwrap_or(0);
        push_delta(&mut program, baseline, code);
        program.push('.');
        baselines.insert(cell, code);
    }

    debug!(
        text_len = text.chars().count(),
        bucket_size = plan.bucket_size(),
        cells = plan.cells().len(),
        setup_loop = plan.has_setup_loop(),
        program_len = program.len(),
        "program synthesized"
    );

    Ok(program)
}

fn push_moves(program: &mut String, from: usize, to: usize) {
    match to.cmp(&from) {
        Ordering::Greater => program.push_str(&">".repeat(to - from)),
        Ordering::Less => program.push_str(&"<".repeat(from - to)),
        Ordering::Equal => {}
    }
}

fn push_delta(program: &mut String, from: usize, to: usize) {
    match to.cmp(&from) {
        Ordering::Greater => program.push_str(&"+".repeat(to - from)),
        Ordering::Less => program.push_str(&"-".repeat(from - to)),
        Ordering::Equal => {}
    }
}
