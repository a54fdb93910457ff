//! Bucket table for the program synthesizer
//!
//! A bucket groups every character code sharing the same quotient under
//! division by the bucket size. Each used nonzero bucket gets one tape cell,
//! preloaded with `bucket_size * bucket` by the setup loop. Unused buckets get
//! no cell, so bucket indices are compacted into dense cell positions.

use crate::synth::SynthError;
use std::collections::BTreeMap;
use std::fmt;

/// One preloaded tape cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketCell {
    pub bucket: usize,
    pub cell: usize,
    pub baseline: usize,
}

/// Which buckets a text uses and where each one lives on the tape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPlan {
    bucket_size: usize,
    /// Every bucket index from 0 to the highest used one, mapped to "used"
    used: BTreeMap<usize, bool>,
    setup_loop: bool,
}

impl BucketPlan {
    /// Build the table for `text`. `bucket_size` below 1 is treated as 1.
    pub fn new(text: &str, bucket_size: usize) -> Result<Self, SynthError> {
        let bucket_size = bucket_size.max(1);

        let mut codes = Vec::new();
        for (index, ch) in text.chars().enumerate() {
            let code = ch as usize;
            if code > usize::from(u8::MAX) {
                return Err(SynthError::UnencodableCharacter { ch, index });
            }
            codes.push(code);
        }

        let max_code = codes.iter().copied().max();
        let setup_loop = bucket_size > 1 && max_code.is_some_and(|m| m >= bucket_size);

        let mut used = BTreeMap::new();
        used.insert(0, false);
        if setup_loop {
            for bucket in 1..=max_code.unwrap_or(0) / bucket_size {
                used.insert(bucket, false);
            }
        }
        for code in codes {
            let bucket = if setup_loop { code / bucket_size } else { 0 };
            used.insert(bucket, true);
        }

        Ok(BucketPlan {
            bucket_size,
            used,
            setup_loop,
        })
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    pub fn has_setup_loop(&self) -> bool {
        self.setup_loop
    }

    /// Bucket serving `code`; everything shares cell 0 when there is no setup loop
    pub fn bucket_of(&self, code: usize) -> usize {
        if self.setup_loop {
            code / self.bucket_size
        } else {
            0
        }
    }

    /// Used nonzero buckets in increasing order
    pub fn used_buckets(&self) -> impl Iterator<Item = usize> + '_ {
        self.used
            .iter()
            .filter(|&(&bucket, &used)| bucket != 0 && used)
            .map(|(&bucket, _)| bucket)
    }

    /// Count of unused bucket indices in `1..bucket`
    pub fn offset(&self, bucket: usize) -> usize {
        self.used
            .range(1..bucket.max(1))
            .filter(|&(_, &used)| !used)
            .count()
    }

    /// Dense tape position of `bucket`
    pub fn cell_of(&self, bucket: usize) -> usize {
        bucket - self.offset(bucket)
    }

    /// Cells the setup loop preloads, with their starting values
    pub fn cells(&self) -> Vec<BucketCell> {
        self.used_buckets()
            .map(|bucket| BucketCell {
                bucket,
                cell: self.cell_of(bucket),
                baseline: self.bucket_size * bucket,
            })
            .collect()
    }

    /// The counter loop that preloads every used bucket cell, or nothing
    pub fn setup_code(&self) -> String {
        if !self.setup_loop {
            return String::new();
        }

        let mut code = "+".repeat(self.bucket_size);
        code.push('[');
        let mut visited = 0;
        for bucket in self.used_buckets() {
            code.push('>');
            code.push_str(&"+".repeat(bucket));
            visited += 1;
        }
        code.push_str(&"<".repeat(visited));
        code.push_str("-]");
        code
    }
}

impl fmt::Display for BucketPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bucket size: {}", self.bucket_size)?;
        if !self.setup_loop {
            return writeln!(f, "no setup loop; all characters use cell 0");
        }
        for cell in self.cells() {
            writeln!(
                f,
                "bucket {:>3} -> cell {:>3} (baseline {})",
                cell.bucket, cell.cell, cell.baseline
            )?;
        }
        Ok(())
    }
}
