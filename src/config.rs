use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::workload::SizeClass;

pub const MIN_EXPONENT: u32 = 10;
pub const MAX_EXPONENT: u32 = 25;
pub const RANK_QUERIES: u64 = 10_000;
pub const DEFAULT_PREFIX: &str = "evaluationInput";

/// Largest exponent accepted. `2^40` inserts is already a multi-terabyte
/// file, and it keeps every index comfortably inside a `u64`.
pub const EXPONENT_LIMIT: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub min_exponent: u32,
    pub max_exponent: u32,
    pub ranks: u64,
    /// Master seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_owned(),
            min_exponent: MIN_EXPONENT,
            max_exponent: MAX_EXPONENT,
            ranks: RANK_QUERIES,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.min_exponent > self.max_exponent {
            bail!(
                "minimum exponent {} is larger than maximum exponent {}",
                self.min_exponent,
                self.max_exponent
            );
        }
        if self.max_exponent > EXPONENT_LIMIT {
            bail!(
                "exponent {} is above the supported limit of {}",
                self.max_exponent,
                EXPONENT_LIMIT
            );
        }
        if self.prefix.contains(std::path::is_separator) {
            bail!("file prefix {:?} contains a path separator", self.prefix);
        }
        Ok(())
    }

    /// e.g. `evaluationInput-2^10.txt`
    pub fn file_name(&self, exponent: u32) -> String {
        format!("{}-2^{}.txt", self.prefix, exponent)
    }

    pub fn path(&self, exponent: u32) -> PathBuf {
        self.out_dir.join(self.file_name(exponent))
    }

    pub fn size_classes(&self) -> impl Iterator<Item = SizeClass> {
        let ranks = self.ranks;
        (self.min_exponent..=self.max_exponent)
            .map(move |exponent| SizeClass::new(exponent, ranks))
    }
}
