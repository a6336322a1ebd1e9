use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::workload::{write_workload, SizeClass};

const WRITE_BUFFER: usize = 1 << 20;

/// Derive the RNG for one size class from the master seed.
///
/// A file's contents depend only on the master seed and its exponent.
pub fn size_class_rng(master: u64, exponent: u32) -> SmallRng {
    // splitmix64 finalizer to spread the exponent over the second half
    let mut z = (exponent as u64).wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;

    let mut seed = [0u8; 16];
    seed[..8].copy_from_slice(&master.to_le_bytes());
    seed[8..].copy_from_slice(&z.to_le_bytes());
    SmallRng::from_seed(seed)
}

/// What was written for one size class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub exponent: u32,
    pub inserts: u64,
    pub ranks: u64,
}

impl Report {
    /// Total lines in the file, header included.
    pub fn lines(&self) -> u64 {
        2 + self.inserts + self.ranks
    }
}

pub struct Generator {
    config: Config,
    seed: u64,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        Generator { config, seed }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The master seed in use, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Write one file per size class, smallest exponent first.
    pub fn run(&self) -> Result<Vec<Report>> {
        self.config.validate()?;

        let out_dir = &self.config.out_dir;
        fs::create_dir_all(out_dir).with_context(|| {
            format!("creating output directory {}", out_dir.display())
        })?;

        info!(
            "generating exponents {}..={} into {} (seed {})",
            self.config.min_exponent,
            self.config.max_exponent,
            out_dir.display(),
            self.seed
        );

        self.config
            .size_classes()
            .map(|size_class| self.generate(size_class))
            .collect()
    }

    fn generate(&self, size_class: SizeClass) -> Result<Report> {
        let exponent = size_class.exponent();
        let path = self.config.path(exponent);
        info!(
            "writing {} ({} inserts, {} ranks)",
            path.display(),
            size_class.inserts(),
            size_class.ranks()
        );

        let file = File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::with_capacity(WRITE_BUFFER, file);

        let rng = size_class_rng(self.seed, exponent);
        let commands = write_workload(&mut out, rng, size_class)
            .with_context(|| format!("writing {}", path.display()))?;
        out.flush()
            .with_context(|| format!("flushing {}", path.display()))?;

        debug!(
            "{}: {} commands, final vector length {}",
            path.display(),
            commands,
            size_class.final_len()
        );

        Ok(Report {
            path,
            exponent,
            inserts: size_class.inserts(),
            ranks: size_class.ranks(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn draws(master: u64, exponent: u32) -> Vec<u64> {
        let mut rng = size_class_rng(master, exponent);
        (0..8).map(|_| rng.gen()).collect()
    }

    #[test]
    fn test_size_class_rng() {
        assert_eq!(draws(7, 10), draws(7, 10));
        assert_ne!(draws(7, 10), draws(7, 11));
        assert_ne!(draws(7, 10), draws(8, 10));
    }

    #[test]
    fn test_configured_seed() {
        let config = Config {
            seed: Some(1234),
            ..Config::default()
        };
        let generator = Generator::new(config);
        assert_eq!(generator.seed(), 1234);
    }

    #[test]
    fn test_report_lines() {
        let report = Report {
            path: PathBuf::from("evaluationInput-2^10.txt"),
            exponent: 10,
            inserts: 1024,
            ranks: 10_000,
        };
        assert_eq!(report.lines(), 11_026);
    }
}
