use std::io::{self, Write};

use rand::Rng;

use crate::command::Command;

/// Length of the vector every workload starts from.
pub const INITIAL_LEN: u64 = 1;
/// The single bit that vector holds.
pub const INITIAL_BIT: bool = true;

/// A target vector size: `2^exponent` inserts followed by `ranks` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClass {
    exponent: u32,
    ranks: u64,
}

impl SizeClass {
    pub fn new(exponent: u32, ranks: u64) -> Self {
        SizeClass { exponent, ranks }
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn inserts(&self) -> u64 {
        1 << self.exponent
    }

    pub fn ranks(&self) -> u64 {
        self.ranks
    }

    /// Length of the vector once every insert has been applied.
    pub fn final_len(&self) -> u64 {
        INITIAL_LEN + self.inserts()
    }
}

/// The command stream for one size class.
///
/// All inserts come first. Each insert position is drawn from
/// `0..len` where `len` is the logical vector length before that insert,
/// so the stream is valid for a vector built up incrementally. Rank
/// queries follow and are drawn against the final length.
pub struct Workload<R> {
    rng: R,
    size_class: SizeClass,
    len: u64,
    inserted: u64,
    ranked: u64,
}

impl<R: Rng> Workload<R> {
    pub fn new(rng: R, size_class: SizeClass) -> Self {
        Workload {
            rng,
            size_class,
            len: INITIAL_LEN,
            inserted: 0,
            ranked: 0,
        }
    }

    /// Current logical length of the vector.
    pub fn vector_len(&self) -> u64 {
        self.len
    }

    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    fn remaining(&self) -> u64 {
        (self.size_class.inserts() - self.inserted)
            + (self.size_class.ranks() - self.ranked)
    }
}

impl<R: Rng> Iterator for Workload<R> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        if self.inserted < self.size_class.inserts() {
            let index = self.rng.gen_range(0, self.len);
            let bit = self.rng.gen();
            self.inserted += 1;
            self.len += 1;
            Some(Command::Insert { index, bit })
        } else if self.ranked < self.size_class.ranks() {
            let index = self.rng.gen_range(0, self.len);
            let bit = self.rng.gen();
            self.ranked += 1;
            Some(Command::Rank { bit, index })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Workload<R> {}

/// Write the header and every command of one size class to `out`.
///
/// Returns the number of command lines written, not counting the header.
pub fn write_workload<W, R>(
    out: &mut W,
    rng: R,
    size_class: SizeClass,
) -> io::Result<u64>
where
    W: Write,
    R: Rng,
{
    writeln!(out, "{}", INITIAL_LEN)?;
    writeln!(out, "{}", INITIAL_BIT as u8)?;

    let mut lines = 0;
    for command in Workload::new(rng, size_class) {
        writeln!(out, "{}", command)?;
        lines += 1;
    }
    Ok(lines)
}
