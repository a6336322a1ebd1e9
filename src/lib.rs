//! Random insert/rank workloads for benchmarking dynamic bitvectors.
//!
//! Each workload file starts from a one-bit vector, grows it with `2^e`
//! random inserts, then issues a batch of rank queries against the final
//! vector. See [`workload::Workload`] for the command stream itself and
//! [`generator::Generator`] for writing one file per size class.

pub mod command;
pub mod config;
pub mod generator;
pub mod workload;

pub use command::{Command, ParseCommandError};
pub use config::Config;
pub use generator::{Generator, Report};
pub use workload::{write_workload, SizeClass, Workload};
