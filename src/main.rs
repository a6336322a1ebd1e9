use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use bv_workload::config::{
    Config, DEFAULT_PREFIX, MAX_EXPONENT, MIN_EXPONENT, RANK_QUERIES,
};
use bv_workload::Generator;

#[derive(StructOpt)]
#[structopt(
    name = "bv-workload",
    about = "Generate insert/rank workloads for dynamic bitvector benchmarks",
    raw(setting = "clap::AppSettings::ColoredHelp")
)]
struct Opt {
    /// Directory the workload files are written to
    #[structopt(
        short = "o",
        long = "out-dir",
        default_value = ".",
        parse(from_os_str)
    )]
    out_dir: PathBuf,
    /// Smallest size class, as a power of two
    #[structopt(long = "min-exp")]
    min_exp: Option<u32>,
    /// Largest size class, as a power of two
    #[structopt(long = "max-exp")]
    max_exp: Option<u32>,
    /// Rank queries per file
    #[structopt(short = "r", long = "ranks")]
    ranks: Option<u64>,
    /// Master seed; a random one is drawn and logged when omitted
    #[structopt(short = "s", long = "seed")]
    seed: Option<u64>,
    /// File name prefix
    #[structopt(short = "p", long = "prefix")]
    prefix: Option<String>,
    /// Log more (-v debug, -vv trace)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

impl Opt {
    fn into_config(self) -> Config {
        Config {
            out_dir: self.out_dir,
            prefix: self.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_owned()),
            min_exponent: self.min_exp.unwrap_or(MIN_EXPONENT),
            max_exponent: self.max_exp.unwrap_or(MAX_EXPONENT),
            ranks: self.ranks.unwrap_or(RANK_QUERIES),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    )
    .init();

    let generator = Generator::new(opt.into_config());
    let reports = generator.run()?;

    let lines: u64 = reports.iter().map(|r| r.lines()).sum();
    info!(
        "wrote {} files, {} lines total (seed {})",
        reports.len(),
        lines,
        generator.seed()
    );
    Ok(())
}
