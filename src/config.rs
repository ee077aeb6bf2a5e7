use crate::gen_seed;
use crate::io::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bucket-draw")]
#[command(about = "Draws 36 entrants into 4 buckets and generates the group-stage matches")]
pub struct DrawConfig {
    /// File with one entrant per line
    #[arg(short, long, default_value = "teams.txt")]
    pub input: PathBuf,

    /// File the draw is written to
    #[arg(short, long, default_value = "results.txt")]
    pub output: PathBuf,

    /// Seed of the shuffle, to reproduce a previous draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Format of the written draw
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl DrawConfig {
    /// The provided seed, or a fresh random one.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(gen_seed)
    }
}
