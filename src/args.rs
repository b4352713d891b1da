use clap::Parser;
use std::path::PathBuf;

use crate::rank::TieBreak;
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pageviews",
    about = "Rank the pages of a web server log by total and unique views",
    version,
    long_about = None
)]
pub struct Args {
    /// Log file with one `<page> <client>` pair per line
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Number of top pages to display in each ranking
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Ordering of pages with equal counts
    #[arg(long, value_enum, default_value_t = TieBreak::Reversed)]
    pub tie_break: TieBreak,

    /// Skip malformed lines with a warning instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Aggregate on a pool of worker threads
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
