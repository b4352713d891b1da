pub mod aggregate;
pub mod analysis;
pub mod args;
pub mod error;
pub mod rank;
pub mod reader;
pub mod record;
pub mod report;
pub mod stats;
pub mod utils;

pub use aggregate::{aggregate, aggregate_parallel, MalformedPolicy};
pub use analysis::{analyze_log, print_analysis_results};
pub use args::Args;
pub use error::{LogError, ParseError};
pub use rank::{rank, RankedEntry, Rankings, TieBreak};
pub use stats::{AggregateResult, AnalysisResult, PageStats};
