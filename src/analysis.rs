use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, Level};

use crate::aggregate::{aggregate_counted, aggregate_parallel, MalformedPolicy};
use crate::rank::rank;
use crate::reader::read_lines;
use crate::report::render;
use crate::stats::AnalysisResult;
use crate::utils::default_workers;
use crate::Args;

pub fn analyze_log(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", file_path = ?args.log_file, "Starting log analysis");

    let lines = read_lines(&args.log_file)?;

    let policy = if args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Fail
    };

    let aggregation = if args.parallel {
        let workers = args.workers.unwrap_or_else(default_workers);
        aggregate_parallel(&lines, policy, workers)?
    } else {
        aggregate_counted(&lines, policy)?
    };

    let rank_start_time = Instant::now();
    let mut rankings = rank(&aggregation.result, args.tie_break);
    if let Some(top) = args.top {
        rankings.truncate(top);
    }
    info!(
        action = "complete",
        component = "ranking",
        pages = aggregation.result.len(),
        duration_ms = rank_start_time.elapsed().as_millis(),
        "Ranked pages"
    );

    let result = AnalysisResult {
        rankings,
        pages: aggregation.result.len(),
        total_views: aggregation.result.total_views(),
        distinct_clients: tracing::enabled!(Level::INFO)
            .then(|| aggregation.result.distinct_clients()),
        skipped: aggregation.skipped,
    };

    info!(
        action = "complete",
        component = "analysis",
        pages = result.pages,
        total_views = result.total_views,
        distinct_clients = ?result.distinct_clients,
        skipped = result.skipped,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(result)
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) -> Result<()> {
    let report = render(&result.rankings, args.format).context("Failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to flush report")?;

    Ok(())
}
