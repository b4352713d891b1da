use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::LogError;
use crate::record::parse_record;
use crate::stats::AggregateResult;

/// What to do with a line that is not `<page> <client>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort the run on the first malformed line.
    #[default]
    Fail,
    /// Log a warning and keep going.
    Skip,
}

/// Output of an aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub result: AggregateResult,
    pub skipped: usize,
}

/// Builds per-page statistics from raw log lines, in input order.
pub fn aggregate<I, S>(lines: I, policy: MalformedPolicy) -> Result<AggregateResult, LogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_from(lines, 1, policy).map(|aggregation| aggregation.result)
}

/// Like [`aggregate`], but also reports how many lines were skipped.
pub fn aggregate_counted<I, S>(lines: I, policy: MalformedPolicy) -> Result<Aggregation, LogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start_time = Instant::now();
    let aggregation = aggregate_from(lines, 1, policy)?;

    info!(
        action = "complete",
        component = "aggregation",
        pages = aggregation.result.len(),
        skipped = aggregation.skipped,
        duration_ms = start_time.elapsed().as_millis(),
        "Aggregated log lines"
    );
    Ok(aggregation)
}

/// Aggregates `lines` on a rayon pool of `workers` threads.
///
/// The input is cut into contiguous chunks and each chunk is aggregated on
/// its own; chunk results are then merged in input order, so the result is
/// identical to the sequential [`aggregate`], page order included.
pub fn aggregate_parallel(
    lines: &[String],
    policy: MalformedPolicy,
    workers: usize,
) -> Result<Aggregation, LogError> {
    if workers == 0 {
        return Err(LogError::Usage("worker count must be greater than 0".into()));
    }

    let start_time = Instant::now();
    let chunk_size = lines.len().div_ceil(workers).max(1);
    info!(
        action = "configure",
        component = "parallel_aggregation",
        worker_count = workers,
        chunk_size,
        line_count = lines.len(),
        "Using workers for aggregation"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let partials: Vec<Result<Aggregation, LogError>> = pool.install(|| {
        lines
            .par_chunks(chunk_size)
            .enumerate()
            .map(|(chunk, chunk_lines)| {
                aggregate_from(chunk_lines, chunk * chunk_size + 1, policy)
            })
            .collect()
    });

    // Chunks are merged in order so the earliest malformed line wins and
    // first-sighting order matches a sequential pass.
    let mut merged = Aggregation::default();
    for partial in partials {
        let partial = partial?;
        merged.result.merge(partial.result);
        merged.skipped += partial.skipped;
    }

    info!(
        action = "complete",
        component = "parallel_aggregation",
        pages = merged.result.len(),
        skipped = merged.skipped,
        duration_ms = start_time.elapsed().as_millis(),
        "Aggregated log lines"
    );
    Ok(merged)
}

fn aggregate_from<I, S>(
    lines: I,
    first_line_number: usize,
    policy: MalformedPolicy,
) -> Result<Aggregation, LogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregation = Aggregation::default();

    for (offset, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let record = match parse_record(line) {
            Ok(record) => record,
            Err(source) => {
                let line_number = first_line_number + offset;
                match policy {
                    MalformedPolicy::Fail => {
                        return Err(LogError::MalformedRecord {
                            line_number,
                            line: line.to_string(),
                            source,
                        });
                    }
                    MalformedPolicy::Skip => {
                        warn!(action = "skip", component = "aggregation", line_number, error = %source, "Skipping malformed line");
                        aggregation.skipped += 1;
                        continue;
                    }
                }
            }
        };

        aggregation.result.page_mut(record.page).record(record.client);
    }

    Ok(aggregation)
}
