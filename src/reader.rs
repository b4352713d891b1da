use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::LogError;

/// Reads every line of the log at `path`.
///
/// A missing or unreadable file and a file with no lines at all are both
/// rejected here, before aggregation starts.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LogError> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_reader", file_path = ?path, "Reading log file");

    let input_error = |source: io::Error| LogError::Input {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(input_error)?;

    if lines.is_empty() {
        return Err(LogError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    info!(
        action = "complete",
        component = "log_reader",
        line_count = lines.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Read log file"
    );
    Ok(lines)
}
