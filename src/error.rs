use std::io;
use std::path::PathBuf;

/// A single log line that does not split into `<page> <client>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 2 whitespace-separated fields, found {found}")]
    TokenCount { found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("malformed record at line {line_number}: {line:?}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to read log file {path:?}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log file {path:?} is empty")]
    EmptyInput { path: PathBuf },

    #[error("failed to start aggregation worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0}")]
    Usage(String),
}
