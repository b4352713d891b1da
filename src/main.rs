use anyhow::Result;
use clap::Parser;
use tracing::error;

use pageviews::utils::{setup_logging, validate_args};
use pageviews::{analyze_log, print_analysis_results, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match analyze_log(&args).and_then(|result| print_analysis_results(&result, &args)) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(action = "fail", component = "main", error = %e, "Analysis failed");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
