use clap::ValueEnum;

use crate::rank::Rankings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders both rankings in the plain-text report layout.
pub fn render_text(rankings: &Rankings) -> String {
    let mut out = String::new();

    out.push_str("\nTotal page views:\n\n");
    for entry in &rankings.total {
        out.push_str(&format!("{} {} views\n", entry.page, entry.count));
    }
    out.push('\n');

    out.push_str("\nUnique page views:\n\n");
    for entry in &rankings.unique {
        out.push_str(&format!("{} {} unique views\n", entry.page, entry.count));
    }
    out.push('\n');

    out
}

pub fn render_json(rankings: &Rankings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rankings)
}

pub fn render(rankings: &Rankings, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(rankings)),
        OutputFormat::Json => render_json(rankings).map(|json| json + "\n"),
    }
}
