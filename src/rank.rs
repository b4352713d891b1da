use clap::ValueEnum;
use serde::Serialize;

use crate::stats::{AggregateResult, PageStats};

/// A page and one of its counts, detached from the aggregate it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub page: String,
    pub count: u64,
}

/// How pages with equal counts are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// Sort ascending, then reverse the whole list. Ties come out in
    /// reverse first-sighting order.
    #[default]
    Reversed,
    /// Sort descending. Ties keep first-sighting order.
    Stable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rankings {
    #[serde(rename = "total_views")]
    pub total: Vec<RankedEntry>,
    #[serde(rename = "unique_views")]
    pub unique: Vec<RankedEntry>,
}

impl Rankings {
    /// Keeps only the first `n` entries of each ranking.
    pub fn truncate(&mut self, n: usize) {
        self.total.truncate(n);
        self.unique.truncate(n);
    }
}

/// Orders every page by total views and, separately, by unique views.
pub fn rank(aggregate: &AggregateResult, tie_break: TieBreak) -> Rankings {
    Rankings {
        total: rank_by(aggregate, tie_break, PageStats::total_count),
        unique: rank_by(aggregate, tie_break, PageStats::unique_count),
    }
}

fn rank_by(
    aggregate: &AggregateResult,
    tie_break: TieBreak,
    key: impl Fn(&PageStats) -> u64,
) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = aggregate
        .iter()
        .map(|(page, stats)| RankedEntry {
            page: page.to_string(),
            count: key(stats),
        })
        .collect();

    // `sort_by_key` is stable, which both policies rely on.
    match tie_break {
        TieBreak::Reversed => {
            entries.sort_by_key(|entry| entry.count);
            entries.reverse();
        }
        TieBreak::Stable => entries.sort_by_key(|entry| std::cmp::Reverse(entry.count)),
    }

    entries
}
