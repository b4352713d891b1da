use indexmap::IndexMap;
use std::collections::HashSet;

use crate::rank::Rankings;

/// Per-page view counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStats {
    total_count: u64,
    unique_count: u64,
    seen: HashSet<String>,
}

impl PageStats {
    /// Every view of the page, repeats included.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Distinct clients that viewed the page.
    pub fn unique_count(&self) -> u64 {
        self.unique_count
    }

    /// Counts one view from `client`. The first view from a given client
    /// also bumps the unique count.
    pub fn record(&mut self, client: &str) {
        if !self.seen.contains(client) {
            self.seen.insert(client.to_string());
            self.unique_count += 1;
        }
        self.total_count += 1;
    }

    /// Folds another partial count for the same page into this one.
    ///
    /// Unique views come from the union of both client sets, so a client
    /// seen on both sides is counted once.
    pub fn merge(&mut self, other: PageStats) {
        self.total_count += other.total_count;
        self.seen.extend(other.seen);
        self.unique_count = self.seen.len() as u64;
    }

    #[cfg(test)]
    fn has_seen(&self, client: &str) -> bool {
        self.seen.contains(client)
    }

    pub(crate) fn clients(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}

/// Page statistics keyed by page, iterated in first-sighting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pages: IndexMap<String, PageStats>,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, page: &str) -> Option<&PageStats> {
        self.pages.get(page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageStats)> {
        self.pages.iter().map(|(page, stats)| (page.as_str(), stats))
    }

    /// Returns the entry for `page`, inserting zeroed counters on first sight.
    pub fn page_mut(&mut self, page: &str) -> &mut PageStats {
        let index = match self.pages.get_index_of(page) {
            Some(index) => index,
            None => {
                self.pages
                    .insert_full(page.to_string(), PageStats::default())
                    .0
            }
        };
        &mut self.pages[index]
    }

    /// Merges a later partial aggregate into this one. Pages new to `self`
    /// are appended, keeping first-sighting order across both inputs.
    pub fn merge(&mut self, other: AggregateResult) {
        for (page, stats) in other.pages {
            match self.pages.get_mut(&page) {
                Some(existing) => existing.merge(stats),
                None => {
                    self.pages.insert(page, stats);
                }
            }
        }
    }

    /// Sum of every page's total count.
    pub fn total_views(&self) -> u64 {
        self.pages.values().map(PageStats::total_count).sum()
    }

    /// Number of distinct client identifiers across all pages.
    pub fn distinct_clients(&self) -> usize {
        self.pages
            .values()
            .flat_map(PageStats::clients)
            .collect::<HashSet<_>>()
            .len()
    }
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub rankings: Rankings,
    pub pages: usize,
    pub total_views: u64,
    /// Only counted when info-level logging is enabled.
    pub distinct_clients: Option<usize>,
    pub skipped: usize,
}
