// src/tools/scan.rs
//! Bounded, early-stopping scan over an ordered list of candidate ids.
//!
//! The scanner fetches details one id at a time and keeps the ones the
//! predicate accepts. It stops as soon as `limit` items are kept, and never
//! inspects more than `scan_budget` candidates. It returns the first `limit`
//! matches found in the scanned prefix, not the globally best ones: a
//! higher-scoring match further down the list is never fetched.

use std::future::Future;

/// Items kept by a scan, in encounter order, plus how many candidates were
/// actually inspected (fetched), matched or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome<T> {
    pub items: Vec<T>,
    pub total_checked: usize,
}

impl<T> ScanOutcome<T> {
    /// Stable sort, highest key first; ties keep encounter order.
    pub fn sort_desc_by_key<K: Ord>(mut self, key: impl Fn(&T) -> K) -> Self {
        self.items.sort_by(|a, b| key(b).cmp(&key(a)));
        self
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ScanOutcome<U> {
        ScanOutcome {
            items: self.items.into_iter().map(f).collect(),
            total_checked: self.total_checked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevantItemFetcher {
    limit: usize,
    scan_budget: usize,
}

impl RelevantItemFetcher {
    pub fn new(limit: usize, scan_budget: usize) -> Self {
        Self { limit, scan_budget }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn scan_budget(&self) -> usize {
        self.scan_budget
    }

    /// Walk `candidate_ids` in order.
    ///
    /// `detail` returning `None` (fetch failed, wrong kind, deleted item) skips
    /// that candidate; it still counts as checked. The stop check runs before
    /// each fetch, so once `limit` matches are in hand no further request is made.
    pub async fn fetch<I, T, F, Fut, P>(
        &self,
        candidate_ids: &[I],
        mut detail: F,
        mut predicate: P,
    ) -> ScanOutcome<T>
    where
        I: Clone,
        F: FnMut(I) -> Fut,
        Fut: Future<Output = Option<T>>,
        P: FnMut(&T) -> bool,
    {
        let max_to_check = self.scan_budget.min(candidate_ids.len());
        let mut items = Vec::new();
        let mut total_checked = 0usize;

        for id in candidate_ids.iter().take(max_to_check) {
            if items.len() >= self.limit {
                break;
            }
            total_checked += 1;

            let Some(item) = detail(id.clone()).await else {
                continue;
            };
            if predicate(&item) {
                items.push(item);
            }
        }

        ScanOutcome {
            items,
            total_checked,
        }
    }
}
