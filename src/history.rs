//! Caller-owned session state: history and latency ranking.
//!
//! The dispatcher is stateless; everything a session wants to remember about
//! past outcomes lives here and is passed around explicitly by the caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;

use crate::models::ProviderResult;
use crate::providers::ProviderId;

/// One history entry: a destination URL and the results it produced.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// The URL that was shortened.
    pub destination_url: String,
    /// Per-provider results, one for single/fallback flows, several for
    /// fan-out.
    pub results: Vec<ProviderResult>,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Append-only session history of shortening outcomes.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry for a destination URL.
    pub fn record(&mut self, destination_url: &str, results: Vec<ProviderResult>) {
        self.entries.push(HistoryEntry {
            destination_url: destination_url.to_string(),
            results,
            recorded_at: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of successful results across all entries.
    pub fn success_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| entry.results.iter())
            .filter(|result| result.succeeded)
            .count()
    }
}

/// Per-provider latency aggregation for ranking.
///
/// Successful attempts contribute their latency; failures are counted
/// separately so a flaky-but-fast provider does not outrank a reliable one
/// invisibly.
#[derive(Debug)]
pub struct LatencyStats {
    success_count: HashMap<ProviderId, AtomicU64>,
    success_sum_ms: HashMap<ProviderId, AtomicU64>,
    failure_count: HashMap<ProviderId, AtomicU64>,
}

/// One row of the latency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    /// The ranked provider.
    pub provider: ProviderId,
    /// Mean latency across successful attempts, in milliseconds.
    pub average_latency_ms: u64,
    /// Number of successful attempts behind the average.
    pub successes: u64,
    /// Number of failed attempts.
    pub failures: u64,
}

impl LatencyStats {
    /// Creates a tracker with every provider's counters at zero.
    pub fn new() -> Self {
        let mut success_count = HashMap::new();
        let mut success_sum_ms = HashMap::new();
        let mut failure_count = HashMap::new();
        for id in ProviderId::iter() {
            success_count.insert(id, AtomicU64::new(0));
            success_sum_ms.insert(id, AtomicU64::new(0));
            failure_count.insert(id, AtomicU64::new(0));
        }
        Self {
            success_count,
            success_sum_ms,
            failure_count,
        }
    }

    /// Folds one result into the aggregates.
    pub fn record(&self, result: &ProviderResult) {
        if result.succeeded {
            if let (Some(count), Some(sum)) = (
                self.success_count.get(&result.provider),
                self.success_sum_ms.get(&result.provider),
            ) {
                count.fetch_add(1, Ordering::Relaxed);
                sum.fetch_add(result.latency_ms, Ordering::Relaxed);
            }
        } else if let Some(count) = self.failure_count.get(&result.provider) {
            count.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Mean success latency for one provider, or `None` without samples.
    pub fn average_ms(&self, provider: ProviderId) -> Option<u64> {
        let count = self.success_count.get(&provider)?.load(Ordering::SeqCst);
        if count == 0 {
            return None;
        }
        let sum = self.success_sum_ms.get(&provider)?.load(Ordering::SeqCst);
        Some(sum / count)
    }

    /// Number of failed attempts recorded for one provider.
    pub fn failures(&self, provider: ProviderId) -> u64 {
        self.failure_count
            .get(&provider)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Providers with at least one successful sample, fastest first.
    pub fn ranking(&self) -> Vec<RankingRow> {
        let mut rows: Vec<RankingRow> = ProviderId::iter()
            .filter_map(|provider| {
                self.average_ms(provider).map(|average_latency_ms| RankingRow {
                    provider,
                    average_latency_ms,
                    successes: self
                        .success_count
                        .get(&provider)
                        .map(|c| c.load(Ordering::SeqCst))
                        .unwrap_or(0),
                    failures: self.failures(provider),
                })
            })
            .collect();
        rows.sort_by_key(|row| row.average_latency_ms);
        rows
    }
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self::new()
    }
}
