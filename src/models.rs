//! Core data model for shortening outcomes.

use serde::Serialize;

use crate::error_handling::ProviderFailure;
use crate::providers::ProviderId;

/// How providers are selected for a shorten request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSelection {
    /// One named provider.
    Single(ProviderId),
    /// Every provider in the documented priority order.
    AllInOrder,
}

/// A shorten request as collected from the caller.
#[derive(Debug, Clone)]
pub struct ShortenRequest {
    /// The URL to shorten. Must pass [`is_valid_url`](crate::is_valid_url).
    pub destination_url: String,
    /// Which providers to try.
    pub selection: ProviderSelection,
}

/// The result of one provider attempt.
///
/// Created once per attempt and never mutated afterwards; verification data
/// is attached by consuming the value before it is handed to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderResult {
    /// The provider that was called.
    pub provider: ProviderId,
    /// The short link, when the attempt succeeded.
    pub short_url: Option<String>,
    /// Wall-clock time for the exchange, measured from just before send to
    /// just after the response (or failure) was obtained. Recorded for
    /// failed attempts too, so a slow provider is distinguishable from one
    /// that fails instantly.
    pub latency_ms: u64,
    /// Whether the attempt produced a short link.
    pub succeeded: bool,
    /// Why the attempt failed, when it did.
    pub failure: Option<ProviderFailure>,
    /// Whether a verification probe found the short link working. `None`
    /// when verification was not requested.
    pub verified: Option<bool>,
    /// Final URL the short link resolved to, when verification ran and the
    /// link worked.
    pub verified_target: Option<String>,
}

impl ProviderResult {
    /// A successful attempt.
    pub fn success(provider: ProviderId, short_url: String, latency_ms: u64) -> Self {
        Self {
            provider,
            short_url: Some(short_url),
            latency_ms,
            succeeded: true,
            failure: None,
            verified: None,
            verified_target: None,
        }
    }

    /// A failed attempt with its typed reason.
    pub fn failed(provider: ProviderId, failure: ProviderFailure, latency_ms: u64) -> Self {
        Self {
            provider,
            short_url: None,
            latency_ms,
            succeeded: false,
            failure: Some(failure),
            verified: None,
            verified_target: None,
        }
    }

    /// Attaches the outcome of a verification probe.
    ///
    /// Verification is informational only; it never changes `succeeded`.
    pub fn with_verification(mut self, verification: &VerifyResult) -> Self {
        self.verified = Some(verification.working);
        self.verified_target = verification.final_destination.clone();
        self
    }
}

/// The ordered outcome of a fan-out request: successes ascending by latency,
/// failures after all successes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortenOutcome {
    /// Per-provider results in presentation order.
    pub results: Vec<ProviderResult>,
}

impl ShortenOutcome {
    /// Orders raw results: successes ascending by `latency_ms`, failures
    /// last. The sort is stable, so failures keep their priority order.
    pub(crate) fn from_unordered(mut results: Vec<ProviderResult>) -> Self {
        results.sort_by(|a, b| match (a.succeeded, b.succeeded) {
            (true, true) => a.latency_ms.cmp(&b.latency_ms),
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (false, false) => std::cmp::Ordering::Equal,
        });
        Self { results }
    }

    /// The fastest successful result, if any provider succeeded.
    pub fn best(&self) -> Option<&ProviderResult> {
        self.results.first().filter(|result| result.succeeded)
    }

    /// Number of successful results.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|result| result.succeeded).count()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the outcome contains no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Result of a short-link verification probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResult {
    /// Whether the short link answered with a success status.
    pub working: bool,
    /// The fully resolved URL after following redirects, when working.
    pub final_destination: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(provider: ProviderId, latency_ms: u64) -> ProviderResult {
        ProviderResult::success(provider, format!("https://sho.rt/{latency_ms}"), latency_ms)
    }

    fn fail(provider: ProviderId, latency_ms: u64) -> ProviderResult {
        ProviderResult::failed(provider, ProviderFailure::Status(500), latency_ms)
    }

    #[test]
    fn test_outcome_sorts_successes_by_latency_failures_last() {
        // 300ms success, 100ms success, and a failure, in call order.
        let outcome = ShortenOutcome::from_unordered(vec![
            ok(ProviderId::ShortUrlAt, 300),
            ok(ProviderId::IsGd, 100),
            fail(ProviderId::VGd, 20),
        ]);

        let order: Vec<(ProviderId, bool)> = outcome
            .results
            .iter()
            .map(|r| (r.provider, r.succeeded))
            .collect();
        assert_eq!(
            order,
            vec![
                (ProviderId::IsGd, true),
                (ProviderId::ShortUrlAt, true),
                (ProviderId::VGd, false),
            ]
        );
    }

    #[test]
    fn test_failure_latency_does_not_affect_placement() {
        // A fast failure still sorts after a slow success.
        let outcome = ShortenOutcome::from_unordered(vec![
            fail(ProviderId::ClckRu, 1),
            ok(ProviderId::UlvisNet, 900),
        ]);
        assert!(outcome.results[0].succeeded);
        assert_eq!(outcome.results[1].provider, ProviderId::ClckRu);
    }

    #[test]
    fn test_failures_keep_priority_order() {
        let outcome = ShortenOutcome::from_unordered(vec![
            fail(ProviderId::ShortUrlAt, 50),
            fail(ProviderId::IsGd, 10),
            fail(ProviderId::VGd, 30),
        ]);
        let order: Vec<ProviderId> = outcome.results.iter().map(|r| r.provider).collect();
        assert_eq!(
            order,
            vec![ProviderId::ShortUrlAt, ProviderId::IsGd, ProviderId::VGd]
        );
    }

    #[test]
    fn test_best_is_fastest_success() {
        let outcome = ShortenOutcome::from_unordered(vec![
            ok(ProviderId::ShortUrlAt, 300),
            ok(ProviderId::IsGd, 100),
        ]);
        assert_eq!(outcome.best().unwrap().provider, ProviderId::IsGd);
        assert_eq!(outcome.success_count(), 2);
    }

    #[test]
    fn test_best_is_none_when_everything_failed() {
        let outcome = ShortenOutcome::from_unordered(vec![fail(ProviderId::IsGd, 10)]);
        assert!(outcome.best().is_none());
        assert_eq!(outcome.success_count(), 0);
        assert_eq!(outcome.len(), 1);
    }

    #[test]
    fn test_verification_attaches_without_changing_success() {
        let result = ok(ProviderId::IsGd, 42).with_verification(&VerifyResult {
            working: false,
            final_destination: None,
        });
        assert!(result.succeeded);
        assert_eq!(result.verified, Some(false));
        assert_eq!(result.verified_target, None);
    }
}
