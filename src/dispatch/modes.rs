//! Multi-provider dispatch policies: fallback chain, fan-out, and batch.

use log::debug;

use super::{is_valid_url, Dispatcher};
use crate::error_handling::DispatchError;
use crate::models::{ProviderResult, ShortenOutcome};
use crate::providers::ProviderId;

impl Dispatcher {
    /// Tries providers in the fixed priority order and returns the first
    /// success. Providers after the winner are never called.
    ///
    /// # Errors
    ///
    /// - `DispatchError::InvalidInput` if the URL fails the prefix check
    /// - `DispatchError::AllProvidersFailed` when every provider in the
    ///   chain failed; the error carries each failed result
    pub async fn shorten_try_all_fallback(
        &self,
        destination_url: &str,
    ) -> Result<ProviderResult, DispatchError> {
        if !is_valid_url(destination_url) {
            return Err(DispatchError::InvalidInput);
        }

        let mut failures = Vec::new();
        for spec in self.table.priority_chain() {
            let result = self.attempt(spec, destination_url).await;
            if result.succeeded {
                return Ok(result);
            }
            debug!(
                "{} failed for {}, falling through to the next provider",
                spec.id, destination_url
            );
            failures.push(result);
        }
        Err(DispatchError::AllProvidersFailed(failures))
    }

    /// Queries every provider in the priority table, regardless of earlier
    /// successes, and returns all results ordered by ascending latency with
    /// failures placed after all successes.
    ///
    /// Calls are issued concurrently; the attempts share no mutable state
    /// and the only ordering contract is the final sort.
    ///
    /// # Errors
    ///
    /// `DispatchError::InvalidInput` if the URL fails the prefix check.
    pub async fn shorten_try_all_fan_out(
        &self,
        destination_url: &str,
    ) -> Result<ShortenOutcome, DispatchError> {
        if !is_valid_url(destination_url) {
            return Err(DispatchError::InvalidInput);
        }

        let attempts = self
            .table
            .priority_chain()
            .map(|spec| self.attempt(spec, destination_url));
        let results = futures::future::join_all(attempts).await;
        Ok(ShortenOutcome::from_unordered(results))
    }

    /// Shortens many destination URLs against one provider.
    ///
    /// Sequential by contract: output order matches input order, and a fixed
    /// courtesy delay elapses between successive calls so the provider is
    /// not hammered. Invalid entries are reported in place without a network
    /// call; they do not abort the rest of the batch.
    pub async fn shorten_batch(
        &self,
        destination_urls: &[String],
        provider: ProviderId,
    ) -> Vec<Result<ProviderResult, DispatchError>> {
        let mut results = Vec::with_capacity(destination_urls.len());
        for (index, destination_url) in destination_urls.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.batch_delay).await;
            }
            results.push(self.shorten_with_provider(destination_url, provider).await);
        }
        results
    }
}
