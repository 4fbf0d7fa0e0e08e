//! A single provider attempt.

use std::time::Instant;

use log::debug;

use super::{is_valid_url, Dispatcher};
use crate::error_handling::{DispatchError, ProviderFailure};
use crate::models::ProviderResult;
use crate::providers::{HttpMethod, ProviderId, ProviderSpec, RequestEncoding};

impl Dispatcher {
    /// Shortens a destination URL through one named provider.
    ///
    /// Exactly one request, no retries; a timeout or error is terminal for
    /// the attempt and comes back as `Ok(ProviderResult { succeeded: false })`
    /// with a typed reason. `Err` is reserved for requests rejected before
    /// any network call.
    ///
    /// # Errors
    ///
    /// - `DispatchError::InvalidInput` if the URL fails the prefix check
    /// - `DispatchError::UnknownProvider` if the table has no entry for
    ///   `provider`
    pub async fn shorten_with_provider(
        &self,
        destination_url: &str,
        provider: ProviderId,
    ) -> Result<ProviderResult, DispatchError> {
        if !is_valid_url(destination_url) {
            return Err(DispatchError::InvalidInput);
        }
        let spec = self
            .table
            .get(provider)
            .ok_or(DispatchError::UnknownProvider(provider))?;
        Ok(self.attempt(spec, destination_url).await)
    }

    /// Executes one attempt against a provider spec.
    ///
    /// Latency is measured from just before send to just after the exchange
    /// settles, and is recorded for failed attempts too: a provider that
    /// burns the whole timeout must not look like one that fails instantly.
    pub(super) async fn attempt(
        &self,
        spec: &ProviderSpec,
        destination_url: &str,
    ) -> ProviderResult {
        debug!("Shortening {} via {}", destination_url, spec.id);
        let started = Instant::now();
        let response = build_request(&self.client, spec, destination_url)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    let latency_ms = elapsed_ms(started);
                    debug!("{} answered {} after {} ms", spec.id, status, latency_ms);
                    return ProviderResult::failed(
                        spec.id,
                        ProviderFailure::Status(status.as_u16()),
                        latency_ms,
                    );
                }
                match response.text().await {
                    Ok(body) => {
                        let latency_ms = elapsed_ms(started);
                        match crate::providers::extract_short_url(spec.parse_rule, &body) {
                            Some(short_url) => {
                                debug!("{} -> {} ({} ms)", spec.id, short_url, latency_ms);
                                ProviderResult::success(spec.id, short_url, latency_ms)
                            }
                            None => {
                                debug!("{} body did not parse as a short link", spec.id);
                                ProviderResult::failed(
                                    spec.id,
                                    ProviderFailure::BodyMismatch,
                                    latency_ms,
                                )
                            }
                        }
                    }
                    Err(e) => ProviderResult::failed(
                        spec.id,
                        ProviderFailure::Body(e.to_string()),
                        elapsed_ms(started),
                    ),
                }
            }
            Err(e) => {
                let latency_ms = elapsed_ms(started);
                let failure = if e.is_timeout() {
                    ProviderFailure::Timeout
                } else if e.is_connect() {
                    ProviderFailure::Connect(e.to_string())
                } else {
                    ProviderFailure::Send(e.to_string())
                };
                debug!("{} failed after {} ms: {}", spec.id, latency_ms, failure);
                ProviderResult::failed(spec.id, failure, latency_ms)
            }
        }
    }
}

/// Builds the provider-specific request. Query and form values are
/// percent-encoded by reqwest's serializers.
fn build_request(
    client: &reqwest::Client,
    spec: &ProviderSpec,
    destination_url: &str,
) -> reqwest::RequestBuilder {
    let builder = match spec.method {
        HttpMethod::Get => client.get(&spec.endpoint),
        HttpMethod::Post => client.post(&spec.endpoint),
    };
    match &spec.encoding {
        RequestEncoding::Query { param, extra } => {
            let mut pairs: Vec<(&str, &str)> = extra.to_vec();
            pairs.push((*param, destination_url));
            builder.query(&pairs)
        }
        RequestEncoding::Form { field } => builder.form(&[(*field, destination_url)]),
        RequestEncoding::Json { field } => {
            let mut body = serde_json::Map::new();
            body.insert(
                (*field).to_string(),
                serde_json::Value::String(destination_url.to_string()),
            );
            builder.json(&body)
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
