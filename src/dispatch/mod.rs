//! The shortening dispatcher.
//!
//! Given a destination URL and a selection policy, the dispatcher issues one
//! or more outbound requests to the configured providers, normalizes each
//! response into a [`ProviderResult`](crate::ProviderResult), and optionally
//! verifies that a produced short link actually redirects.
//!
//! The dispatcher is stateless: it holds two pre-built HTTP clients and the
//! read-only provider table, and retains nothing between calls. History and
//! statistics belong to the caller.

mod attempt;
mod modes;
mod url;
mod verify;


pub use url::is_valid_url;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, BATCH_INTER_CALL_DELAY};
use crate::error_handling::{DispatchError, InitializationError};
use crate::initialization::{init_client, init_verify_client};
use crate::models::{ProviderSelection, ShortenOutcome, ShortenRequest};
use crate::providers::ProviderTable;

/// Stateless multi-provider shortening dispatcher.
pub struct Dispatcher {
    client: Arc<reqwest::Client>,
    verify_client: Arc<reqwest::Client>,
    table: ProviderTable,
    batch_delay: Duration,
}

impl Dispatcher {
    /// Builds a dispatcher with the bundled provider table and default
    /// timeouts.
    pub async fn new() -> Result<Self, InitializationError> {
        let config = Config::default();
        Ok(Self::with_parts(
            init_client(&config).await?,
            init_verify_client(&config).await?,
            ProviderTable::bundled(),
        ))
    }

    /// Builds a dispatcher from pre-built clients and an explicit provider
    /// table. Used by the session runner and by tests pointing the table at
    /// mock endpoints.
    pub fn with_parts(
        client: Arc<reqwest::Client>,
        verify_client: Arc<reqwest::Client>,
        table: ProviderTable,
    ) -> Self {
        Self {
            client,
            verify_client,
            table,
            batch_delay: BATCH_INTER_CALL_DELAY,
        }
    }

    /// Overrides the batch inter-call delay.
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// The provider table this dispatcher operates over.
    pub fn table(&self) -> &ProviderTable {
        &self.table
    }

    /// Dispatches a [`ShortenRequest`] according to its selection policy.
    ///
    /// `Single` yields an outcome with one result; `AllInOrder` is the
    /// fan-out policy. Callers wanting the first-success-wins policy use
    /// [`shorten_try_all_fallback`](Dispatcher::shorten_try_all_fallback)
    /// directly.
    pub async fn shorten(
        &self,
        request: &ShortenRequest,
    ) -> Result<ShortenOutcome, DispatchError> {
        match request.selection {
            ProviderSelection::Single(provider) => {
                let result = self
                    .shorten_with_provider(&request.destination_url, provider)
                    .await?;
                Ok(ShortenOutcome { results: vec![result] })
            }
            ProviderSelection::AllInOrder => {
                self.shorten_try_all_fan_out(&request.destination_url).await
            }
        }
    }
}
