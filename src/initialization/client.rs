//! HTTP client initialization.
//!
//! Two clients are built at startup: one for shortening calls and a second,
//! shorter-fused one for verification probes.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, VERIFY_MAX_REDIRECTS, VERIFY_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for shortening calls.
///
/// Configured with the per-call timeout and User-Agent from the config.
/// Redirect following is left at reqwest's default; shortening endpoints
/// answer directly.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for verification probes.
///
/// Probes follow redirects (capped hops) so the final destination of a short
/// link can be captured, and run on a shorter timeout than shortening calls.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub async fn init_verify_client(
    config: &Config,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(VERIFY_MAX_REDIRECTS))
        .timeout(VERIFY_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
