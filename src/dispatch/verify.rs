//! Short-link verification probes.

use log::debug;

use super::Dispatcher;
use crate::models::VerifyResult;

impl Dispatcher {
    /// Probes a short link with a HEAD request, following redirects.
    ///
    /// Returns whether the link answered with a success status and, when it
    /// did, the fully resolved URL after all redirects. Any network error or
    /// non-success status yields `working: false` with no destination.
    ///
    /// Purely informational: the result never invalidates or retries a
    /// shortening attempt.
    pub async fn verify(&self, short_url: &str) -> VerifyResult {
        match self.verify_client.head(short_url).send().await {
            Ok(response) if response.status().is_success() => VerifyResult {
                working: true,
                final_destination: Some(response.url().to_string()),
            },
            Ok(response) => {
                debug!("verify {} answered {}", short_url, response.status());
                VerifyResult {
                    working: false,
                    final_destination: None,
                }
            }
            Err(e) => {
                debug!("verify {} failed: {}", short_url, e);
                VerifyResult {
                    working: false,
                    final_destination: None,
                }
            }
        }
    }
}
