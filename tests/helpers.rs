// Shared test helpers for building dispatchers against mock provider tables.

use std::sync::Arc;
use std::time::Duration;

use link_dispatch::{
    Dispatcher, HttpMethod, ParseRule, ProviderId, ProviderSpec, ProviderTable, RequestEncoding,
};

/// A plain-text GET provider spec pointed at an arbitrary endpoint.
#[allow(dead_code)] // Used by other test files
pub fn plain_get_spec(id: ProviderId, endpoint: String) -> ProviderSpec {
    ProviderSpec {
        id,
        endpoint,
        method: HttpMethod::Get,
        encoding: RequestEncoding::Query {
            param: "url",
            extra: &[],
        },
        parse_rule: ParseRule::PlainTextLink,
    }
}

/// Builds a dispatcher over the given table with short test timeouts.
#[allow(dead_code)] // Used by other test files
pub fn dispatcher_for(table: ProviderTable) -> Dispatcher {
    let client = Arc::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to create HTTP client"),
    );
    let verify_client = Arc::new(
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to create verify client"),
    );
    Dispatcher::with_parts(client, verify_client, table)
}
