//! Provider wire contracts.
//!
//! Each supported shortening service is described by a [`ProviderSpec`] entry
//! in a read-only [`ProviderTable`]: endpoint, HTTP method, how the
//! destination URL is carried on the wire, and how a short link is extracted
//! from the response. The dispatcher is entirely data-driven over this table,
//! so adding a provider means adding a table row, not a new code path.

mod parse;
mod spec;

pub use parse::{extract_short_url, ParseRule};
pub use spec::{
    HttpMethod, ProviderId, ProviderSpec, ProviderTable, RequestEncoding, PRIORITY_ORDER,
};
