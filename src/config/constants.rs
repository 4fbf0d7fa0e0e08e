//! Configuration constants.

use std::time::Duration;

/// Client-side timeout for shortening calls, in seconds.
pub const SHORTEN_TIMEOUT_SECS: u64 = 10;

/// Client-side timeout for verification probes. Deliberately shorter than
/// the shortening timeout: a probe is informational and not worth waiting
/// the full request budget for.
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum redirect hops a verification probe will follow.
pub const VERIFY_MAX_REDIRECTS: usize = 10;

/// Courtesy delay between successive batch calls against one provider.
/// Batch mode is sequential by contract; this delay keeps the tool from
/// tripping provider-side throttling and must not be parallelized away.
pub const BATCH_INTER_CALL_DELAY: Duration = Duration::from_millis(500);

/// Progress is logged every this many processed URLs.
pub const LOGGING_INTERVAL: usize = 5;

/// User-Agent sent with every request. Providers rate-limit anonymous
/// clients more aggressively, so identify ourselves honestly.
pub const DEFAULT_USER_AGENT: &str = concat!("link_dispatch/", env!("CARGO_PKG_VERSION"));
