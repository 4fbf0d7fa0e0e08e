//! link_dispatch library: multi-provider URL shortening
//!
//! This library shortens destination URLs through third-party public
//! shortening services (TinyURL, is.gd, v.gd, clck.ru, ulvis.net,
//! ShortURL.at), normalizes each provider's response into a short link or a
//! typed failure, measures per-call latency, and can verify that a produced
//! short link actually redirects.
//!
//! The core is the stateless [`Dispatcher`]; session state (history,
//! counters, latency ranking) is owned by the caller. The [`run_session`]
//! entry point wires both together for the CLI.
//!
//! # Example
//!
//! ```no_run
//! use link_dispatch::Dispatcher;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new().await?;
//! let result = dispatcher
//!     .shorten_try_all_fallback("https://example.com/some/very/long/path")
//!     .await?;
//! println!("{} ({} ms)", result.short_url.unwrap_or_default(), result.latency_ms);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dispatch;
mod error_handling;
pub mod export;
mod history;
pub mod initialization;
mod models;
mod providers;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Mode};
pub use dispatch::{is_valid_url, Dispatcher};
pub use error_handling::{
    DispatchError, ErrorType, InfoType, InitializationError, ProcessingStats, ProviderFailure,
};
pub use history::{History, HistoryEntry, LatencyStats, RankingRow};
pub use models::{
    ProviderResult, ProviderSelection, ShortenOutcome, ShortenRequest, VerifyResult,
};
pub use providers::{
    extract_short_url, HttpMethod, ParseRule, ProviderId, ProviderSpec, ProviderTable,
    RequestEncoding, PRIORITY_ORDER,
};
pub use run::{run_session, SessionReport};
