//! Presentation helpers for the CLI session.
//!
//! Progress logging and end-of-session statistics printing. Everything here
//! consumes caller-owned state; nothing feeds back into the dispatcher.

mod progress;
mod statistics;

pub use progress::log_progress;
pub use statistics::{print_error_statistics, print_latency_ranking};
