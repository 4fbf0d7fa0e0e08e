//! Error types and processing statistics.

mod stats;
mod types;

pub use stats::ProcessingStats;
pub use types::{DispatchError, ErrorType, InfoType, InitializationError, ProviderFailure};
