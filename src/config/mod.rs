//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, delays, limits)
//! - CLI option types and the library `Config`

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Mode};
