//! Client and logger initialization.

mod client;
mod logger;

pub use client::{init_client, init_verify_client};
pub use logger::init_logger_with;
