//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{BATCH_INTER_CALL_DELAY, DEFAULT_USER_AGENT, SHORTEN_TIMEOUT_SECS};
use crate::providers::ProviderId;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the session drives the dispatcher for each destination URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Try providers in priority order, stop at the first success.
    Fallback,
    /// Query every provider and rank the results by latency.
    FanOut,
    /// Shorten every input URL against one named provider, sequentially,
    /// with a courtesy delay between calls.
    Single,
}

/// Session configuration.
///
/// Doubles as the CLI surface (clap derive) and the library configuration;
/// library callers construct it with `Config { .. Default::default() }`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "link_dispatch",
    about = "Shorten URLs through public shortening providers"
)]
pub struct Config {
    /// File with one destination URL per line (`#` comments and blank lines
    /// skipped), or `-` to read from stdin
    pub file: PathBuf,

    /// Dispatch mode
    #[arg(long, value_enum, default_value_t = Mode::Fallback)]
    pub mode: Mode,

    /// Provider to use (required when --mode is single)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderId>,

    /// Probe each short link with a HEAD request after shortening
    #[arg(long)]
    pub verify: bool,

    /// Per-call timeout for shortening requests, in seconds
    #[arg(long, default_value_t = SHORTEN_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Delay between successive batch calls, in milliseconds
    #[arg(long, default_value_t = BATCH_INTER_CALL_DELAY.as_millis() as u64)]
    pub batch_delay_ms: u64,

    /// Export the session history to this CSV file when done
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the per-provider latency ranking at the end of the session
    #[arg(long)]
    pub ranking: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            mode: Mode::Fallback,
            provider: None,
            verify: false,
            timeout_seconds: SHORTEN_TIMEOUT_SECS,
            batch_delay_ms: BATCH_INTER_CALL_DELAY.as_millis() as u64,
            csv: None,
            ranking: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
