//! The session runner: the CLI's presentation loop around the dispatcher.
//!
//! Reads destination URLs, drives the dispatcher in the configured mode, and
//! owns all session state (history, counters, latency ranking). The
//! dispatcher itself stays stateless.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::AsyncReadExt;

use crate::app::{log_progress, print_error_statistics, print_latency_ranking};
use crate::config::{Config, Mode, LOGGING_INTERVAL};
use crate::dispatch::Dispatcher;
use crate::error_handling::{DispatchError, ErrorType, InfoType, ProcessingStats};
use crate::export::export_history_csv;
use crate::history::{History, LatencyStats};
use crate::initialization::{init_client, init_verify_client};
use crate::models::ProviderResult;
use crate::providers::ProviderTable;

/// Results of a completed session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Number of destination URLs processed
    pub total_urls: usize,
    /// URLs for which at least one provider produced a short link
    pub successful: usize,
    /// URLs for which no short link was produced
    pub failed: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
    /// Rows written to the CSV export, when one was requested
    pub csv_records: Option<usize>,
}

/// Caller-owned session state, threaded through the processing loop.
struct SessionState {
    stats: ProcessingStats,
    latency_stats: LatencyStats,
    history: History,
    completed: usize,
    failed: usize,
}

/// Runs a shortening session with the provided configuration.
///
/// This is the main entry point for the library. It reads URLs from the
/// input file (or stdin), shortens each according to the configured mode,
/// and returns a [`SessionReport`] with summary statistics.
///
/// # Errors
///
/// This function will return an error if:
/// - The input file cannot be opened
/// - The HTTP clients cannot be initialized
/// - `--mode single` is selected without a `--provider`
/// - A requested CSV export cannot be written
///
/// Individual provider failures never error the session; they are recorded
/// in the report and the session history.
pub async fn run_session(config: Config) -> Result<SessionReport> {
    let urls = read_urls(&config.file).await?;
    info!("Loaded {} destination URLs", urls.len());

    let client = init_client(&config)
        .await
        .context("Failed to initialize HTTP client")?;
    let verify_client = init_verify_client(&config)
        .await
        .context("Failed to initialize verification client")?;
    let dispatcher = Dispatcher::with_parts(client, verify_client, ProviderTable::bundled())
        .with_batch_delay(Duration::from_millis(config.batch_delay_ms));

    let mut state = SessionState {
        stats: ProcessingStats::new(),
        latency_stats: LatencyStats::new(),
        history: History::new(),
        completed: 0,
        failed: 0,
    };

    let start_time = Instant::now();

    match config.mode {
        Mode::Single => {
            let provider = config
                .provider
                .context("--provider is required when --mode is single")?;
            info!("Shortening {} URLs via {} (batch)", urls.len(), provider);
            let results = dispatcher.shorten_batch(&urls, provider).await;
            for (destination_url, dispatched) in urls.iter().zip(results) {
                let dispatched = dispatched.map(|result| vec![result]);
                process_dispatch(&dispatcher, &config, &mut state, destination_url, dispatched)
                    .await;
                maybe_log_progress(start_time, &state, urls.len());
            }
        }
        Mode::Fallback => {
            for destination_url in &urls {
                let dispatched = dispatcher
                    .shorten_try_all_fallback(destination_url)
                    .await
                    .map(|result| vec![result]);
                process_dispatch(&dispatcher, &config, &mut state, destination_url, dispatched)
                    .await;
                maybe_log_progress(start_time, &state, urls.len());
            }
        }
        Mode::FanOut => {
            for destination_url in &urls {
                let dispatched = dispatcher
                    .shorten_try_all_fan_out(destination_url)
                    .await
                    .map(|outcome| outcome.results);
                process_dispatch(&dispatcher, &config, &mut state, destination_url, dispatched)
                    .await;
                maybe_log_progress(start_time, &state, urls.len());
            }
        }
    }

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    log_progress(start_time, state.completed, state.failed, urls.len());
    print_error_statistics(&state.stats);
    if config.ranking {
        print_latency_ranking(&state.latency_stats);
    }

    let csv_records = match &config.csv {
        Some(path) => {
            let written = export_history_csv(&state.history, Some(path.as_path()))
                .context("Failed to export session history")?;
            info!("Exported {} rows to {}", written, path.display());
            Some(written)
        }
        None => None,
    };

    Ok(SessionReport {
        total_urls: urls.len(),
        successful: state.completed,
        failed: state.failed,
        elapsed_seconds,
        csv_records,
    })
}

/// Folds one dispatch outcome into the session state: verification, logging,
/// counters, and the history entry.
async fn process_dispatch(
    dispatcher: &Dispatcher,
    config: &Config,
    state: &mut SessionState,
    destination_url: &str,
    dispatched: Result<Vec<ProviderResult>, DispatchError>,
) {
    match dispatched {
        Ok(mut results) => {
            let any_success = results.iter().any(|result| result.succeeded);

            if config.verify {
                for result in results.iter_mut() {
                    if !result.succeeded {
                        continue;
                    }
                    let Some(short_url) = result.short_url.clone() else {
                        continue;
                    };
                    let verification = dispatcher.verify(&short_url).await;
                    state.stats.increment_info(if verification.working {
                        InfoType::VerifyWorking
                    } else {
                        InfoType::VerifyBroken
                    });
                    *result = result.clone().with_verification(&verification);
                }
            }

            for result in &results {
                state.latency_stats.record(result);
                if result.succeeded {
                    state.stats.increment_info(InfoType::ShortLinkCreated);
                    info!(
                        "{} -> {} via {} ({} ms)",
                        destination_url,
                        result.short_url.as_deref().unwrap_or_default(),
                        result.provider,
                        result.latency_ms
                    );
                } else if let Some(failure) = &result.failure {
                    state.stats.increment_error(ErrorType::from(failure));
                    warn!(
                        "{} failed via {}: {}",
                        destination_url, result.provider, failure
                    );
                }
            }

            if any_success {
                state.completed += 1;
            } else {
                state.failed += 1;
            }
            state.history.record(destination_url, results);
        }
        Err(DispatchError::InvalidInput) => {
            state.stats.increment_error(ErrorType::InvalidInput);
            warn!("Skipping invalid destination URL: {destination_url}");
            state.failed += 1;
        }
        Err(DispatchError::AllProvidersFailed(failures)) => {
            state.stats.increment_error(ErrorType::AllProvidersFailed);
            for result in &failures {
                state.latency_stats.record(result);
                if let Some(failure) = &result.failure {
                    state.stats.increment_error(ErrorType::from(failure));
                }
            }
            warn!(
                "All {} providers failed for {destination_url}",
                failures.len()
            );
            state.failed += 1;
            state.history.record(destination_url, failures);
        }
        Err(e @ DispatchError::UnknownProvider(_)) => {
            // Unreachable with the bundled table; recorded as a failed URL
            // rather than aborting the session.
            warn!("{e}");
            state.failed += 1;
        }
    }
}

fn maybe_log_progress(start_time: Instant, state: &SessionState, total: usize) {
    let processed = state.completed + state.failed;
    if processed > 0 && processed % LOGGING_INTERVAL == 0 && processed < total {
        log_progress(start_time, state.completed, state.failed, total);
    }
}

/// Reads destination URLs from a file, or stdin when the path is `-`.
/// Blank lines and `#` comments are skipped; input order is preserved.
async fn read_urls(path: &Path) -> Result<Vec<String>> {
    let raw = if path.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read URLs from stdin")?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .context("Failed to open input file")?
    };

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
