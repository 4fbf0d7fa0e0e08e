//! Progress logging utilities.

use log::info;

/// Logs progress through the session's URL list.
pub fn log_progress(
    start_time: std::time::Instant,
    completed: usize,
    failed: usize,
    total: usize,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let processed = completed + failed;
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} URLs ({} succeeded, {} failed) in {:.2}s (~{:.2} URLs/sec)",
        processed, total, completed, failed, elapsed_secs, rate
    );
}
