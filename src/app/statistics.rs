//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::history::LatencyStats;

/// Prints error and info statistics to the log, skipping zero counters.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Event Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

/// Prints the per-provider latency ranking, fastest first.
pub fn print_latency_ranking(latency_stats: &LatencyStats) {
    let ranking = latency_stats.ranking();
    if ranking.is_empty() {
        info!("Latency ranking: no successful provider calls this session");
        return;
    }

    info!("Latency ranking (mean over successful calls):");
    for (position, row) in ranking.iter().enumerate() {
        info!(
            "   {}. {} - {} ms ({} ok, {} failed)",
            position + 1,
            row.provider,
            row.average_latency_ms,
            row.successes,
            row.failures
        );
    }
}
