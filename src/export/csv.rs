//! CSV export of a session history.
//!
//! One row per provider result, flattened; entries keep their session order.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::history::History;

/// Exports a session history to CSV.
///
/// Writes to `output` when given, stdout otherwise. Returns the number of
/// rows written (excluding the header).
///
/// # Errors
///
/// Returns an error if the output file cannot be created or a row cannot be
/// written.
pub fn export_history_csv(history: &History, output: Option<&Path>) -> Result<usize> {
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record([
        "destination_url",
        "provider",
        "short_url",
        "succeeded",
        "latency_ms",
        "failure",
        "verified",
        "verified_target",
        "recorded_at",
    ])?;

    let mut record_count = 0;
    for entry in history.entries() {
        for result in &entry.results {
            writer.write_record(&[
                entry.destination_url.clone(),
                result.provider.to_string(),
                result.short_url.clone().unwrap_or_default(),
                result.succeeded.to_string(),
                result.latency_ms.to_string(),
                result
                    .failure
                    .as_ref()
                    .map(|failure| failure.to_string())
                    .unwrap_or_default(),
                result
                    .verified
                    .map(|verified| verified.to_string())
                    .unwrap_or_default(),
                result.verified_target.clone().unwrap_or_default(),
                entry.recorded_at.to_rfc3339(),
            ])?;
            record_count += 1;
        }
    }

    writer.flush()?;

    Ok(record_count)
}
