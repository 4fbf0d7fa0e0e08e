//! Exporting session history.

mod csv;

pub use csv::export_history_csv;
