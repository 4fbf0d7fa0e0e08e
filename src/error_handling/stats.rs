//! Processing statistics tracking.
//!
//! Thread-safe counters for failure categories and notable events across a
//! session. Owned by the caller (the CLI session), never by the dispatcher.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Thread-safe processing statistics tracker.
///
/// All counter types are initialized to zero on creation, so incrementing
/// never allocates and reads never miss.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, AtomicUsize::new(0));
        }

        ProcessingStats { errors, info }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                info_type
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total across all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|c| c.load(Ordering::SeqCst))
            .sum()
    }

    /// Total across all info counters.
    pub fn total_info(&self) -> usize {
        self.info.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = ProcessingStats::new();
        for error in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error), 0);
        }
        assert_eq!(stats.total_errors(), 0);
        assert_eq!(stats.total_info(), 0);
    }

    #[test]
    fn test_increment_and_read_back() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ProviderTimeout);
        stats.increment_error(ErrorType::ProviderTimeout);
        stats.increment_error(ErrorType::InvalidInput);
        stats.increment_info(InfoType::ShortLinkCreated);

        assert_eq!(stats.get_error_count(ErrorType::ProviderTimeout), 2);
        assert_eq!(stats.get_error_count(ErrorType::InvalidInput), 1);
        assert_eq!(stats.get_error_count(ErrorType::ProviderConnect), 0);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.get_info_count(InfoType::ShortLinkCreated), 1);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;

        let stats = Arc::new(ProcessingStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.increment_error(ErrorType::ProviderStatus);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_error_count(ErrorType::ProviderStatus), 800);
    }
}
