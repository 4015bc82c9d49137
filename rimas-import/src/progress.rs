//! Conversion progress reporting.

/// Trait for receiving conversion progress updates.
pub trait ConvertProgress {
    /// Called after each input row is processed.
    fn on_row(&self, current: usize, total: usize);

    /// Called when the conversion pass is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ConvertProgress for SilentProgress {
    fn on_row(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ConvertProgress for LogProgress {
    fn on_row(&self, current: usize, total: usize) {
        if current.is_multiple_of(100) || current == total {
            log::info!("  [{}/{}] rows processed", current, total);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
