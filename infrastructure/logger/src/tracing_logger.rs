use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target under which every use-case message is emitted. Filter with
/// `RUST_LOG=medchain=debug`.
pub const LOG_TARGET: &str = "medchain";

/// Forwards domain log messages to the `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
