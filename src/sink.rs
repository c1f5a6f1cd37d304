/// Destination for per-entry diagnostics.
///
/// Implementations must not fail or block the caller.
pub trait LogSink {
    fn info(&self, archive: &str, message: &str, detail: &str);
    fn error(&self, archive: &str, message: &str, detail: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn info(&self, archive: &str, message: &str, detail: &str) {
        (**self).info(archive, message, detail)
    }

    fn error(&self, archive: &str, message: &str, detail: &str) {
        (**self).error(archive, message, detail)
    }
}

/// Emits diagnostics as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, archive: &str, message: &str, detail: &str) {
        tracing::info!(archive = %archive, detail = %detail, "{message}");
    }

    fn error(&self, archive: &str, message: &str, detail: &str) {
        tracing::error!(archive = %archive, detail = %detail, "{message}");
    }
}
