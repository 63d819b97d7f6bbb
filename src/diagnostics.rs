/// Sink for human-readable warnings about recoverable caller mistakes.
///
/// The library never installs a tracing subscriber, so this is the hook to use
/// when a caller wants to observe or capture those warnings directly.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `tracing` `WARN` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::Diagnostics;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingDiagnostics {
        pub(crate) warnings: Mutex<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }
}
