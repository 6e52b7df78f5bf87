//! The injected diagnostic reporting capability.

use parking_lot::Mutex;

use crate::{Diagnostic, DiagnosticConfig, DiagnosticQueue, FatalError};

/// Sink for codegen diagnostics.
///
/// Passed into the resolvers rather than reached through a global. It is
/// shared by every worker compiling functions of one program, so it must be
/// internally synchronized; ordering between threads is the reporter's own
/// business.
pub trait DiagnosticReporter: Send + Sync {
    /// Record a diagnostic.
    fn emit(&self, diagnostic: Diagnostic);

    /// Report a fatal diagnostic and get the token that aborts the caller.
    ///
    /// Implementations must not filter fatal diagnostics away: the token
    /// claims the diagnostic was recorded.
    fn fatal(&self, diagnostic: Diagnostic) -> FatalError {
        debug_assert!(diagnostic.is_error(), "fatal() needs an error diagnostic");
        self.emit(diagnostic);
        FatalError::reported()
    }

    /// Report a warning; compilation continues.
    fn warning(&self, diagnostic: Diagnostic) {
        debug_assert!(!diagnostic.is_error(), "warning() needs a warning diagnostic");
        self.emit(diagnostic);
    }
}

/// Thread-safe reporter collecting into a [`DiagnosticQueue`].
#[derive(Debug, Default)]
pub struct SharedReporter {
    queue: Mutex<DiagnosticQueue>,
}

impl SharedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        SharedReporter {
            queue: Mutex::new(DiagnosticQueue::with_config(config)),
        }
    }

    pub fn error_count(&self) -> usize {
        self.queue.lock().error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.queue.lock().warning_count()
    }

    /// Take all collected diagnostics in source order.
    pub fn flush(&self) -> Vec<Diagnostic> {
        self.queue.lock().flush()
    }
}

impl DiagnosticReporter for SharedReporter {
    fn emit(&self, diagnostic: Diagnostic) {
        self.queue.lock().add(diagnostic);
    }

    fn fatal(&self, diagnostic: Diagnostic) -> FatalError {
        self.queue.lock().add_fatal(diagnostic);
        FatalError::reported()
    }
}
