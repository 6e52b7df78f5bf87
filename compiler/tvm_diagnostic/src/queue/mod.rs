//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Several codegen workers may report the same fatal condition for one
//! declaration (for instance two functions storing the same unsupported
//! struct). The queue keeps the first report per location and message
//! prefix, caps the error count, and hands diagnostics back in source order.

use std::hash::{Hash, Hasher};

use crate::Diagnostic;

/// Number of characters to use for message prefix deduplication.
const MESSAGE_PREFIX_LEN: usize = 30;

#[inline]
fn message_prefix_hash(msg: &str) -> u64 {
    let byte_end = msg
        .char_indices()
        .nth(MESSAGE_PREFIX_LEN)
        .map_or(msg.len(), |(idx, _)| idx);
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    msg[..byte_end].hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop errors repeating an earlier one at the same location.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    /// (span start, message prefix hash) of every kept error.
    seen_errors: Vec<(u32, u64)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if it was filtered.
    /// Warnings are always kept; errors past the limit are dropped.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if !diag.is_error() {
            self.warning_count += 1;
            self.diagnostics.push(diag);
            return true;
        }

        if self.limit_reached() {
            return false;
        }
        self.push_error(diag)
    }

    /// Add an error that aborts its caller.
    ///
    /// Fatal errors bypass the error limit so that every [`FatalError`]
    /// token handed out has its diagnostic in the queue. An exact duplicate
    /// of a kept error is still dropped; the earlier copy stands for it.
    ///
    /// [`FatalError`]: crate::FatalError
    pub fn add_fatal(&mut self, diag: Diagnostic) -> bool {
        debug_assert!(diag.is_error(), "add_fatal() needs an error diagnostic");
        self.push_error(diag)
    }

    fn push_error(&mut self, diag: Diagnostic) -> bool {
        let key = (
            diag.primary_span().map_or(0, |span| span.start),
            message_prefix_hash(&diag.message),
        );
        if self.config.deduplicate && self.seen_errors.contains(&key) {
            return false;
        }

        self.seen_errors.push(key);
        self.error_count += 1;
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Number of errors kept so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of warnings kept so far.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Sort diagnostics by primary span and return them, clearing the queue.
    ///
    /// Diagnostics without a location sort first; ties keep report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        result.sort_by_key(|d| d.primary_span().map(|span| span.start));

        self.error_count = 0;
        self.warning_count = 0;
        self.seen_errors.clear();

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests;
