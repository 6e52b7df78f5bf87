//! Proof that a fatal diagnostic was reported.

use std::fmt;

/// Token returned by [`DiagnosticReporter::fatal`](crate::DiagnosticReporter::fatal).
///
/// Code generation for the current compilation unit stops when an operation
/// returns `Err(FatalError)`. The diagnostic itself already went to the
/// reporter, which keeps fatal diagnostics past any error limit; the token
/// carries no payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FatalError(());

impl FatalError {
    /// Minted only by `DiagnosticReporter::fatal` and its implementations here.
    pub(crate) const fn reported() -> Self {
        FatalError(())
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fatal error reported")
    }
}

impl std::error::Error for FatalError {}
