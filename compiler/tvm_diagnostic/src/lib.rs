//! Diagnostic reporting for code generation.
//!
//! Codegen never formats or prints diagnostics itself. It builds a
//! [`Diagnostic`] and hands it to an injected [`DiagnosticReporter`]:
//!
//! - `warning` - non-blocking, the operation still returns its result
//! - `fatal` - the operation stops and returns `Err(FatalError)`
//!
//! # Fatal Error Tokens
//!
//! [`FatalError`] can only be obtained from [`DiagnosticReporter::fatal`],
//! so holding one proves the failure was reported exactly where it was
//! detected.
//!
//! ```text
//! let Some(bits) = width(ty) else {
//!     return Err(reporter.fatal(diagnostic));
//! };
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;
mod reporter;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use guarantee::FatalError;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use reporter::{DiagnosticReporter, SharedReporter};
