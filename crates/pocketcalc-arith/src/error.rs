//! Arithmetic-core error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned at the arithmetic-core boundary.
///
/// The digit-serial operations themselves never fail: division by zero is
/// reported in-band through the sentinel exponent, and internal invariant
/// violations are diagnostics only. The sole contract enforced here is the
/// fixed width of the input buffer.
#[derive(Debug, Error, Diagnostic)]
pub enum ArithError {
    /// Input buffer is not exactly 16 characters wide.
    #[error("input buffer must be exactly 16 characters, got {len}")]
    #[diagnostic(code(arith::input_width))]
    InputWidth { len: usize },
}
