//! Harness error types.

use miette::Diagnostic;
use pocketcalc_arith::ArithError;
use thiserror::Error;

/// Errors raised by the verification harness.
#[derive(Debug, Error, Diagnostic)]
pub enum ProofError {
    /// The oracle could not parse a decimal literal from an input buffer.
    #[error("oracle failed to parse {literal:?} from input buffer {input:?}")]
    #[diagnostic(code(proof::oracle_parse))]
    OracleParse { input: String, literal: String },

    /// A vector was rejected by the arithmetic core's input contract.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Arith(#[from] ArithError),
}
