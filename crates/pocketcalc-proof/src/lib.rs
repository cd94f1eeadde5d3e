//! Oracle-backed verification harness for the pocketcalc arithmetic core.
//!
//! The arithmetic core works purely in BCD digits; this crate supplies its
//! external collaborators:
//!
//! - a **reference oracle** ([`oracle::Oracle`]): an `f64` (15-17 decimal
//!   digits of precision) parsed from the same input buffers, printed in a
//!   canonical 13-fractional-digit scientific form for comparison
//! - a **verifier** ([`verify`]): compares the core's canonical print with
//!   the oracle's and classifies the result as OK, NEAR (last-digit
//!   rounding difference) or FAIL
//! - a **deterministic RNG** ([`rng::MinStd`]): the classical minstd
//!   linear-congruential generator, so randomized test vectors are
//!   byte-identical across implementations
//! - the **vector tables and suites** ([`vectors`], [`suite`]) that drive
//!   the core through enumerated and randomized operand pairs
//!
//! The `pocketcalc-proof` binary runs all four suites and reports the
//! tallies.

pub mod error;
pub mod oracle;
pub mod rng;
pub mod suite;
pub mod vectors;
pub mod verify;

pub use error::ProofError;
pub use oracle::Oracle;
pub use rng::MinStd;
pub use verify::{check, Outcome, Tally};

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, ProofError>;
