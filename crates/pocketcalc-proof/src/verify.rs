//! Comparison of core results against the oracle.
//!
//! The core truncates where binary floating point rounds, so the two
//! canonical prints can legitimately disagree in the last mantissa digit.
//! A mismatch whose difference, scaled by the printed exponent magnitude,
//! stays within one unit of the second-to-last digit is classified NEAR;
//! anything larger is a FAIL.

use std::fmt;

use pocketcalc_arith::{Register, MANT_DIGITS};
use tracing::{debug, warn};

use crate::oracle::Oracle;

/// Largest scaled difference still attributed to last-digit rounding.
fn max_rounding_diff() -> f64 {
    10f64.powi(-((MANT_DIGITS - 2) as i32))
}

/// Classification of a core result against the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Canonical prints are identical.
    Pass,
    /// Prints differ by a last-digit rounding artifact.
    Near,
    /// Prints differ beyond rounding.
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Pass => "OK",
            Outcome::Near => "NEAR",
            Outcome::Fail => "FAIL",
        })
    }
}

/// Compare a core result with its oracle. Returns the classification and
/// the scaled difference (zero for an exact match).
pub fn check(result: &Register, oracle: &Oracle) -> (Outcome, f64) {
    let native = result.to_string();
    let expected = oracle.canonical();
    if native == expected {
        return (Outcome::Pass, 0.0);
    }

    // The canonical print parses back as a float, including the
    // division-by-zero marker
    let native_fp: f64 = native
        .parse()
        .expect("canonical register print is a float literal");

    let pow = result.exponent().unsigned_abs();
    let mut diff = (native_fp - oracle.value()).abs();
    diff *= 10f64.powi(-(pow as i32));

    if diff <= max_rounding_diff() {
        (Outcome::Near, diff)
    } else {
        (Outcome::Fail, diff)
    }
}

/// Running pass/fail counters for a verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: u32,
    pub pass: u32,
    pub fail: u32,
}

impl Tally {
    /// Record one verified vector, logging the comparison.
    pub fn record(&mut self, label: &str, result: &Register, oracle: &Oracle) -> Outcome {
        let (outcome, diff) = check(result, oracle);
        self.total += 1;
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Near => {}
            Outcome::Fail => self.fail += 1,
        }
        match outcome {
            Outcome::Fail => warn!(
                %label,
                native = %result,
                expected = %oracle.canonical(),
                diff,
                "verification failed"
            ),
            _ => debug!(
                %label,
                native = %result,
                expected = %oracle.canonical(),
                %outcome,
                "verified"
            ),
        }
        outcome
    }

    /// Vectors that differed only by last-digit rounding.
    pub fn near(&self) -> u32 {
        self.total - self.pass - self.fail
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: Tally) {
        self.total += other.total;
        self.pass += other.pass;
        self.fail += other.fail;
    }
}
