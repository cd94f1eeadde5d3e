//! The reference floating-point oracle.
//!
//! Verification is done with an `f64`, whose 15-17 decimal digits of
//! precision cover the core's 14-digit mantissa. An oracle is built either
//! from the same 16-character input buffer handed to the core's parser, or
//! from `f64` arithmetic on two operand oracles; its canonical print is the
//! string the core's result is compared against.

use pocketcalc_arith::INPUT_WIDTH;

use crate::error::ProofError;
use crate::Result;

/// A reference value with at least 15 significant decimal digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oracle(f64);

impl Oracle {
    /// Wrap a computed reference value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Read a reference value from a 16-character input buffer.
    ///
    /// When the exponent marker at column 12 is separated from the
    /// mantissa by a blank column 11, the mantissa and the two exponent
    /// digits are parsed separately and combined; otherwise the whole
    /// trimmed buffer is one decimal literal.
    pub fn from_input(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        let spaced_exponent =
            bytes.len() == INPUT_WIDTH && bytes[11] == b' ' && bytes[12] == b'E';
        if spaced_exponent {
            let literal = input[..12].trim();
            let mantissa: f64 = literal.parse().map_err(|_| ProofError::OracleParse {
                input: input.to_string(),
                literal: literal.to_string(),
            })?;
            let literal = input[13..].trim();
            let pow: i32 = literal.parse().map_err(|_| ProofError::OracleParse {
                input: input.to_string(),
                literal: literal.to_string(),
            })?;
            Ok(Self(mantissa * 10f64.powi(pow)))
        } else {
            let literal = input.trim();
            let value: f64 = literal.parse().map_err(|_| ProofError::OracleParse {
                input: input.to_string(),
                literal: literal.to_string(),
            })?;
            Ok(Self(value))
        }
    }

    /// The wrapped reference value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Canonical scientific print: explicit sign (taken from the sign bit,
    /// so negative zero prints negative), 13 fractional digits, and a
    /// signed, zero-padded two-digit exponent. Infinities print as
    /// `+inf`/`-inf` to match the core's division-by-zero marker.
    pub fn canonical(&self) -> String {
        let value = self.0;
        let sign = if value.is_sign_negative() { "" } else { "+" };
        if value.is_infinite() {
            return format!("{sign}{value}"); // "inf" / "-inf"
        }
        if value.is_nan() {
            return format!("{sign}{value}");
        }
        let printed = format!("{value:.13e}");
        let (mantissa, exponent) = printed
            .split_once('e')
            .expect("scientific format always carries an exponent");
        let exp: i32 = exponent
            .parse()
            .expect("scientific exponent is a decimal integer");
        format!(
            "{sign}{mantissa}e{}{:02}",
            if exp < 0 { '-' } else { '+' },
            exp.unsigned_abs()
        )
    }
}

impl From<Oracle> for f64 {
    fn from(oracle: Oracle) -> f64 {
        oracle.0
    }
}
