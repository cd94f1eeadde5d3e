//! The user-visible number value: a normalized BCD register.

use std::fmt;
use std::str::FromStr;

use crate::error::ArithError;
use crate::input;

/// Number of mantissa digits in a register.
pub const MANT_DIGITS: usize = 14;

/// Bias applied to the stored exponent byte.
pub const EXP_BIAS: u8 = 128;

/// A signed, normalized base-10 floating-point value.
///
/// The represented value is `(-1)^sign * M0.M1..M13 * 10^(exps - 128)`
/// with `M0` the digit at index 0. Non-zero values keep `mant[0] != 0`;
/// zero is canonically `+0` with `exps = 128`. An exponent byte of 0 is
/// the division-by-zero marker, never a regular value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    /// Mantissa digits, most significant first, each in `0..=9`.
    pub mant: [u8; MANT_DIGITS],
    /// Set for a negative mantissa.
    pub sign: bool,
    /// 8-bit exponent with a bias of 128.
    pub exps: u8,
}

impl Register {
    /// The canonical zero value: positive, biased exponent 128, all
    /// mantissa digits zero.
    pub fn zero() -> Self {
        Self {
            mant: [0; MANT_DIGITS],
            sign: false,
            exps: EXP_BIAS,
        }
    }

    /// The division-by-zero marker carrying the would-be result sign.
    pub fn div_by_zero(sign: bool) -> Self {
        Self {
            mant: [0; MANT_DIGITS],
            sign,
            exps: 0,
        }
    }

    /// True if every mantissa digit is zero.
    pub fn is_zero(&self) -> bool {
        self.mant.iter().all(|&d| d == 0)
    }

    /// True if this register carries the division-by-zero marker.
    pub fn is_div_by_zero(&self) -> bool {
        self.exps == 0
    }

    /// Unbiased exponent. The negative side is recovered from the two's
    /// complement of the stored byte, as the print hardware would.
    pub fn exponent(&self) -> i32 {
        if self.exps & 0x80 != 0 {
            (self.exps & 0x7F) as i32
        } else {
            -(((EXP_BIAS.wrapping_sub(self.exps)) & 0x7F) as i32)
        }
    }
}

impl fmt::Display for Register {
    /// Canonical print form: `S M0 . M1..M13 e E P1 P2`, with the
    /// division-by-zero marker rendered as `+inf`/`-inf`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_div_by_zero() {
            return write!(f, "{}inf", if self.sign { '-' } else { '+' });
        }
        write!(f, "{}{}.", if self.sign { '-' } else { '+' }, self.mant[0])?;
        for &d in &self.mant[1..] {
            write!(f, "{d}")?;
        }
        let exp = self.exponent();
        write!(
            f,
            "e{}{:02}",
            if exp < 0 { '-' } else { '+' },
            exp.unsigned_abs()
        )
    }
}

impl FromStr for Register {
    type Err = ArithError;

    /// Parse a 16-character calculator input buffer. See [`crate::input`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        input::parse_input(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(digits: &[u8], sign: bool, exps: u8) -> Register {
        let mut r = Register::zero();
        r.mant[..digits.len()].copy_from_slice(digits);
        r.sign = sign;
        r.exps = exps;
        r
    }

    #[test]
    fn canonical_zero_prints_positive_with_zero_exponent() {
        assert_eq!(Register::zero().to_string(), "+0.0000000000000e+00");
    }

    #[test]
    fn positive_exponent_prints_two_padded_digits() {
        let r = reg(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4], false, 142);
        assert_eq!(r.to_string(), "+1.2345678901234e+14");
    }

    #[test]
    fn negative_exponent_uses_twos_complement_magnitude() {
        let r = reg(&[1], false, 115);
        assert_eq!(r.to_string(), "+1.0000000000000e-13");
        assert_eq!(r.exponent(), -13);
    }

    #[test]
    fn negative_sign_prints_leading_minus() {
        let r = reg(&[3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3], true, 127);
        assert_eq!(r.to_string(), "-3.3333333333333e-01");
    }

    #[test]
    fn wide_exponents_grow_past_two_digits() {
        let r = reg(&[9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9], false, 237);
        assert_eq!(r.to_string(), "+9.9999999999000e+109");
    }

    #[test]
    fn div_by_zero_marker_prints_inf_per_sign() {
        assert_eq!(Register::div_by_zero(false).to_string(), "+inf");
        assert_eq!(Register::div_by_zero(true).to_string(), "-inf");
    }
}
