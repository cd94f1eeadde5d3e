//! Input-buffer parser: fixed-format user input to a normalized register.
//!
//! Assumptions on the input buffer (as typed in by the user):
//! * The buffer is exactly 16 characters wide
//! * char 0 holds the mantissa sign, `' '` (positive) or `'-'` (negative)
//! * chars 1.. hold the mantissa: digits with one optional `'.'`
//! * `'E'` at position 12 terminates the mantissa and starts the exponent
//!   section; spaces also terminate the mantissa
//! * the `'E'` specifier is optional, absence of it defaults to `E+00`
//! * `'E'` is followed by `'+'` or `'-'` and exactly two exponent digits
//!   `00..=99`
//!
//! The width is the only rule enforced here; the content rules are the
//! caller's contract. Malformed content yields an unspecified (usually
//! zero) register but never a panic, and exponent characters outside
//! `'0'..='9'` give an undefined exponent byte.

use crate::error::ArithError;
use crate::register::{Register, EXP_BIAS, MANT_DIGITS};
use crate::scratch::Scratch;
use crate::Result;

/// Required width of the input buffer.
pub const INPUT_WIDTH: usize = 16;

/// Parse a 16-character input buffer into a normalized register.
///
/// Only the buffer width can fail; see the module docs for the content
/// contract.
pub fn parse_input(input: &str) -> Result<Register> {
    let bytes = input.as_bytes();
    if bytes.len() != INPUT_WIDTH {
        return Err(ArithError::InputWidth { len: bytes.len() });
    }
    let mut buf = [0u8; INPUT_WIDTH];
    buf.copy_from_slice(bytes);
    Ok(parse_buffer(&buf))
}

/// Parse a fixed-width buffer. Infallible: width is already guaranteed.
pub(crate) fn parse_buffer(buf: &[u8; INPUT_WIDTH]) -> Register {
    let mut result = Register::zero();

    let mut scratch = Scratch::poisoned();
    scratch.clear();

    // 2 basic formats: with an explicit exponent and without it
    let mut maxi = INPUT_WIDTH; // final index of the mantissa character sequence
    if buf[12] == b'E' {
        let e0 = buf[14].wrapping_sub(b'0');
        let e1 = buf[15].wrapping_sub(b'0');
        let e = e0.wrapping_mul(10).wrapping_add(e1); // multiply by 10 is shifts and adds
        result.exps = if buf[13] == b'-' {
            EXP_BIAS.wrapping_add((!e).wrapping_add(1)) // 2's complement
        } else {
            e | 0x80 // exponent bias
        };
        maxi = 12;
    } else {
        result.exps = EXP_BIAS;
    }

    // Mantissa sign
    result.sign = buf[0] == b'-';

    // Walk the buffer and create a normalized mantissa. The location of
    // the decimal point determines which direction the exponent adjusts:
    // for numbers >= 1, increment by the digit count of the integer part;
    // for numbers < 1, decrement by the zero count after the point.
    let mut i = 1usize; // index into the source buffer
    let mut j = 0usize; // index into the normalized buffer
    let mut adjust: i8 = -1; // the first kept digit sits before the point

    // Ignore leading zeroes in the source mantissa
    while i <= MANT_DIGITS && buf[i] == b'0' {
        i += 1;
    }

    if buf[i] == b'.' {
        // Number < 1: skip the decimal point
        if i != maxi {
            i += 1;
        }
        // Count leading zeroes
        while i < INPUT_WIDTH && buf[i] == b'0' {
            adjust -= 1;
            i += 1;
        }
    } else {
        // Find the decimal point to know the exponent adjustment
        let mut i2 = i;
        while i2 != maxi && i2 < INPUT_WIDTH && buf[i2].is_ascii_digit() {
            adjust += 1;
            i2 += 1;
        }
    }

    // Copy remaining digits of the mantissa, ignoring the decimal point
    while i < INPUT_WIDTH
        && i != maxi
        && j < MANT_DIGITS
        && (buf[i].is_ascii_digit() || buf[i] == b'.')
    {
        if buf[i] != b'.' {
            scratch.digits[j] = buf[i] - b'0';
            j += 1;
        }
        i += 1;
    }

    if j > 0 {
        result.exps = result.exps.wrapping_add_signed(adjust);
    } else {
        // A zero mantissa takes the canonical zero exponent
        result.exps = EXP_BIAS;
    }

    result.mant = scratch.mantissa();

    result
}
