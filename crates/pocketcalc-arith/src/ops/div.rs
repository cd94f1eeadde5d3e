//! Division by shift and subtract.
//!
//! Heuristic:
//! - If the divisor is zero, signal the error, done.
//! - If the dividend is zero, return zero, done.
//! - The sign of the result is the xor of the signs of the terms.
//! - The exponent of the result is the difference of the exponents.
//! - While dividend >= divisor, subtract the divisor and increment the
//!   current quotient digit.
//! - Shift the dividend left by one digit and repeat until all digits are
//!   processed.
//! - Normalize the result.

use tracing::warn;

use crate::digit::{bcd_sbc, exp_sub};
use crate::register::Register;
use crate::scratch::{Scratch, SCRATCH_DIGITS};

/// Divide `x` by `y`.
///
/// A zero divisor yields the division-by-zero marker (`exps = 0`) carrying
/// the xor of the operand signs; callers observe it through
/// [`Register::is_div_by_zero`].
pub fn div(x: Register, y: Register) -> Register {
    let mut result = Register::zero();

    let mut scratch1 = Scratch::from_register(&x); // dividend
    let mut scratch2 = Scratch::from_register(&y); // divisor
    let mut scratch3 = Scratch::poisoned(); // quotient
    scratch3.clear();

    // The sign of the result is the xor of the signs of the terms
    result.sign = x.sign ^ y.sign;

    if scratch2.is_zero() {
        warn!("division by zero");
        return Register::div_by_zero(result.sign);
    }
    if scratch1.is_zero() {
        return Register::zero();
    }

    result.exps = exp_sub(x.exps, y.exps);

    // Shift both dividend and divisor one digit to the right, freeing the
    // most significant digit. This compensates for the first dividend
    // shift left in the cases when it was less than the divisor.
    scratch1.shr();
    scratch2.shr();

    // ----------- DIVISION -----------
    for i in 0..SCRATCH_DIGITS {
        // MSB to LSB processing
        while scratch1.ge(&scratch2) {
            // Subtract the divisor from the dividend; the difference
            // becomes the new dividend. The borrow can never underflow
            // since the dividend is at least as large.
            let mut borrow = false;
            for k in (0..SCRATCH_DIGITS).rev() {
                let (sub, borrow_out) = bcd_sbc(scratch1.digits[k], scratch2.digits[k], borrow);
                scratch1.digits[k] = sub;
                borrow = borrow_out;
            }
            if borrow {
                warn!("unexpected borrow out of the dividend in div");
            }
            if scratch3.digits[i] > 9 {
                warn!(digit = scratch3.digits[i], index = i, "quotient digit overflow in div");
            }

            scratch3.digits[i] += 1;
        }

        // Shift the dividend left by one digit and repeat
        scratch1.shl();
    }

    // Normalize the result in the scratch register
    if scratch3.digits[0] == 0 {
        scratch3.shl();
        result.exps = result.exps.wrapping_sub(1);
    }

    result.mant = scratch3.mantissa();

    result
}
