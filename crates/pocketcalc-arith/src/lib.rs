//! BCD floating-point arithmetic core for a decimal pocket calculator.
//!
//! This crate models the arithmetic datapath of a small calculator chip:
//! signed, normalized, base-10 floating-point numbers with a 14-digit
//! mantissa and an 8-bit biased exponent. The four basic operations are
//! built exclusively from digit-level primitives (single-digit BCD
//! add/subtract with carry, single-digit BCD multiply, digit shifts), so
//! every algorithm here is realizable as a microcoded hardware sequence.
//!
//! # Number format
//!
//! A [`Register`] holds 14 decimal digits (most significant first), a sign
//! flag, and an exponent byte with a bias of 128. Non-zero values are
//! normalized so the leading digit is never zero:
//!
//! ```text
//! value = (-1)^sign * M0.M1..M13 * 10^(exps - 128)
//! ```
//!
//! Zero has the canonical form `+0` with `exps = 128`. An exponent byte of
//! zero is reserved as the division-by-zero marker and prints as
//! `+inf`/`-inf`.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc_arith::{add_sub, parse_input};
//!
//! let x = parse_input(" 1              ").unwrap();
//! let y = parse_input(" 2              ").unwrap();
//! let sum = add_sub(x, y, false);
//! assert_eq!(sum.to_string(), "+3.0000000000000e+00");
//! ```

pub mod digit;
pub mod error;
pub mod input;
pub mod ops;
pub mod register;
pub mod scratch;

pub use digit::{bcd_adc, bcd_mult, bcd_sbc, exp_add, exp_sub};
pub use error::ArithError;
pub use input::{parse_input, INPUT_WIDTH};
pub use ops::{add_sub, div, mult};
pub use register::{Register, EXP_BIAS, MANT_DIGITS};
pub use scratch::{Scratch, SCRATCH_DIGITS};

/// Result type for arithmetic-core operations.
pub type Result<T> = std::result::Result<T, ArithError>;
