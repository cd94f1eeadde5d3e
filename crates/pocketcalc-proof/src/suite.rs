//! The four verification suites.
//!
//! Each suite walks its enumerated grid with all sign variations, then
//! replays the 500-vector randomized stream from the fixed seed, verifying
//! every core result against the oracle. Per-vector results go to the
//! tracing channel; the returned [`Tally`] carries the counters.

use pocketcalc_arith::{add_sub, div, mult, parse_input, Register};
use tracing::info;

use crate::oracle::Oracle;
use crate::rng::{MinStd, VECTOR_SEED};
use crate::vectors::{
    negated, negated_exponent, randomized_operand, DIV_OPERANDS, EXPONENT_INPUTS, GRID_OPERANDS,
    PLAIN_INPUTS, RANDOM_VECTORS,
};
use crate::verify::Tally;
use crate::Result;

fn parse_pair(s: &str, t: &str) -> Result<(Register, Oracle, Register, Oracle)> {
    let x = parse_input(s)?;
    let ox = Oracle::from_input(s)?;
    let y = parse_input(t)?;
    let oy = Oracle::from_input(t)?;
    Ok((x, ox, y, oy))
}

/// Parser suite: plain inputs, their negations, and every sign variation
/// of the explicit-exponent inputs.
pub fn input_suite() -> Result<Tally> {
    let mut tally = Tally::default();

    for row in PLAIN_INPUTS {
        let reg = parse_input(row)?;
        tally.record(row, &reg, &Oracle::from_input(row)?);
    }
    for row in PLAIN_INPUTS {
        let row = negated(row);
        let reg = parse_input(&row)?;
        tally.record(&row, &reg, &Oracle::from_input(&row)?);
    }

    // Sign variation bits: 0 is the mantissa sign, 1 the exponent sign
    for signs in 0..4 {
        for row in EXPONENT_INPUTS {
            let mut row = row.to_string();
            if signs & 1 != 0 {
                row = negated(&row);
            }
            if signs & 2 != 0 {
                row = negated_exponent(&row);
            }
            let reg = parse_input(&row)?;
            tally.record(&row, &reg, &Oracle::from_input(&row)?);
        }
    }

    info!(
        total = tally.total,
        pass = tally.pass,
        near = tally.near(),
        fail = tally.fail,
        "input parser suite finished"
    );
    Ok(tally)
}

/// Addition/subtraction suite: both operations over the operand grid with
/// all sign variations, then the randomized stream.
pub fn add_sub_suite() -> Result<Tally> {
    let mut tally = Tally::default();

    for subtract in [false, true] {
        let op = if subtract { '-' } else { '+' };
        for signs in 0..4 {
            for s in GRID_OPERANDS {
                for t in GRID_OPERANDS {
                    let s = if signs & 1 != 0 { negated(s) } else { s.to_string() };
                    let t = if signs & 2 != 0 { negated(t) } else { t.to_string() };
                    let (x, ox, y, oy) = parse_pair(&s, &t)?;
                    let result = add_sub(x, y, subtract);
                    let expected = if subtract {
                        Oracle::new(ox.value() - oy.value())
                    } else {
                        Oracle::new(ox.value() + oy.value())
                    };
                    tally.record(&format!("{s} {op} {t}"), &result, &expected);
                }
            }
        }
    }

    // Randomized vectors: pick rows, modify their first digits, randomize
    // signs and exponents within limits
    let mut rng = MinStd::new(VECTOR_SEED);
    for _ in 0..RANDOM_VECTORS {
        let index1 = rng.index(GRID_OPERANDS.len());
        let index2 = rng.index(GRID_OPERANDS.len());
        let subtract = rng.index(2) == 1;
        let s = randomized_operand(&mut rng, GRID_OPERANDS[index1]);
        let t = randomized_operand(&mut rng, GRID_OPERANDS[index2]);

        let (x, ox, y, oy) = parse_pair(&s, &t)?;
        let result = add_sub(x, y, subtract);
        let expected = if subtract {
            Oracle::new(ox.value() - oy.value())
        } else {
            Oracle::new(ox.value() + oy.value())
        };
        let op = if subtract { '-' } else { '+' };
        tally.record(&format!("{s} {op} {t}"), &result, &expected);
    }

    info!(
        total = tally.total,
        pass = tally.pass,
        near = tally.near(),
        fail = tally.fail,
        "add/sub suite finished"
    );
    Ok(tally)
}

/// Multiplication suite: the operand grid with all sign variations, then
/// the randomized stream.
pub fn mult_suite() -> Result<Tally> {
    let mut tally = Tally::default();

    for signs in 0..4 {
        for s in GRID_OPERANDS {
            for t in GRID_OPERANDS {
                let s = if signs & 1 != 0 { negated(s) } else { s.to_string() };
                let t = if signs & 2 != 0 { negated(t) } else { t.to_string() };
                let (x, ox, y, oy) = parse_pair(&s, &t)?;
                let result = mult(x, y);
                let expected = Oracle::new(ox.value() * oy.value());
                tally.record(&format!("{s} * {t}"), &result, &expected);
            }
        }
    }

    let mut rng = MinStd::new(VECTOR_SEED);
    for _ in 0..RANDOM_VECTORS {
        let index1 = rng.index(GRID_OPERANDS.len());
        let index2 = rng.index(GRID_OPERANDS.len());
        let s = randomized_operand(&mut rng, GRID_OPERANDS[index1]);
        let t = randomized_operand(&mut rng, GRID_OPERANDS[index2]);

        let (x, ox, y, oy) = parse_pair(&s, &t)?;
        let result = mult(x, y);
        tally.record(
            &format!("{s} * {t}"),
            &result,
            &Oracle::new(ox.value() * oy.value()),
        );
    }

    info!(
        total = tally.total,
        pass = tally.pass,
        near = tally.near(),
        fail = tally.fail,
        "mult suite finished"
    );
    Ok(tally)
}

/// Division suite: the zero-free divisor grid with all sign variations,
/// then the randomized stream.
pub fn div_suite() -> Result<Tally> {
    let mut tally = Tally::default();

    for signs in 0..4 {
        for s in DIV_OPERANDS {
            for t in DIV_OPERANDS {
                let s = if signs & 1 != 0 { negated(s) } else { s.to_string() };
                let t = if signs & 2 != 0 { negated(t) } else { t.to_string() };
                let (x, ox, y, oy) = parse_pair(&s, &t)?;
                let result = div(x, y);
                let expected = Oracle::new(ox.value() / oy.value());
                tally.record(&format!("{s} / {t}"), &result, &expected);
            }
        }
    }

    let mut rng = MinStd::new(VECTOR_SEED);
    for _ in 0..RANDOM_VECTORS {
        let index1 = rng.index(DIV_OPERANDS.len());
        let index2 = rng.index(DIV_OPERANDS.len());
        let s = randomized_operand(&mut rng, DIV_OPERANDS[index1]);
        let t = randomized_operand(&mut rng, DIV_OPERANDS[index2]);

        let (x, ox, y, oy) = parse_pair(&s, &t)?;
        let result = div(x, y);
        tally.record(
            &format!("{s} / {t}"),
            &result,
            &Oracle::new(ox.value() / oy.value()),
        );
    }

    info!(
        total = tally.total,
        pass = tally.pass,
        near = tally.near(),
        fail = tally.fail,
        "div suite finished"
    );
    Ok(tally)
}

/// Run all four suites and merge their tallies.
pub fn run_all() -> Result<Tally> {
    let mut tally = Tally::default();
    tally.merge(input_suite()?);
    tally.merge(add_sub_suite()?);
    tally.merge(mult_suite()?);
    tally.merge(div_suite()?);
    Ok(tally)
}
