//! End-to-end coverage: input buffers through the arithmetic core,
//! verified against the oracle, plus the algebraic guarantees the core
//! makes and the reproducibility of the randomized vector stream.

use pocketcalc_arith::{add_sub, div, mult, parse_input, Register};
use pocketcalc_proof::rng::VECTOR_SEED;
use pocketcalc_proof::vectors::{
    randomized_operand, DIV_OPERANDS, GRID_OPERANDS, RANDOM_VECTORS,
};
use pocketcalc_proof::{check, suite, MinStd, Oracle, Outcome};

fn reg(s: &str) -> Register {
    parse_input(s).unwrap()
}

// ---- canonical end-to-end scenarios ----

#[test]
fn parse_full_width_fraction() {
    assert_eq!(reg(" 1.2345678901234").to_string(), "+1.2345678901234e+00");
}

#[test]
fn parse_smallest_plain_fraction() {
    assert_eq!(reg(" 0.0000000000001").to_string(), "+1.0000000000000e-13");
}

#[test]
fn parse_truncates_fifteen_digits_to_fourteen() {
    assert_eq!(reg(" 123456789012345").to_string(), "+1.2345678901234e+14");
}

#[test]
fn one_plus_two() {
    let r = add_sub(reg(" 1              "), reg(" 2              "), false);
    assert_eq!(r.to_string(), "+3.0000000000000e+00");
}

#[test]
fn product_keeps_the_top_fourteen_digits_of_the_true_product() {
    let x = reg(" 1.2345678901234");
    let y = reg(" 2.7182818284590");
    let r = mult(x, y);
    // Exponent lands back at zero after normalization
    assert_eq!(r.exps, 128);
    assert!(r.to_string().ends_with("e+00"));
    // The digit-serial product agrees with the oracle up to truncation
    let expected = Oracle::new(1.234_567_890_123_4 * 2.718_281_828_459_0);
    assert_ne!(check(&r, &expected).0, Outcome::Fail);
}

#[test]
fn one_third_is_a_truncated_repeating_fraction() {
    let r = div(reg(" 1              "), reg(" 3              "));
    assert_eq!(r.to_string(), "+3.3333333333333e-01");
}

#[test]
fn negative_zero_plus_zero_is_canonical_zero() {
    let r = add_sub(reg("-0              "), reg(" 0              "), false);
    assert_eq!(r.to_string(), "+0.0000000000000e+00");
    assert_eq!(r, Register::zero());
}

#[test]
fn one_over_zero_is_the_positive_marker() {
    let r = div(reg(" 1              "), reg(" 0              "));
    assert!(r.is_div_by_zero());
    assert_eq!(r.to_string(), "+inf");
}

// ---- universal invariants ----

#[test]
fn nonzero_results_are_normalized() {
    for s in GRID_OPERANDS {
        for t in GRID_OPERANDS {
            for r in [
                add_sub(reg(s), reg(t), false),
                add_sub(reg(s), reg(t), true),
                mult(reg(s), reg(t)),
            ] {
                if !r.is_zero() && !r.is_div_by_zero() {
                    assert_ne!(r.mant[0], 0, "{s} {t}");
                }
            }
        }
    }
}

#[test]
fn zero_results_are_canonical() {
    for s in GRID_OPERANDS {
        let x = reg(s);
        for r in [
            add_sub(x, x, true),
            mult(x, Register::zero()),
            mult(Register::zero(), x),
        ] {
            if r.is_zero() {
                assert_eq!(r, Register::zero());
            }
        }
    }
}

#[test]
fn additive_identities_hold() {
    let zero = reg(" 0              ");
    for s in GRID_OPERANDS {
        let x = reg(s);
        assert_eq!(add_sub(x, zero, false), x, "x + 0");
        assert_eq!(add_sub(zero, x, false), x, "0 + x");
        assert_eq!(add_sub(x, zero, true), x, "x - 0");

        let neg = add_sub(zero, x, true);
        if x.is_zero() {
            assert_eq!(neg, Register::zero(), "0 - 0");
        } else {
            assert_eq!(neg.sign, !x.sign, "0 - x sign");
            assert_eq!(neg.mant, x.mant, "0 - x mantissa");
            assert_eq!(neg.exps, x.exps, "0 - x exponent");
        }
    }
}

#[test]
fn sign_composition_for_mult_and_div() {
    let x = reg("-1.2345678901234");
    let y = reg(" 2.7182818284590");
    assert!(mult(x, y).sign);
    assert!(!mult(x, reg("-2.7182818284590")).sign);
    assert!(div(x, y).sign);
    assert!(!div(x, reg("-2.7182818284590")).sign);
}

#[test]
fn add_then_sub_round_trips_within_one_ulp() {
    // Operand pairs sharing an exponent survive the round trip exactly or
    // to within one unit in the last place of the canonical print
    let pairs = [
        (" 1.2345678901234", " 2.7182818284590"),
        (" 3.1415926535897", " 1.0000000000001"),
        (" 9.9999999999999", " 1.0000000000000"),
    ];
    for (s, t) in pairs {
        let x = reg(s);
        let y = reg(t);
        let round_trip = add_sub(add_sub(x, y, false), y, true);
        let expected = Oracle::from_input(s).unwrap();
        assert_ne!(check(&round_trip, &expected).0, Outcome::Fail, "{s} {t}");
    }
}

#[test]
fn division_by_self_is_exactly_one() {
    for s in DIV_OPERANDS {
        let x = reg(s);
        let r = div(x, x);
        assert_eq!(r.to_string(), "+1.0000000000000e+00", "{s}");
        assert_eq!(r.exps, 128);
    }
}

#[test]
fn division_by_zero_sign_follows_the_operands() {
    let zero = reg(" 0              ");
    let neg_zero = reg("-0              ");
    assert_eq!(div(reg(" 5              "), zero).to_string(), "+inf");
    assert_eq!(div(reg("-5              "), zero).to_string(), "-inf");
    assert_eq!(div(reg("-5              "), neg_zero).to_string(), "+inf");
}

// ---- randomized vector stream ----

#[test]
fn vector_stream_is_reproducible_across_runs() {
    let synthesize = || {
        let mut rng = MinStd::new(VECTOR_SEED);
        let mut vectors = Vec::new();
        for _ in 0..RANDOM_VECTORS {
            let index1 = rng.index(GRID_OPERANDS.len());
            let index2 = rng.index(GRID_OPERANDS.len());
            let subtract = rng.index(2) == 1;
            let s = randomized_operand(&mut rng, GRID_OPERANDS[index1]);
            let t = randomized_operand(&mut rng, GRID_OPERANDS[index2]);
            vectors.push((s, subtract, t));
        }
        vectors
    };
    let first = synthesize();
    let second = synthesize();
    assert_eq!(first.len(), 500);
    assert_eq!(first, second);
}

#[test]
fn vector_stream_starts_from_the_documented_raw_values() {
    let mut rng = MinStd::new(VECTOR_SEED);
    assert_eq!(rng.next_raw(), 2_075_653);
    assert_eq!(rng.next_raw(), 1_409_598_201);
}

// ---- full suites ----

#[test]
fn all_suites_verify_without_failures() {
    let tally = suite::run_all().unwrap();
    assert_eq!(tally.fail, 0, "near: {} of {}", tally.near(), tally.total);
    assert!(tally.pass > 0);
    assert_eq!(
        tally.total,
        (2 * 25 + 4 * 24) + (2 * 4 * 18 * 18 + 500) + (4 * 18 * 18 + 500) + (4 * 17 * 17 + 500)
    );
}
