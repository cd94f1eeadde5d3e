//! Verification driver — runs the four suites against the oracle and
//! reports the tallies.

use pocketcalc_proof::suite;
use pocketcalc_proof::Tally;
use tracing_subscriber::EnvFilter;

fn report(name: &str, tally: &Tally) {
    println!(
        "{name:14} {:5} tests  {:5} ok  {:4} near  {:3} fail",
        tally.total,
        tally.pass,
        tally.near(),
        tally.fail
    );
}

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let input = suite::input_suite()?;
    report("input parser", &input);
    let add_sub = suite::add_sub_suite()?;
    report("add/sub", &add_sub);
    let mult = suite::mult_suite()?;
    report("mult", &mult);
    let div = suite::div_suite()?;
    report("div", &div);

    let mut total = input;
    total.merge(add_sub);
    total.merge(mult);
    total.merge(div);
    println!(
        "Total tests: {}  fail: {}  rounding errors: {}",
        total.total,
        total.fail,
        total.near()
    );

    Ok(())
}
