//! Ordering-strategy demonstration driver.
//!
//! Selects one of the two ordering strategies from the command line,
//! populates a collection with the deterministic 30-key sequence, prints
//! the numbered listing, sorts under the bound strategy, and prints the
//! listing again. A comparator panic raised by the flawed strategy is
//! trapped at this boundary, reported as a diagnostic, and mapped to a
//! distinct exit status instead of propagating as a crash.

use std::env;
use std::panic;
use std::process::ExitCode;

use log::{debug, info};
use ordkey::prelude::*;

mod logger;

// CLI tokens selecting the strategy.
const TOKEN_RIGHT: &str = "comparison-right";
const TOKEN_WRONG: &str = "comparison-wrong";

// How many keys the demonstration inserts.
const SAMPLE_COUNT: i32 = 30;

// Exit status for a trapped ordering fault. Usage errors exit 1.
const FAULT_STATUS: u8 = 2;

fn main() -> ExitCode {
    logger::initialize_logger();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("ordkey-cli", String::as_str);

    // Determine the desired run
    let Some(strategy) = parse_args(&args) else {
        print_usage(program);
        return ExitCode::from(1);
    };

    match run(strategy) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ OrdkeyError::OrderingFault { .. }) => {
            eprintln!("{err}");
            ExitCode::from(FAULT_STATUS)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Determine the selected strategy from the command line.
///
/// Exactly one recognized token is accepted; anything else is a usage
/// error handled by the caller.
fn parse_args(args: &[String]) -> Option<OrderingStrategy> {
    if args.len() != 2 {
        return None;
    }

    match args[1].as_str() {
        TOKEN_RIGHT => Some(Lexicographic),
        TOKEN_WRONG => Some(FlawedSinglePass),
        _ => None,
    }
}

/// Print the usage examples.
fn print_usage(program: &str) {
    println!("Incompatible arguments. Use examples:");
    println!("{program} {TOKEN_RIGHT}");
    println!("{program} {TOKEN_WRONG}");
}

/// Populate, print, sort, and print again under `strategy`.
fn run(strategy: OrderingStrategy) -> Result<(), OrdkeyError> {
    info!("selected strategy: {strategy}");

    let mut keys = Keyed::new()
        .strategy(strategy)
        .capacity(SAMPLE_COUNT as usize)
        .build::<f64>()?;

    println!("Inserting");
    keys.populate(SAMPLE_COUNT)?;
    debug!("inserted {} keys", keys.len());
    print!("{keys}");

    println!("Sorting");
    sort_quietly(&mut keys)?;
    debug!("sort completed");
    print!("{keys}");

    Ok(())
}

/// Run the checked sort with the default panic hook silenced.
///
/// The default hook would print the raw comparator panic before the
/// fault diagnostic; the user should see one message, not two.
fn sort_quietly(keys: &mut KeyedCollection<f64>) -> Result<(), OrdkeyError> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = keys.sort_checked();
    panic::set_hook(previous);
    outcome
}
