//! Basket Example
//!
//! Prices the baskets of a fixture set and prints a receipt for each.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to price a single named basket
//! Set `RUST_LOG=basket_pricer=debug` to see each line being priced

use std::io::{self, Write};

use anyhow::Result;

use basket_pricer::{fixtures::Fixture, receipt::Receipt, utils::ExampleBasketArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Basket Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ExampleBasketArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let pricer = fixture.pricer();
    let currency = fixture.currency()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (name, basket) in fixture.baskets() {
        if args.basket.as_ref().is_some_and(|wanted| wanted != name) {
            continue;
        }

        writeln!(handle, "\n{name}")?;

        match Receipt::for_basket(&pricer, basket, currency) {
            Ok(receipt) => receipt.write_to(&mut handle)?,
            Err(err) => writeln!(handle, "Could not price basket: {err}")?,
        }
    }

    Ok(())
}
