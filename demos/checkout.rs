//! Checkout Example
//!
//! This example prices a fixture basket against its catalog and offers and
//! prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to limit the number of basket lines

use std::{io, time::Instant};

use anyhow::Result;

use clap::Parser;
use till::{checkout::Teller, fixtures::Fixture, utils::DemoBasketArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoBasketArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;

    let mut teller = Teller::new(&catalog);
    fixture.register_offers(&mut teller);

    let basket = fixture.basket(args.n)?;

    let start = Instant::now();
    let receipt = teller.checkout(&basket)?;
    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    println!("\nPriced in {elapsed}s");

    Ok(())
}
