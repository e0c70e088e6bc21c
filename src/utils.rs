//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct DemoBasketArgs {
    /// Number of basket lines to include
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalog, basket & offers
    #[clap(short, long, default_value = "supermarket")]
    pub fixture: String,
}
