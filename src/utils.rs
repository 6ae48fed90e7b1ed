//! Utils

use clap::Parser;

/// Arguments for the basket examples
#[derive(Debug, Parser)]
pub struct ExampleBasketArgs {
    /// Fixture set to load the catalogue, offers & baskets from
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Only price the basket with this name
    #[clap(short, long)]
    pub basket: Option<String>,
}
