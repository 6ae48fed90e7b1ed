//! Catalogue Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Wrapper for a catalogue in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogueFixture {
    /// ISO currency code for every price (e.g., "GBP")
    pub currency: String,

    /// Map of SKU -> unit price string (e.g., "0.99")
    pub products: FxHashMap<String, String>,
}
