//! Basket Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Wrapper for baskets in YAML
#[derive(Debug, Deserialize)]
pub struct BasketsFixture {
    /// Named baskets
    pub baskets: Vec<BasketFixture>,
}

/// Basket Fixture
#[derive(Debug, Deserialize)]
pub struct BasketFixture {
    /// Basket name
    pub name: String,

    /// Map of SKU -> quantity
    pub items: FxHashMap<String, i64>,
}
