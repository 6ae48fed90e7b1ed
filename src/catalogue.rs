//! Catalogue
//!
//! Resolves product SKUs to unit prices.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

/// Resolves a SKU to its unit price.
///
/// Implementations must not fail: an unknown SKU is priced at zero.
pub trait CatalogueLookup {
    /// Return the unit price for `sku`, or zero if the SKU is unknown.
    fn get_price(&self, sku: &str) -> Decimal;
}

impl<T: CatalogueLookup + ?Sized> CatalogueLookup for &T {
    fn get_price(&self, sku: &str) -> Decimal {
        (**self).get_price(sku)
    }
}

/// Catalogue backed by an in-memory SKU -> price map
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    prices: FxHashMap<String, Decimal>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a price, returning the catalogue for chaining.
    #[must_use]
    pub fn with_price(mut self, sku: impl Into<String>, price: Decimal) -> Self {
        self.insert(sku, price);
        self
    }

    /// Set the price of `sku`, returning the previous price if there was one.
    pub fn insert(&mut self, sku: impl Into<String>, price: Decimal) -> Option<Decimal> {
        self.prices.insert(sku.into(), price)
    }

    /// Check whether the catalogue lists `sku`.
    pub fn contains(&self, sku: &str) -> bool {
        self.prices.contains_key(sku)
    }

    /// Number of products in the catalogue.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl CatalogueLookup for Catalogue {
    fn get_price(&self, sku: &str) -> Decimal {
        self.prices.get(sku).copied().unwrap_or(Decimal::ZERO)
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for Catalogue {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(sku, price)| (sku.into(), price))
                .collect(),
        }
    }
}
