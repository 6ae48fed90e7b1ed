//! Basket

use std::collections::hash_map;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors related to basket construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// Adding to a SKU's quantity overflowed `i64`.
    #[error("quantity of {0} overflowed")]
    QuantityOverflow(String),
}

/// Basket of SKUs and the quantity of each.
///
/// Quantities are signed so that returns or bad input flow through pricing instead of being
/// rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    quantities: FxHashMap<String, i64>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a basket from `(sku, quantity)` pairs. Repeated SKUs are summed, saturating at the
    /// bounds of `i64`. Use [`Basket::try_with_quantities`] to reject overflow instead.
    pub fn with_quantities<S: Into<String>>(quantities: impl IntoIterator<Item = (S, i64)>) -> Self {
        quantities.into_iter().collect()
    }

    /// Create a basket from `(sku, quantity)` pairs, summing repeated SKUs.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::QuantityOverflow`] if a summed quantity does not fit in `i64`.
    pub fn try_with_quantities<S: Into<String>>(
        quantities: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, BasketError> {
        let mut basket = Self::new();

        for (sku, quantity) in quantities {
            basket.try_add(sku, quantity)?;
        }

        Ok(basket)
    }

    /// Add `quantity` units of `sku`, on top of any already in the basket.
    ///
    /// The running quantity saturates at the bounds of `i64`; see [`Basket::try_add`].
    pub fn add(&mut self, sku: impl Into<String>, quantity: i64) {
        let entry = self.quantities.entry(sku.into()).or_insert(0);

        *entry = entry.saturating_add(quantity);
    }

    /// Add `quantity` units of `sku`, on top of any already in the basket.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::QuantityOverflow`] if the new quantity does not fit in `i64`. The
    /// basket is left unchanged.
    pub fn try_add(&mut self, sku: impl Into<String>, quantity: i64) -> Result<(), BasketError> {
        let sku = sku.into();
        let current = self.quantities.get(&sku).copied().unwrap_or(0);

        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| BasketError::QuantityOverflow(sku.clone()))?;

        self.quantities.insert(sku, updated);

        Ok(())
    }

    /// Set the quantity of `sku`, returning the previous quantity if there was one.
    pub fn set(&mut self, sku: impl Into<String>, quantity: i64) -> Option<i64> {
        self.quantities.insert(sku.into(), quantity)
    }

    /// Remove `sku` from the basket, returning its quantity.
    pub fn remove(&mut self, sku: &str) -> Option<i64> {
        self.quantities.remove(sku)
    }

    /// Get the quantity of `sku`, if it is in the basket.
    pub fn quantity(&self, sku: &str) -> Option<i64> {
        self.quantities.get(sku).copied()
    }

    /// Iterate over `(sku, quantity)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.quantities
            .iter()
            .map(|(sku, quantity)| (sku.as_str(), *quantity))
    }

    /// Get the number of distinct SKUs in the basket.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

/// Sums repeated SKUs like [`Basket::add`], saturating on overflow.
impl<S: Into<String>> FromIterator<(S, i64)> for Basket {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut basket = Self::new();

        for (sku, quantity) in iter {
            basket.add(sku, quantity);
        }

        basket
    }
}

impl<S: Into<String>> Extend<(S, i64)> for Basket {
    fn extend<I: IntoIterator<Item = (S, i64)>>(&mut self, iter: I) {
        for (sku, quantity) in iter {
            self.add(sku, quantity);
        }
    }
}

impl IntoIterator for Basket {
    type Item = (String, i64);
    type IntoIter = hash_map::IntoIter<String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.quantities.into_iter()
    }
}
