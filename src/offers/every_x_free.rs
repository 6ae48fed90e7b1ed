//! Every X Free Offer
//!
//! After buying `free_after` units the next one is free, e.g. "buy 2 get 1 free".

use std::fmt;

use rust_decimal::Decimal;

use crate::offers::OfferError;

/// One free unit for every `free_after + 1` units on the line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EveryXFreeOffer {
    free_after: i64,
}

impl EveryXFreeOffer {
    /// Create a new offer. A `free_after` of 0 makes every unit free.
    ///
    /// The value is not validated until a discount is calculated.
    pub fn new(free_after: i64) -> Self {
        Self { free_after }
    }

    /// Return the number of units bought before one is free.
    pub fn free_after(&self) -> i64 {
        self.free_after
    }

    /// Calculate `floor(quantity / (free_after + 1)) * unit_price`.
    ///
    /// # Errors
    ///
    /// - [`OfferError::NegativeFreeAfter`]: `free_after` is below 0.
    /// - [`OfferError::Overflow`]: the discount cannot be represented.
    pub fn calculate_discount(
        &self,
        unit_price: Decimal,
        quantity: i64,
    ) -> Result<Decimal, OfferError> {
        if self.free_after < 0 {
            return Err(OfferError::NegativeFreeAfter);
        }

        let group_size = self.free_after.checked_add(1).ok_or(OfferError::Overflow)?;

        // Floors toward negative infinity, group_size is always >= 1
        let free_units = quantity.div_euclid(group_size);

        unit_price
            .checked_mul(Decimal::from(free_units))
            .ok_or(OfferError::Overflow)
    }
}

impl fmt::Display for EveryXFreeOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.free_after == 0 {
            write!(f, "free")
        } else {
            write!(f, "buy {} get 1 free", self.free_after)
        }
    }
}
