//! Offers
//!
//! Discount rules attached to individual products. Each offer is evaluated against a single
//! basket line (unit price and quantity) and yields the amount to take off that line.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::offers::{every_x_free::EveryXFreeOffer, percentage::PercentageOffer};

pub mod every_x_free;
pub mod percentage;

/// Errors raised while evaluating an offer.
///
/// Offer parameters are not checked on construction, so these surface the first time the offer
/// is used to price a line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// The configured percentage is below zero.
    #[error("Discount percentage cannot be negative")]
    NegativePercentage,

    /// The configured percentage is above one hundred.
    #[error("Discount percentage cannot be higher than 100%")]
    PercentageAbove100,

    /// The configured "free after" count is below zero.
    #[error("One free after X bought value cannot be negative")]
    NegativeFreeAfter,

    /// The discount could not be represented as a decimal.
    #[error("discount calculation overflowed")]
    Overflow,
}

/// Offer enum
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Offer {
    /// Percentage off the line
    Percentage(PercentageOffer),

    /// One unit free for every `free_after` units bought
    EveryXFree(EveryXFreeOffer),
}

impl Offer {
    /// Create a percentage offer, e.g. `Offer::percentage(Decimal::from(25))` for 25% off.
    pub fn percentage(discount_percent: Decimal) -> Self {
        Offer::Percentage(PercentageOffer::new(discount_percent))
    }

    /// Create an offer where one unit is free after every `free_after` bought.
    pub fn every_x_free(free_after: i64) -> Self {
        Offer::EveryXFree(EveryXFreeOffer::new(free_after))
    }

    /// Calculate the discount this offer gives on `quantity` units at `unit_price`.
    ///
    /// # Errors
    ///
    /// Returns an [`OfferError`] if the offer is misconfigured or the discount overflows.
    pub fn calculate_discount(
        &self,
        unit_price: Decimal,
        quantity: i64,
    ) -> Result<Decimal, OfferError> {
        match self {
            Offer::Percentage(percentage) => percentage.calculate_discount(unit_price, quantity),
            Offer::EveryXFree(every_x_free) => {
                every_x_free.calculate_discount(unit_price, quantity)
            }
        }
    }
}

impl From<PercentageOffer> for Offer {
    fn from(offer: PercentageOffer) -> Self {
        Offer::Percentage(offer)
    }
}

impl From<EveryXFreeOffer> for Offer {
    fn from(offer: EveryXFreeOffer) -> Self {
        Offer::EveryXFree(offer)
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offer::Percentage(percentage) => fmt::Display::fmt(percentage, f),
            Offer::EveryXFree(every_x_free) => fmt::Display::fmt(every_x_free, f),
        }
    }
}
