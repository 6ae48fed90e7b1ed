//! Pricing
//!
//! Turns a [`Basket`] into a subtotal, discount and total by looking up each SKU's unit price and
//! offers. Line values are summed unrounded and the two sums are rounded to two decimal places
//! (half away from zero) before the total is taken.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    basket::Basket,
    catalogue::CatalogueLookup,
    items::LineItem,
    offer_lookup::OfferLookup,
    offers::OfferError,
};

/// Decimal places basket totals are rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur while pricing a basket.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An offer on one of the lines is misconfigured.
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// The basket subtotal or total came out below zero.
    #[error("basket price cannot be negative, got {0}")]
    NegativeBasketPrice(Decimal),

    /// A line or basket sum could not be represented as a decimal.
    #[error("basket price calculation overflowed")]
    Overflow,
}

/// Rounded basket-level prices.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BasketPrices {
    subtotal: Decimal,
    discount: Decimal,
    total: Decimal,
}

impl BasketPrices {
    /// Total before discounts
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Sum of the best discount on each line
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Subtotal minus discount, never negative
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Subtotal as money in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn subtotal_money(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PricingError> {
        to_money(self.subtotal, currency)
    }

    /// Discount as money in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn discount_money(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PricingError> {
        to_money(self.discount, currency)
    }

    /// Total as money in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn total_money(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PricingError> {
        to_money(self.total, currency)
    }
}

/// Prices baskets against a catalogue and a set of offers.
#[derive(Debug, Clone)]
pub struct BasketPricer<C, O> {
    catalogue: C,
    offers: O,
}

impl<C: CatalogueLookup, O: OfferLookup> BasketPricer<C, O> {
    /// Create a pricer using the given lookups.
    pub fn new(catalogue: C, offers: O) -> Self {
        Self { catalogue, offers }
    }

    /// Return the catalogue lookup
    pub fn catalogue(&self) -> &C {
        &self.catalogue
    }

    /// Return the offer lookup
    pub fn offers(&self) -> &O {
        &self.offers
    }

    /// Resolve every basket entry into a line item, sorted by SKU.
    pub fn line_items(&self, basket: &Basket) -> Vec<LineItem> {
        let mut items: Vec<LineItem> = basket
            .iter()
            .map(|(sku, quantity)| {
                LineItem::new(
                    sku,
                    quantity,
                    self.catalogue.get_price(sku),
                    self.offers.get_offers(sku),
                )
            })
            .collect();

        items.sort_unstable_by(|a, b| a.sku().cmp(b.sku()));

        items
    }

    /// Calculate the subtotal, discount and total for a basket.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Offer`]: an offer attached to a basket line is misconfigured.
    /// - [`PricingError::NegativeBasketPrice`]: the subtotal or total is negative.
    /// - [`PricingError::Overflow`]: the prices cannot be represented.
    pub fn calculate_basket_prices(&self, basket: &Basket) -> Result<BasketPrices, PricingError> {
        price_line_items(&self.line_items(basket))
    }
}

/// Aggregate already-resolved line items into basket prices.
///
/// # Errors
///
/// See [`BasketPricer::calculate_basket_prices`].
pub fn price_line_items(items: &[LineItem]) -> Result<BasketPrices, PricingError> {
    let mut subtotal = Decimal::ZERO;
    let mut discount = Decimal::ZERO;

    for item in items {
        let line_subtotal = item.subtotal().ok_or(PricingError::Overflow)?;
        let line_discount = item.best_discount()?;

        debug!(
            sku = item.sku(),
            quantity = item.quantity(),
            unit_price = %item.unit_price(),
            subtotal = %line_subtotal,
            discount = %line_discount,
            "priced basket line"
        );

        subtotal = subtotal
            .checked_add(line_subtotal)
            .ok_or(PricingError::Overflow)?;

        discount = discount
            .checked_add(line_discount)
            .ok_or(PricingError::Overflow)?;
    }

    if subtotal < Decimal::ZERO {
        warn!(%subtotal, "basket subtotal is negative");

        return Err(PricingError::NegativeBasketPrice(subtotal));
    }

    let subtotal = round_money(subtotal);

    let discount = round_money(discount);
    let total = subtotal
        .checked_sub(discount)
        .ok_or(PricingError::Overflow)?;

    if total < Decimal::ZERO {
        warn!(%subtotal, %discount, %total, "basket total is negative");

        return Err(PricingError::NegativeBasketPrice(total));
    }

    Ok(BasketPrices {
        subtotal,
        discount,
        total,
    })
}

/// Round to [`MONEY_DECIMAL_PLACES`], with midpoints rounded away from zero. The result always
/// carries exactly that many decimal places, so `4` becomes `4.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    rounded.rescale(MONEY_DECIMAL_PLACES);

    rounded
}

/// Convert a decimal amount into money, rounding to minor units first.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
pub fn to_money(
    value: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor_units = round_money(value)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor_units, currency))
}
