//! Items
//!
//! Line items are built for each basket entry while pricing and thrown away afterwards.

use rust_decimal::Decimal;

use crate::{
    offer_lookup::SkuOffers,
    offers::{Offer, OfferError},
};

/// A single basket line: one SKU, its quantity, unit price and the offers that apply to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    sku: String,
    quantity: i64,
    unit_price: Decimal,
    offers: SkuOffers,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(sku: impl Into<String>, quantity: i64, unit_price: Decimal, offers: SkuOffers) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            unit_price,
            offers,
        }
    }

    /// Returns the SKU
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the quantity
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the applicable offers
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Unit price multiplied by quantity, unrounded.
    ///
    /// Returns `None` if the product overflows.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// The largest discount any single offer gives on this line, or zero when no offers apply.
    ///
    /// Offers do not stack.
    ///
    /// # Errors
    ///
    /// Returns the first [`OfferError`] raised by any offer.
    pub fn best_discount(&self) -> Result<Decimal, OfferError> {
        self.best_offer()
            .map(|best| best.map_or(Decimal::ZERO, |(_offer, discount)| discount))
    }

    /// The offer giving the largest discount on this line, together with that discount.
    ///
    /// When offers tie, the first one listed is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`OfferError`] raised by any offer.
    pub fn best_offer(&self) -> Result<Option<(&Offer, Decimal)>, OfferError> {
        let mut best: Option<(&Offer, Decimal)> = None;

        for offer in &self.offers {
            let discount = offer.calculate_discount(self.unit_price, self.quantity)?;

            if best.is_none_or(|(_, current)| discount > current) {
                best = Some((offer, discount));
            }
        }

        Ok(best)
    }
}
