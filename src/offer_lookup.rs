//! Offer Lookup
//!
//! Resolves product SKUs to the offers that apply to them.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::offers::Offer;

/// Offers attached to a single SKU. Most products carry at most a couple.
pub type SkuOffers = SmallVec<[Offer; 2]>;

/// Resolves a SKU to its applicable offers.
///
/// Implementations must not fail: an unknown SKU has no offers.
pub trait OfferLookup {
    /// Return the offers for `sku`, or an empty list if there are none.
    fn get_offers(&self, sku: &str) -> SkuOffers;
}

impl<T: OfferLookup + ?Sized> OfferLookup for &T {
    fn get_offers(&self, sku: &str) -> SkuOffers {
        (**self).get_offers(sku)
    }
}

/// Offer lookup backed by an in-memory SKU -> offers map
#[derive(Debug, Clone, Default)]
pub struct OfferBook {
    offers: FxHashMap<String, SkuOffers>,
}

impl OfferBook {
    /// Create an empty offer book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an offer to `sku`, returning the book for chaining.
    #[must_use]
    pub fn with_offer(mut self, sku: impl Into<String>, offer: Offer) -> Self {
        self.add_offer(sku, offer);
        self
    }

    /// Attach an offer to `sku`, after any offers it already has.
    pub fn add_offer(&mut self, sku: impl Into<String>, offer: Offer) {
        self.offers.entry(sku.into()).or_default().push(offer);
    }

    /// Number of SKUs with at least one entry.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl OfferLookup for OfferBook {
    fn get_offers(&self, sku: &str) -> SkuOffers {
        self.offers.get(sku).cloned().unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(S, Offer)> for OfferBook {
    fn from_iter<I: IntoIterator<Item = (S, Offer)>>(iter: I) -> Self {
        let mut book = Self::new();

        for (sku, offer) in iter {
            book.add_offer(sku, offer);
        }

        book
    }
}
