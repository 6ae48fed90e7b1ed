//! Basket pricer prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalogue::{Catalogue, CatalogueLookup},
    fixtures::{Fixture, FixtureError},
    items::LineItem,
    offer_lookup::{OfferBook, OfferLookup, SkuOffers},
    offers::{
        Offer, OfferError, every_x_free::EveryXFreeOffer, percentage::PercentageOffer,
    },
    pricing::{BasketPrices, BasketPricer, PricingError},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
