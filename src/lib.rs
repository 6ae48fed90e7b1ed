//! Basket Pricer
//!
//! Prices a shopping basket against a catalogue of unit prices and a set of per-product offers,
//! producing the subtotal, the total discount and the final total. Offers on a line never stack:
//! the single best discount is taken.
//!
//! ```
//! use basket_pricer::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let pricer = BasketPricer::new(
//!     Catalogue::new()
//!         .with_price("APPLE", Decimal::from(5))
//!         .with_price("POTATO", Decimal::from(2)),
//!     OfferBook::new().with_offer("APPLE", Offer::percentage(Decimal::from(20))),
//! );
//!
//! let basket = Basket::with_quantities([("APPLE", 4), ("POTATO", 2), ("UNKNOWN", 3)]);
//! let prices = pricer.calculate_basket_prices(&basket)?;
//!
//! assert_eq!(prices.subtotal(), Decimal::from(24));
//! assert_eq!(prices.discount(), Decimal::from(4));
//! assert_eq!(prices.total(), Decimal::from(20));
//! # Ok::<(), PricingError>(())
//! ```

pub mod basket;
pub mod catalogue;
pub mod fixtures;
pub mod items;
pub mod offer_lookup;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod utils;
