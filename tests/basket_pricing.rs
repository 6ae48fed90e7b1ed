//! Integration tests for pricing baskets against catalogues and offers.

use basket_pricer::prelude::*;
use rust_decimal::Decimal;
use testresult::TestResult;

fn apple_potato_pricer() -> BasketPricer<Catalogue, OfferBook> {
    BasketPricer::new(
        Catalogue::new()
            .with_price("APPLE", Decimal::from(5))
            .with_price("POTATO", Decimal::TWO),
        OfferBook::new().with_offer("APPLE", Offer::percentage(Decimal::from(20))),
    )
}

#[test]
fn prices_mixed_basket_with_unknown_sku() -> TestResult {
    let basket = Basket::with_quantities([("APPLE", 4), ("POTATO", 2), ("UNKNOWN", 3)]);

    let prices = apple_potato_pricer().calculate_basket_prices(&basket)?;

    assert_eq!(prices.subtotal(), Decimal::from(24));
    assert_eq!(prices.discount(), Decimal::from(4));
    assert_eq!(prices.total(), Decimal::from(20));

    Ok(())
}

#[test]
fn empty_basket_prices_to_zero() -> TestResult {
    let prices = apple_potato_pricer().calculate_basket_prices(&Basket::new())?;

    assert_eq!(prices.subtotal(), Decimal::ZERO);
    assert_eq!(prices.discount(), Decimal::ZERO);
    assert_eq!(prices.total(), Decimal::ZERO);

    Ok(())
}

#[test]
fn total_is_subtotal_minus_discount() -> TestResult {
    let pricer = BasketPricer::new(
        Catalogue::new()
            .with_price("A", Decimal::new(333, 2))
            .with_price("B", Decimal::new(17, 2))
            .with_price("C", Decimal::new(1999, 2)),
        OfferBook::new()
            .with_offer("A", Offer::percentage(Decimal::new(125, 1)))
            .with_offer("B", Offer::every_x_free(3))
            .with_offer("C", Offer::percentage(Decimal::from(33))),
    );

    for quantities in [[1, 1, 1], [3, 8, 2], [0, 4, 7], [11, 0, 0]] {
        let [a, b, c] = quantities;
        let basket = Basket::with_quantities([("A", a), ("B", b), ("C", c)]);

        let prices = pricer.calculate_basket_prices(&basket)?;

        assert_eq!(prices.total(), prices.subtotal() - prices.discount());
        assert!(prices.discount() <= prices.subtotal());
        assert!(prices.total() >= Decimal::ZERO);
    }

    Ok(())
}

#[test]
fn best_offer_is_taken_not_the_sum() -> TestResult {
    let pricer = BasketPricer::new(
        Catalogue::new().with_price("APPLE", Decimal::from(5)),
        OfferBook::new()
            .with_offer("APPLE", Offer::percentage(Decimal::TEN))
            .with_offer("APPLE", Offer::percentage(Decimal::from(15))),
    );

    let prices = pricer.calculate_basket_prices(&Basket::with_quantities([("APPLE", 1)]))?;

    assert_eq!(prices.discount(), Decimal::new(75, 2));
    assert_eq!(prices.total(), Decimal::new(425, 2));

    Ok(())
}

#[test]
fn hundred_percent_offer_discounts_whole_line() -> TestResult {
    let pricer = BasketPricer::new(
        Catalogue::new().with_price("APPLE", Decimal::from(5)),
        OfferBook::new().with_offer("APPLE", Offer::percentage(Decimal::ONE_HUNDRED)),
    );

    let prices = pricer.calculate_basket_prices(&Basket::with_quantities([("APPLE", 3)]))?;

    assert_eq!(prices.discount(), Decimal::from(15));
    assert_eq!(prices.total(), Decimal::ZERO);

    Ok(())
}

#[test]
fn result_does_not_depend_on_insertion_order() -> TestResult {
    let pairs = [("APPLE", 4), ("POTATO", 2), ("UNKNOWN", 3)];
    let pricer = apple_potato_pricer();

    let forwards = pricer.calculate_basket_prices(&Basket::with_quantities(pairs))?;
    let backwards =
        pricer.calculate_basket_prices(&Basket::with_quantities(pairs.into_iter().rev()))?;

    assert_eq!(forwards, backwards);

    Ok(())
}

#[test]
fn negative_catalogue_price_errors() {
    let pricer = BasketPricer::new(
        Catalogue::new().with_price("APPLE", Decimal::from(-5)),
        OfferBook::new(),
    );

    let result = pricer.calculate_basket_prices(&Basket::with_quantities([("APPLE", 1)]));

    assert!(matches!(result, Err(PricingError::NegativeBasketPrice(_))));
}

#[test]
fn misconfigured_offer_errors_with_message() {
    for (percent, message) in [
        (-3, "Discount percentage cannot be negative"),
        (101, "Discount percentage cannot be higher than 100%"),
    ] {
        let pricer = BasketPricer::new(
            Catalogue::new().with_price("APPLE", Decimal::from(5)),
            OfferBook::new().with_offer("APPLE", Offer::percentage(Decimal::from(percent))),
        );

        let result = pricer.calculate_basket_prices(&Basket::with_quantities([("APPLE", 1)]));

        match result {
            Err(err @ PricingError::Offer(_)) => assert_eq!(err.to_string(), message),
            other => panic!("expected offer error, got {other:?}"),
        }
    }
}

#[test]
fn misconfigured_offer_on_absent_sku_is_never_evaluated() -> TestResult {
    let pricer = BasketPricer::new(
        Catalogue::new().with_price("APPLE", Decimal::from(5)),
        OfferBook::new().with_offer("PEAR", Offer::every_x_free(-1)),
    );

    let prices = pricer.calculate_basket_prices(&Basket::with_quantities([("APPLE", 1)]))?;

    assert_eq!(prices.total(), Decimal::from(5));

    Ok(())
}

/// A catalogue that prices everything the same, standing in for a remote price service.
#[derive(Debug)]
struct FlatPriceCatalogue(Decimal);

impl CatalogueLookup for FlatPriceCatalogue {
    fn get_price(&self, _sku: &str) -> Decimal {
        self.0
    }
}

/// Every SKU starting with `BOGOF-` is buy one get one free.
#[derive(Debug)]
struct PrefixOffers;

impl OfferLookup for PrefixOffers {
    fn get_offers(&self, sku: &str) -> SkuOffers {
        if sku.starts_with("BOGOF-") {
            SkuOffers::from_slice(&[Offer::every_x_free(1)])
        } else {
            SkuOffers::new()
        }
    }
}

#[test]
fn custom_lookups_can_be_injected() -> TestResult {
    let pricer = BasketPricer::new(FlatPriceCatalogue(Decimal::new(150, 2)), PrefixOffers);

    let basket = Basket::with_quantities([("BOGOF-CRISPS", 4), ("MILK", 1)]);
    let prices = pricer.calculate_basket_prices(&basket)?;

    assert_eq!(prices.subtotal(), Decimal::new(750, 2));
    assert_eq!(prices.discount(), Decimal::from(3));
    assert_eq!(prices.total(), Decimal::new(450, 2));

    Ok(())
}
