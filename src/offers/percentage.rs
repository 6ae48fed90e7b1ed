//! Percentage Offer
//!
//! A percentage taken off the whole line, e.g. "25% off".

use std::fmt;

use rust_decimal::Decimal;

use crate::offers::OfferError;

/// Percentage discount on every unit of a line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PercentageOffer {
    discount_percent: Decimal,
}

impl PercentageOffer {
    /// Create a new percentage offer. `discount_percent` is expressed in points, so `25` is 25%.
    ///
    /// The value is not validated until a discount is calculated.
    pub fn new(discount_percent: Decimal) -> Self {
        Self { discount_percent }
    }

    /// Return the configured percentage in points.
    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// Calculate `unit_price * quantity * discount_percent / 100`.
    ///
    /// # Errors
    ///
    /// - [`OfferError::NegativePercentage`]: the percentage is below 0.
    /// - [`OfferError::PercentageAbove100`]: the percentage is above 100.
    /// - [`OfferError::Overflow`]: the discount cannot be represented.
    pub fn calculate_discount(
        &self,
        unit_price: Decimal,
        quantity: i64,
    ) -> Result<Decimal, OfferError> {
        if self.discount_percent < Decimal::ZERO {
            return Err(OfferError::NegativePercentage);
        }

        if self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(OfferError::PercentageAbove100);
        }

        unit_price
            .checked_mul(Decimal::from(quantity))
            .and_then(|line| line.checked_mul(self.discount_percent))
            .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(OfferError::Overflow)
    }
}

impl fmt::Display for PercentageOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% off", self.discount_percent.normalize())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn calculates_discount() -> TestResult {
        let offer = PercentageOffer::new(Decimal::TEN);

        assert_eq!(
            offer.calculate_discount(Decimal::from(5), 1)?,
            Decimal::new(5, 1)
        );

        Ok(())
    }

    #[test]
    fn calculates_discount_with_100_percent() -> TestResult {
        let offer = PercentageOffer::new(Decimal::ONE_HUNDRED);

        assert_eq!(
            offer.calculate_discount(Decimal::from(5), 1)?,
            Decimal::from(5)
        );

        Ok(())
    }

    #[test]
    fn calculates_discount_with_multiple_items() -> TestResult {
        let offer = PercentageOffer::new(Decimal::TEN);

        assert_eq!(
            offer.calculate_discount(Decimal::from(5), 3)?,
            Decimal::new(15, 1)
        );

        Ok(())
    }

    #[test]
    fn keeps_sub_minor_precision() -> TestResult {
        let offer = PercentageOffer::new(Decimal::from(25));

        assert_eq!(
            offer.calculate_discount(Decimal::new(189, 2), 1)?,
            Decimal::new(4725, 4)
        );

        Ok(())
    }

    #[test]
    fn zero_percent_gives_no_discount() -> TestResult {
        let offer = PercentageOffer::new(Decimal::ZERO);

        assert_eq!(offer.calculate_discount(Decimal::from(5), 7)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn negative_percentage_errors() {
        let offer = PercentageOffer::new(Decimal::from(-3));
        let result = offer.calculate_discount(Decimal::from(5), 1);

        assert_eq!(result, Err(OfferError::NegativePercentage));
        assert_eq!(
            OfferError::NegativePercentage.to_string(),
            "Discount percentage cannot be negative"
        );
    }

    #[test]
    fn percentage_above_100_errors() {
        let offer = PercentageOffer::new(Decimal::from(101));
        let result = offer.calculate_discount(Decimal::from(5), 1);

        assert_eq!(result, Err(OfferError::PercentageAbove100));
        assert_eq!(
            OfferError::PercentageAbove100.to_string(),
            "Discount percentage cannot be higher than 100%"
        );
    }

    #[test]
    fn validates_on_every_call() {
        let offer = PercentageOffer::new(Decimal::from(-1));

        assert!(offer.calculate_discount(Decimal::ONE, 1).is_err());
        assert!(offer.calculate_discount(Decimal::ZERO, 0).is_err());
    }

    #[test]
    fn overflow_returns_error() {
        let offer = PercentageOffer::new(Decimal::ONE_HUNDRED);
        let result = offer.calculate_discount(Decimal::MAX, i64::MAX);

        assert_eq!(result, Err(OfferError::Overflow));
    }
}
