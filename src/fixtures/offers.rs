//! Offer Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    offers::Offer,
};

/// Wrapper for offers in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Map of SKU -> offers for that SKU
    pub offers: FxHashMap<String, Vec<OfferFixtureConfig>>,
}

/// Offer configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixtureConfig {
    /// Percentage discount
    Percentage {
        /// Discount in percentage points (e.g., "25" for 25%)
        percent: String,
    },

    /// One free after every `free_after` bought
    EveryXFree {
        /// Units bought before one is free
        free_after: i64,
    },
}

impl TryFrom<OfferFixtureConfig> for Offer {
    type Error = FixtureError;

    fn try_from(config: OfferFixtureConfig) -> Result<Self, Self::Error> {
        match config {
            OfferFixtureConfig::Percentage { percent } => {
                Ok(Offer::percentage(parse_decimal(&percent)?))
            }
            OfferFixtureConfig::EveryXFree { free_after } => Ok(Offer::every_x_free(free_after)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_tagged_offers() -> TestResult {
        let fixture: OffersFixture = serde_norway::from_str(
            "offers:\n  BEANS:\n    - type: every_x_free\n      free_after: 2\n    - type: percentage\n      percent: \"12.5\"\n",
        )?;

        let offers = fixture
            .offers
            .into_values()
            .flatten()
            .map(Offer::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(
            offers,
            vec![
                Offer::every_x_free(2),
                Offer::percentage(Decimal::new(125, 1))
            ]
        );

        Ok(())
    }

    #[test]
    fn out_of_range_values_load_unvalidated() -> TestResult {
        let offer = Offer::try_from(OfferFixtureConfig::Percentage {
            percent: "200".to_string(),
        })?;

        assert_eq!(offer, Offer::percentage(Decimal::from(200)));

        Ok(())
    }

    #[test]
    fn invalid_percentage_errors() {
        let result = Offer::try_from(OfferFixtureConfig::Percentage {
            percent: "lots".to_string(),
        });

        assert!(matches!(result, Err(FixtureError::InvalidDecimal(_))));
    }
}
