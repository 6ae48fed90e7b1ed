//! Fixtures
//!
//! Catalogues, offers and baskets loaded from YAML fixture sets. A set named `demo` is read from
//! `catalogues/demo.yml`, `offers/demo.yml` and `baskets/demo.yml` under the base path.

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::Basket,
    catalogue::Catalogue,
    fixtures::{baskets::BasketsFixture, catalogue::CatalogueFixture, offers::OffersFixture},
    offer_lookup::OfferBook,
    pricing::BasketPricer,
};

pub mod baskets;
pub mod catalogue;
pub mod offers;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid decimal format
    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between catalogues
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No catalogue loaded yet
    #[error("No catalogue loaded yet; currency unknown")]
    NoCurrency,

    /// Basket not found
    #[error("Basket not found: {0}")]
    BasketNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    catalogue: Catalogue,
    offers: OfferBook,

    /// Named baskets, in file order
    baskets: Vec<(String, Basket)>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalogue: Catalogue::new(),
            offers: OfferBook::new(),
            baskets: Vec::new(),
            currency: None,
        }
    }

    /// Load catalogue prices from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a price is not a decimal, or the
    /// currency differs from a previously loaded catalogue.
    pub fn load_catalogue(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("catalogues")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogueFixture = serde_norway::from_str(&contents)?;

        let currency = parse_currency(&fixture.currency)?;

        match self.currency {
            Some(existing) if existing != currency => {
                return Err(FixtureError::CurrencyMismatch(
                    existing.iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }
            Some(_) => {}
            None => self.currency = Some(currency),
        }

        for (sku, price) in fixture.products {
            self.catalogue.insert(sku, parse_decimal(&price)?);
        }

        debug!(
            path = %file_path.display(),
            products = self.catalogue.len(),
            "loaded catalogue fixture"
        );

        Ok(self)
    }

    /// Load offers from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a percentage is not a decimal.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("offers").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OffersFixture = serde_norway::from_str(&contents)?;

        for (sku, configs) in fixture.offers {
            for config in configs {
                self.offers.add_offer(sku.clone(), config.try_into()?);
            }
        }

        debug!(
            path = %file_path.display(),
            skus = self.offers.len(),
            "loaded offers fixture"
        );

        Ok(self)
    }

    /// Load named baskets from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_baskets(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("baskets").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: BasketsFixture = serde_norway::from_str(&contents)?;

        let count = fixture.baskets.len();

        self.baskets.extend(
            fixture
                .baskets
                .into_iter()
                .map(|basket| (basket.name, Basket::with_quantities(basket.items))),
        );

        debug!(path = %file_path.display(), baskets = count, "loaded baskets fixture");

        Ok(self)
    }

    /// Load a complete fixture set (catalogue, offers and baskets with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture
            .load_catalogue(name)?
            .load_offers(name)?
            .load_baskets(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalogue
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Get the loaded offers
    pub fn offers(&self) -> &OfferBook {
        &self.offers
    }

    /// Get all named baskets, in file order
    pub fn baskets(&self) -> &[(String, Basket)] {
        &self.baskets
    }

    /// Get a basket by name
    ///
    /// # Errors
    ///
    /// Returns an error if no basket has that name.
    pub fn basket(&self, name: &str) -> Result<&Basket, FixtureError> {
        self.baskets
            .iter()
            .find(|(basket_name, _)| basket_name == name)
            .map(|(_, basket)| basket)
            .ok_or_else(|| FixtureError::BasketNotFound(name.to_string()))
    }

    /// Get the currency of the loaded catalogue
    ///
    /// # Errors
    ///
    /// Returns an error if no catalogue has been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Create a pricer that borrows the loaded catalogue and offers
    pub fn pricer(&self) -> BasketPricer<&Catalogue, &OfferBook> {
        BasketPricer::new(&self.catalogue, &self.offers)
    }
}

/// Parse a decimal string (e.g., "0.99" or "-5")
///
/// # Errors
///
/// Returns an error if the string is not a valid decimal.
pub fn parse_decimal(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidDecimal(s.to_string()))
}

/// Parse an ISO currency code
///
/// # Errors
///
/// Returns an error if the currency code is not recognized.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
