//! Receipt
//!
//! Printable breakdown of a priced basket.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalogue::CatalogueLookup,
    items::LineItem,
    offer_lookup::OfferLookup,
    pricing::{BasketPricer, BasketPrices, PricingError, price_line_items, to_money},
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The basket could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A single receipt row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Product SKU
    pub sku: String,

    /// Quantity bought
    pub quantity: i64,

    /// Unit price
    pub unit_price: Money<'static, Currency>,

    /// Unit price multiplied by quantity
    pub subtotal: Money<'static, Currency>,

    /// Best discount on the line
    pub discount: Money<'static, Currency>,

    /// Description of the offer giving the discount, if any
    pub offer: Option<String>,
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    prices: BasketPrices,
    currency: &'static Currency,
}

impl Receipt {
    /// Price `basket` with `pricer` and build a receipt for it.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Pricing`] if the basket cannot be priced.
    pub fn for_basket<C: CatalogueLookup, O: OfferLookup>(
        pricer: &BasketPricer<C, O>,
        basket: &Basket,
        currency: &'static Currency,
    ) -> Result<Self, ReceiptError> {
        let items = pricer.line_items(basket);
        let prices = price_line_items(&items)?;

        Self::from_line_items(&items, prices, currency)
    }

    /// Build a receipt from resolved line items and the prices calculated for them.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Pricing`] if a line cannot be priced.
    pub fn from_line_items(
        items: &[LineItem],
        prices: BasketPrices,
        currency: &'static Currency,
    ) -> Result<Self, ReceiptError> {
        let lines = items
            .iter()
            .map(|item| receipt_line(item, currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            lines,
            prices,
            currency,
        })
    }

    /// Receipt rows, in SKU order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Basket prices
    pub fn prices(&self) -> BasketPrices {
        self.prices
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the totals cannot be converted to money or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["SKU", "Qty", "Unit Price", "Subtotal", "Discount", "Offer"]);

        for line in &self.lines {
            builder.push_record([
                line.sku.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.subtotal.to_string(),
                line.discount.to_string(),
                line.offer.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..5), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        write_summary_line(&mut out, "Sub Total:", &self.prices.subtotal_money(self.currency)?)?;
        write_summary_line(&mut out, "Discount:", &self.prices.discount_money(self.currency)?)?;
        write_summary_line(&mut out, "Total:", &self.prices.total_money(self.currency)?)?;

        Ok(())
    }
}

fn receipt_line(item: &LineItem, currency: &'static Currency) -> Result<ReceiptLine, PricingError> {
    let subtotal = item.subtotal().ok_or(PricingError::Overflow)?;
    let best = item.best_offer()?;

    let (offer, discount) = match best {
        Some((offer, discount)) if !discount.is_zero() => (Some(offer.to_string()), discount),
        Some((_, discount)) => (None, discount),
        None => (None, Decimal::ZERO),
    };

    Ok(ReceiptLine {
        sku: item.sku().to_string(),
        quantity: item.quantity(),
        unit_price: to_money(item.unit_price(), currency)?,
        subtotal: to_money(subtotal, currency)?,
        discount: to_money(discount, currency)?,
        offer,
    })
}

fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &Money<'_, Currency>,
) -> Result<(), ReceiptError> {
    writeln!(out, "{label:<10} {value}").map_err(|_err| ReceiptError::IO)
}
