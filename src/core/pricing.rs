//! Monetary derivation for invoice display.
//!
//! The engine produces the figures the renderer prints, without any
//! formatting concerns. All operations are total: well-formed input in,
//! exact [`Decimal`] figures out. Display rounding belongs to the renderer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{Invoice, Position};

/// Pricing configuration, passed explicitly at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat VAT rate applied uniformly to every position and to the
    /// invoice aggregate. No per-product override.
    pub vat_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vat_rate: dec!(0.20),
        }
    }
}

/// Per-position monetary figures, VAT-exclusive except where noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedPosition {
    /// Resolved unit price: the override when present, else the product's
    /// base price.
    pub unit_price: Decimal,
    /// VAT on one unit. Zero when the invoice is not a VAT invoice.
    pub vat: Decimal,
    /// VAT-inclusive unit price: `unit_price + vat`.
    pub vat_price: Decimal,
    /// Quantity-scaled line total, VAT-exclusive.
    pub total: Decimal,
}

/// Invoice-level totals.
///
/// `vat_total` is computed once on the aggregate net sum — not as a sum of
/// per-line VAT amounts — and is computed regardless of the invoice's
/// `vat_invoice` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of line totals, VAT-exclusive.
    pub net_total: Decimal,
    /// `vat_rate * net_total`, exact.
    pub vat_total: Decimal,
    /// `net_total + vat_total`.
    pub gross_total: Decimal,
}

/// Derives unit prices, VAT amounts, and totals. Pure; no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The configured flat VAT rate.
    pub fn vat_rate(&self) -> Decimal {
        self.config.vat_rate
    }

    /// Resolve a position's unit price: the override when present, else
    /// the product's base price.
    pub fn unit_price(&self, position: &Position) -> Decimal {
        position.price.unwrap_or(position.product.price)
    }

    /// VAT on a price at the flat rate.
    pub fn vat(&self, price: Decimal) -> Decimal {
        self.config.vat_rate * price
    }

    /// Price one position for display. Per-line VAT is charged only on
    /// VAT invoices.
    pub fn price_position(&self, position: &Position, vat_invoice: bool) -> PricedPosition {
        let unit_price = self.unit_price(position);
        let vat = if vat_invoice {
            self.vat(unit_price)
        } else {
            Decimal::ZERO
        };
        PricedPosition {
            unit_price,
            vat,
            vat_price: unit_price + vat,
            total: unit_price * position.quantity,
        }
    }

    /// Invoice totals. The aggregate VAT is derived from the net sum in a
    /// single multiplication, independent of the `vat_invoice` flag.
    pub fn totals(&self, invoice: &Invoice) -> Totals {
        let net_total: Decimal = invoice
            .positions
            .iter()
            .map(|pos| self.unit_price(pos) * pos.quantity)
            .sum();
        let vat_total = self.vat(net_total);
        Totals {
            net_total,
            vat_total,
            gross_total: net_total + vat_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{Product, Unit};

    fn book() -> Arc<Product> {
        Arc::new(Product::new("BK001", "UML Distilled", Unit::Pcs, dec!(25.99)))
    }

    #[test]
    fn vat_is_flat_rate_times_price() {
        let engine = PricingEngine::default();
        assert_eq!(engine.vat(dec!(100)), dec!(20.00));
        assert_eq!(engine.vat(dec!(25.99)), dec!(5.1980));
        assert_eq!(engine.vat(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn override_price_wins_when_present() {
        let engine = PricingEngine::default();

        let base = Position::new(book(), dec!(1));
        assert_eq!(engine.unit_price(&base), dec!(25.99));

        let overridden = Position::new(book(), dec!(1)).with_price(dec!(19.90));
        assert_eq!(engine.unit_price(&overridden), dec!(19.90));

        // Zero is a valid override, not "unset".
        let free = Position::new(book(), dec!(1)).with_price(Decimal::ZERO);
        assert_eq!(engine.unit_price(&free), Decimal::ZERO);
    }

    #[test]
    fn non_vat_invoice_zeroes_line_vat_only() {
        let engine = PricingEngine::default();
        let pos = Position::new(book(), dec!(2));

        let charged = engine.price_position(&pos, true);
        assert_eq!(charged.vat, dec!(5.1980));
        assert_eq!(charged.vat_price, dec!(31.1880));

        let exempt = engine.price_position(&pos, false);
        assert_eq!(exempt.vat, Decimal::ZERO);
        assert_eq!(exempt.vat_price, dec!(25.99));
        // Line total is VAT-exclusive either way.
        assert_eq!(charged.total, exempt.total);
    }

    #[test]
    fn aggregate_vat_computed_on_net_sum() {
        use chrono::NaiveDate;
        use crate::core::{InvoiceBuilder, PartyBuilder};

        let invoice = InvoiceBuilder::new(1, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
            .issuer(PartyBuilder::new(1, "A", "Sofia").build())
            .customer(PartyBuilder::new(2, "B", "Sofia").build())
            .add_position(Position::new(book(), dec!(5)))
            .add_position(Position::new(book(), dec!(1)))
            .vat_invoice(false)
            .build()
            .unwrap();

        let engine = PricingEngine::default();
        let totals = engine.totals(&invoice);
        assert_eq!(totals.net_total, dec!(155.94));
        // Computed on the aggregate, and regardless of the VAT flag.
        assert_eq!(totals.vat_total, dec!(0.20) * dec!(155.94));
        assert_eq!(totals.gross_total, dec!(187.1280));
    }

    #[test]
    fn empty_invoice_totals_are_zero() {
        use chrono::NaiveDate;
        use crate::core::{InvoiceBuilder, PartyBuilder};

        let invoice = InvoiceBuilder::new(9, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .issuer(PartyBuilder::new(1, "A", "Sofia").build())
            .customer(PartyBuilder::new(2, "B", "Sofia").build())
            .build()
            .unwrap();

        let totals = PricingEngine::default().totals(&invoice);
        assert_eq!(totals.net_total, Decimal::ZERO);
        assert_eq!(totals.vat_total, Decimal::ZERO);
        assert_eq!(totals.gross_total, Decimal::ZERO);
    }
}
