use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::units::Unit;

/// A business counterpart to an invoice — issuer or customer.
///
/// `company = true` selects the full registration display form (name,
/// EIK registration number, address); `false` the short individual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Tax registration number (EIK for companies, EGN for individuals).
    pub tax_number: u64,
    /// Legal or personal name.
    pub name: String,
    /// Postal address, single line.
    pub address: String,
    /// Whether this party is a registered company.
    pub company: bool,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.company {
            write!(f, "{}, EIK: {}, {}", self.name, self.tax_number, self.address)
        } else {
            write!(f, "{}, {}", self.name, self.address)
        }
    }
}

/// A sellable product. Owned by the product store and handed out as
/// [`Arc<Product>`] so positions reference it rather than copy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier. `None` until the product is created.
    pub id: Option<u64>,
    /// Short article code (e.g. "BK001").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Unit of measure, drives quantity display.
    pub unit: Unit,
    /// Base unit price, VAT-exclusive. Non-negative.
    pub price: Decimal,
}

impl Product {
    /// New product without an id; the store assigns one on create.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        unit: Unit,
        price: Decimal,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            unit,
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "[{}] {} — {} ({:.2}/{})",
                id, self.code, self.name, self.price, self.unit
            ),
            None => write!(
                f,
                "[-] {} — {} ({:.2}/{})",
                self.code, self.name, self.price, self.unit
            ),
        }
    }
}

/// One invoice line: a product reference, a quantity, and an optional
/// price override.
///
/// `price: None` means "use the product's base price". The override, when
/// present, is non-negative — enforced at invoice build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The invoiced product, shared with the store.
    pub product: Arc<Product>,
    /// Invoiced quantity, ≥ 0.
    pub quantity: Decimal,
    /// Optional unit-price override, VAT-exclusive.
    pub price: Option<Decimal>,
}

impl Position {
    /// Position at the product's base price.
    pub fn new(product: Arc<Product>, quantity: Decimal) -> Self {
        Self {
            product,
            quantity,
            price: None,
        }
    }

    /// Set a unit-price override.
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// The invoice document: header fields plus an ordered position list.
///
/// Position order is display order; the rendered row index is the 0-based
/// position in `positions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Sequential invoice number, rendered zero-padded to 10 digits.
    pub number: u64,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Date the underlying commercial event occurred. May differ from
    /// `issue_date`.
    pub event_date: NaiveDate,
    /// Issuing party.
    pub issuer: Party,
    /// Customer party.
    pub customer: Party,
    /// Ordered invoice lines.
    pub positions: Vec<Position>,
    /// Whether VAT is charged on positions. The aggregate VAT summary is
    /// computed regardless of this flag.
    pub vat_invoice: bool,
}
