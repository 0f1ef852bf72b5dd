use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{RegisterError, ValidationError};
use super::types::*;

/// Builder for constructing invoices.
///
/// ```
/// use chrono::NaiveDate;
/// use registar::core::*;
/// use rust_decimal_macros::dec;
/// use std::sync::Arc;
///
/// let book = Arc::new(Product::new("BK001", "UML Distilled", Unit::Pcs, dec!(25.99)));
/// let invoice = InvoiceBuilder::new(1, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .issuer(PartyBuilder::new(1234567890, "Ivan Petrov EOOD", "Sofia 1000").build())
///     .customer(PartyBuilder::new(131234567, "ABC Ltd.", "Sofia 1000").build())
///     .add_position(Position::new(book, dec!(5)))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.positions.len(), 1);
/// ```
pub struct InvoiceBuilder {
    number: u64,
    issue_date: NaiveDate,
    event_date: Option<NaiveDate>,
    issuer: Option<Party>,
    customer: Option<Party>,
    positions: Vec<Position>,
    vat_invoice: bool,
}

impl InvoiceBuilder {
    pub fn new(number: u64, issue_date: NaiveDate) -> Self {
        Self {
            number,
            issue_date,
            event_date: None,
            issuer: None,
            customer: None,
            positions: Vec::new(),
            vat_invoice: true,
        }
    }

    /// Date of the underlying commercial event. Defaults to the issue date.
    pub fn event_date(mut self, date: NaiveDate) -> Self {
        self.event_date = Some(date);
        self
    }

    pub fn issuer(mut self, party: Party) -> Self {
        self.issuer = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn add_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    /// Whether VAT is charged on positions. Defaults to true.
    pub fn vat_invoice(mut self, vat: bool) -> Self {
        self.vat_invoice = vat;
        self
    }

    /// Build the invoice, validating positions.
    ///
    /// An empty position list is allowed — such an invoice renders as a
    /// header plus a zero-valued summary. Returns all validation errors,
    /// not just the first.
    pub fn build(self) -> Result<Invoice, RegisterError> {
        let issuer = self
            .issuer
            .ok_or_else(|| RegisterError::InvalidEntity("issuer is required".into()))?;
        let customer = self
            .customer
            .ok_or_else(|| RegisterError::InvalidEntity("customer is required".into()))?;

        let mut errors = Vec::new();
        for (i, pos) in self.positions.iter().enumerate() {
            if pos.quantity < Decimal::ZERO {
                errors.push(ValidationError::new(
                    format!("positions[{i}].quantity"),
                    "quantity must be non-negative",
                ));
            }
            if let Some(price) = pos.price {
                if price < Decimal::ZERO {
                    errors.push(ValidationError::new(
                        format!("positions[{i}].price"),
                        "price override must be non-negative",
                    ));
                }
            }
        }
        if !errors.is_empty() {
            return Err(RegisterError::invalid_entity(errors));
        }

        Ok(Invoice {
            number: self.number,
            issue_date: self.issue_date,
            event_date: self.event_date.unwrap_or(self.issue_date),
            issuer,
            customer,
            positions: self.positions,
            vat_invoice: self.vat_invoice,
        })
    }
}

/// Builder for [`Party`]. Parties default to the company form.
pub struct PartyBuilder {
    tax_number: u64,
    name: String,
    address: String,
    company: bool,
}

impl PartyBuilder {
    pub fn new(tax_number: u64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            tax_number,
            name: name.into(),
            address: address.into(),
            company: true,
        }
    }

    /// Mark this party as an individual — short display form.
    pub fn individual(mut self) -> Self {
        self.company = false;
        self
    }

    pub fn build(self) -> Party {
        Party {
            tax_number: self.tax_number,
            name: self.name,
            address: self.address,
            company: self.company,
        }
    }
}
