//! # registar
//!
//! Small invoicing register: in-memory collections of business parties,
//! products, and invoices, flat-rate VAT pricing, and a fixed-width
//! plain-text invoice renderer.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use registar::core::*;
//! use registar::register::InvoiceRegister;
//! use rust_decimal_macros::dec;
//!
//! let mut register = InvoiceRegister::new();
//! let book = register
//!     .add_product(Product::new("BK002", "UML Distilled", Unit::Pcs, dec!(25.99)), true)
//!     .unwrap();
//!
//! let invoice = InvoiceBuilder::new(1, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .issuer(PartyBuilder::new(1234567890, "Ivan Petrov EOOD", "Sofia 1000").build())
//!     .customer(PartyBuilder::new(131234567, "ABC Ltd.", "Sofia 1000").build())
//!     .add_position(Position::new(book, dec!(5)))
//!     .build()
//!     .unwrap();
//! let invoice = register.add_invoice(invoice).clone();
//!
//! let text = register.format_invoice(&invoice);
//! assert!(text.contains("0000000001"));
//! assert!(text.contains("129.95"));
//! ```

pub mod config;
pub mod core;
pub mod register;
pub mod render;
pub mod store;

// Re-export core types at crate root for convenience
pub use crate::core::*;
