//! The invoice register — the application facade.
//!
//! Owns the append-only issuer/customer/invoice lists and the product
//! store, and wires the pricing engine into the renderer. Single-threaded
//! by design: callers in a multi-threaded system must hand the register an
//! immutable snapshot for the duration of a render.

use std::sync::Arc;

use crate::core::{Invoice, Party, PricingConfig, PricingEngine, Product, RegisterError};
use crate::render::{InvoiceRenderer, RenderConfig};
use crate::store::{InMemoryProducts, ProductLookup};

/// In-memory register of parties, products, and invoices.
#[derive(Debug, Default)]
pub struct InvoiceRegister {
    issuers: Vec<Party>,
    customers: Vec<Party>,
    invoices: Vec<Invoice>,
    products: InMemoryProducts,
    renderer: InvoiceRenderer,
}

impl InvoiceRegister {
    /// Register with default pricing (20% VAT) and rendering (width 40).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register with explicit pricing and rendering configuration.
    pub fn with_config(pricing: PricingConfig, render: RenderConfig) -> Self {
        Self {
            renderer: InvoiceRenderer::new(render, PricingEngine::new(pricing)),
            ..Self::default()
        }
    }

    // --- parties ---

    /// Append an issuer. Returns a reference to the stored party.
    pub fn add_issuer(&mut self, issuer: Party) -> &Party {
        self.issuers.push(issuer);
        self.issuers.last().expect("just pushed")
    }

    /// Append a customer. Returns a reference to the stored party.
    pub fn add_customer(&mut self, customer: Party) -> &Party {
        self.customers.push(customer);
        self.customers.last().expect("just pushed")
    }

    /// All issuers, in insertion order.
    pub fn issuers(&self) -> &[Party] {
        &self.issuers
    }

    /// All customers, in insertion order.
    pub fn customers(&self) -> &[Party] {
        &self.customers
    }

    // --- invoices ---

    /// Append an invoice. Returns a reference to the stored invoice.
    pub fn add_invoice(&mut self, invoice: Invoice) -> &Invoice {
        self.invoices.push(invoice);
        self.invoices.last().expect("just pushed")
    }

    /// All invoices, in insertion order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// The most recently added invoice, if any.
    pub fn latest_invoice(&self) -> Option<&Invoice> {
        self.invoices.last()
    }

    // --- products ---

    /// Store a product, delegating validation and id assignment to the
    /// product store.
    pub fn add_product(
        &mut self,
        product: Product,
        generate_id: bool,
    ) -> Result<Arc<Product>, RegisterError> {
        self.products.create(product, generate_id)
    }

    /// Look up a product by id.
    pub fn find_product(&self, id: u64) -> Result<Arc<Product>, RegisterError> {
        self.products.find_by_id(id)
    }

    /// All products, in id order.
    pub fn products(&self) -> Vec<Arc<Product>> {
        self.products.find_all()
    }

    /// Remove every product.
    pub fn delete_all_products(&mut self) {
        self.products.delete_all();
    }

    // --- rendering ---

    /// Render an invoice as a fixed-width text document.
    pub fn format_invoice(&self, invoice: &Invoice) -> String {
        self.renderer.format_invoice(invoice)
    }
}
