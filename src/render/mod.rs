//! Fixed-width plain-text invoice rendering.
//!
//! Produces one newline-terminated text block per invoice: centered header
//! labels, a `|`-bounded table of positions, and right-aligned summary
//! lines. The header and summary honor the configurable line width; the
//! table width is fixed by its column widths.

pub mod layout;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{Invoice, PricingEngine, Unit};
use layout::Alignment;

/// Column widths of the position table.
const CELL_WIDTHS: [usize; 7] = [2, 33, 8, 5, 8, 9, 8];

/// Header row alignment — every column title is centered.
const HEADER_ALIGNMENTS: [Alignment; 7] = [Alignment::Center; 7];

/// Position row alignment per column: index, name, quantity, unit, price,
/// VAT price, total.
const ROW_ALIGNMENTS: [Alignment; 7] = [
    Alignment::Right,
    Alignment::Left,
    Alignment::Right,
    Alignment::Center,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// Label texts of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub title: String,
    pub number: String,
    pub date: String,
    pub event_date: String,
    pub issuer: String,
    pub customer: String,
    pub price: String,
    pub vat: String,
    pub total: String,
    /// Column titles of the position table.
    pub columns: [String; 7],
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "I N V O I C E".into(),
            number: "Number: ".into(),
            date: "Date: ".into(),
            event_date: "Event Date:".into(),
            issuer: "Issuer: ".into(),
            customer: "Customer: ".into(),
            price: "Price: ".into(),
            vat: "VAT: ".into(),
            total: "Total: ".into(),
            columns: [
                "№".into(),
                "Name".into(),
                "Quantity".into(),
                "Unit".into(),
                "Price".into(),
                "VAT Price".into(),
                "Total".into(),
            ],
        }
    }
}

/// Rendering configuration, passed explicitly at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Header and summary line width in columns.
    pub width: usize,
    /// Label texts.
    pub labels: Labels,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 40,
            labels: Labels::default(),
        }
    }
}

impl RenderConfig {
    /// Default labels at the given line width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Renders an invoice into a fixed-width text document.
///
/// Rendering is a pure sequence of formatting steps over immutable input;
/// it never fails. An invoice without positions renders as header + table
/// header + zero-valued summary.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRenderer {
    config: RenderConfig,
    engine: PricingEngine,
}

impl InvoiceRenderer {
    pub fn new(config: RenderConfig, engine: PricingEngine) -> Self {
        Self { config, engine }
    }

    /// Format one invoice as a newline-terminated text block.
    pub fn format_invoice(&self, invoice: &Invoice) -> String {
        let width = self.config.width;
        let labels = &self.config.labels;
        let mut out = String::new();

        // Header block — each label + value centered in the line width.
        out.push_str(&layout::center(&labels.title, "", width));
        out.push('\n');
        out.push_str(&layout::center(
            &labels.number,
            &format!("{:010}", invoice.number),
            width,
        ));
        out.push('\n');
        out.push_str(&layout::center(
            &labels.date,
            &invoice.issue_date.format("%d.%m.%Y").to_string(),
            width,
        ));
        out.push('\n');
        out.push_str(&layout::center(
            &labels.event_date,
            &invoice.event_date.format("%d %B %Y").to_string(),
            width,
        ));
        out.push('\n');

        // Party blocks.
        out.push('\n');
        out.push_str(&labels.issuer);
        out.push('\n');
        out.push_str(&invoice.issuer.to_string());
        out.push('\n');
        out.push('\n');
        out.push_str(&labels.customer);
        out.push('\n');
        out.push_str(&invoice.customer.to_string());
        out.push('\n');

        // Position table.
        out.push('\n');
        let titles: Vec<&str> = labels.columns.iter().map(String::as_str).collect();
        out.push_str(&layout::table_row(&CELL_WIDTHS, &HEADER_ALIGNMENTS, &titles));

        for (index, position) in invoice.positions.iter().enumerate() {
            let priced = self.engine.price_position(position, invoice.vat_invoice);
            let cells = [
                index.to_string(),
                position.product.name.clone(),
                format_quantity(position.quantity, position.product.unit),
                position.product.unit.to_string(),
                format_amount(priced.unit_price),
                format_amount(priced.vat_price),
                format_amount(priced.total),
            ];
            let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
            out.push_str(&layout::table_row(&CELL_WIDTHS, &ROW_ALIGNMENTS, &cells));
        }

        // Summary — label + amount in an 8-column field, the whole line
        // right-justified into the configured width.
        let totals = self.engine.totals(invoice);
        for (label, amount) in [
            (&labels.price, totals.net_total),
            (&labels.vat, totals.vat_total),
            (&labels.total, totals.gross_total),
        ] {
            let line = format!("{}{:>8}", label, format_amount(amount));
            out.push_str(&layout::justify(&line, width, Alignment::Right));
            out.push('\n');
        }

        out
    }
}

/// Format a monetary amount with 2 decimals, rounding half up.
fn format_amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format a quantity: 0 decimals for counted units, 2 for measured.
fn format_quantity(quantity: Decimal, unit: Unit) -> String {
    if unit.is_discrete() {
        format!(
            "{:.0}",
            quantity.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        )
    } else {
        format!(
            "{:.2}",
            quantity.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}
