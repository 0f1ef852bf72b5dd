//! Property-based tests for pricing resolution and fixed-width layout.

use std::sync::Arc;

use proptest::prelude::*;
use registar::core::*;
use registar::render::layout::{self, Alignment};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn product(price: Decimal, unit: Unit) -> Arc<Product> {
    Arc::new(Product::new("PRD", "Product", unit, price))
}

/// Generate a reasonable price (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Generate a quantity (0.00 to 999.99).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u64..100_000u64).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
}

proptest! {
    #[test]
    fn vat_is_exactly_rate_times_price(price in arb_price()) {
        let engine = PricingEngine::default();
        prop_assert_eq!(engine.vat(price), dec!(0.20) * price);
    }

    #[test]
    fn override_always_wins(base in arb_price(), over in arb_price(), qty in arb_quantity()) {
        let engine = PricingEngine::default();
        let pos = Position::new(product(base, Unit::Pcs), qty).with_price(over);
        prop_assert_eq!(engine.unit_price(&pos), over);
    }

    #[test]
    fn base_price_used_when_no_override(base in arb_price(), qty in arb_quantity()) {
        let engine = PricingEngine::default();
        let pos = Position::new(product(base, Unit::Pcs), qty);
        prop_assert_eq!(engine.unit_price(&pos), base);
    }

    #[test]
    fn line_total_scales_with_quantity(base in arb_price(), qty in arb_quantity()) {
        let engine = PricingEngine::default();
        let pos = Position::new(product(base, Unit::Kg), qty);
        let priced = engine.price_position(&pos, true);
        prop_assert_eq!(priced.total, base * qty);
        prop_assert_eq!(priced.vat_price, priced.unit_price + priced.vat);
    }

    #[test]
    fn centering_never_loses_content(value in "\\PC{0,60}", width in 0usize..80) {
        let centered = layout::center("", &value, width);
        prop_assert_eq!(centered.trim(), value.trim());
        let expected_len = width.max(value.chars().count());
        prop_assert_eq!(centered.chars().count(), expected_len);
    }

    #[test]
    fn justified_field_width_is_exact(value in "\\PC{0,60}", width in 1usize..40) {
        for alignment in [Alignment::Left, Alignment::Right] {
            let field = layout::justify(&value, width, alignment);
            prop_assert_eq!(field.chars().count(), width);
        }
    }

    #[test]
    fn table_row_width_is_constant(
        name in "\\PC{0,50}",
        qty in arb_quantity(),
        price in arb_price(),
    ) {
        let widths = [2usize, 33, 8, 5, 8, 9, 8];
        let aligns = [
            Alignment::Right,
            Alignment::Left,
            Alignment::Right,
            Alignment::Center,
            Alignment::Right,
            Alignment::Right,
            Alignment::Right,
        ];
        let qty = qty.to_string();
        let price = price.to_string();
        let row = layout::table_row(
            &widths,
            &aligns,
            &["0", &name, &qty, "pcs", &price, &price, &price],
        );
        // justified cells truncate, the centered unit label is fixed width
        let expected = widths.iter().sum::<usize>() + widths.len() + 1 + 1;
        prop_assert_eq!(row.chars().count(), expected);
        prop_assert!(row.ends_with("|\n"));
    }
}
