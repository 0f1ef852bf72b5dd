use chrono::NaiveDate;
use registar::config::AppConfig;
use registar::core::*;
use registar::register::InvoiceRegister;
use registar::render::RenderConfig;
use rust_decimal_macros::dec;

// Try: REGISTAR_PRINT__WIDTH=60 cargo run --example custom_width
fn main() {
    tracing_subscriber::fmt::init();

    let app = AppConfig::load();
    let mut register = InvoiceRegister::with_config(
        PricingConfig::default(),
        RenderConfig::with_width(app.print.width),
    );

    let flour = register
        .add_product(Product::new("GR010", "Flour type 500", Unit::Kg, dec!(1.85)), true)
        .expect("sample product should be valid");

    let invoice = InvoiceBuilder::new(42, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())
        .event_date(NaiveDate::from_ymd_opt(2024, 8, 30).unwrap())
        .issuer(PartyBuilder::new(1234567890, "Ivan Petrov EOOD", "Sofia 1000").build())
        .customer(
            PartyBuilder::new(7505123456, "Maria Georgieva", "Plovdiv 4000")
                .individual()
                .build(),
        )
        .add_position(Position::new(flour, dec!(2.5)))
        .build()
        .expect("sample invoice should be valid");

    println!("{}", register.format_invoice(&invoice));
}
