use chrono::NaiveDate;
use registar::core::*;
use registar::register::InvoiceRegister;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt::init();

    let mut register = InvoiceRegister::new();

    // Sample catalogue
    for product in [
        Product::new("BK001", "Thinking in Java 4th ed.", Unit::Pcs, dec!(25.99)),
        Product::new("BK002", "UML Distilled", Unit::Pcs, dec!(25.99)),
        Product::new("BK003", "Увод в програмирането с Java", Unit::Pcs, dec!(25.99)),
    ] {
        register
            .add_product(product, true)
            .expect("sample product should be valid");
    }

    register.add_issuer(PartyBuilder::new(1234567890, "Ivan Petrov EOOD", "Sofia 1000").build());
    register.add_issuer(PartyBuilder::new(1234567890, "Dimitar Dimitrov EOOD", "Sofia 1000").build());
    register.add_issuer(PartyBuilder::new(131234567, "ABC Ltd.", "Sofia 1000").build());

    register.add_customer(
        PartyBuilder::new(1234567890, "Ivan Petrov", "Sofia 1000")
            .individual()
            .build(),
    );
    register.add_customer(
        PartyBuilder::new(1234567890, "Dimitar Dimitrov", "Sofia 1000")
            .individual()
            .build(),
    );
    register.add_customer(PartyBuilder::new(131234567, "ABC Ltd.", "Sofia 1000").build());

    let issuer = register.issuers()[0].clone();
    let customer = register.customers()[2].clone();
    let first = register.find_product(1).expect("seeded above");
    let second = register.find_product(2).expect("seeded above");

    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let invoice = InvoiceBuilder::new(1, today)
        .issuer(issuer)
        .customer(customer)
        .add_position(Position::new(first, dec!(5)))
        .add_position(Position::new(second, dec!(1)))
        .build()
        .expect("sample invoice should be valid");
    register.add_invoice(invoice);

    for product in register.products() {
        println!("{product}");
    }

    println!("\nLatest Invoice:");
    if let Some(latest) = register.latest_invoice() {
        println!("{}", register.format_invoice(latest));
    }
}
