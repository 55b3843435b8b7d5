//! Emits a synthetic UPS Billing Data export to stdout for exercising the
//! aggregation pipeline at volume.
//!
//! Usage: cargo run --example gen_invoice [shipments] > invoice.csv

use std::io::{stdout, BufWriter, Write};

use rand::RngExt;

const COLUMNS: usize = 176;
const INVOICE_NUMBER: &str = "92300999";

const SERVICES: &[(&str, &str)] = &[
    ("003", "TB Standard"),
    ("704", "WW Standard"),
    ("007", "WW Express Saver"),
];

const DESTINATIONS: &[(&str, &str, &str)] = &[
    ("Acme GmbH", "Berlin", "DE"),
    ("Bolt BV", "Amsterdam", "NL"),
    ("Carte SARL", "Lyon", "FR"),
    ("Dyne ApS", "Aarhus", "DK"),
];

fn main() -> std::io::Result<()> {
    let shipments: usize = std::env::args()
        .nth(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(100);

    let mut rng = rand::rng();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut invoice_cents: i64 = 0;

    for index in 0..shipments {
        let tracking = format!("1Z75A4036{:04}", index);
        let (service_code, service_name) = SERVICES[rng.random_range(0..SERVICES.len())];
        let (name, city, country) = DESTINATIONS[rng.random_range(0..DESTINATIONS.len())];

        let freight_cents = rng.random_range(300..5000);
        let fuel_cents = freight_cents * 15 / 100;
        invoice_cents += freight_cents + fuel_cents;

        let mut freight = blank_row();
        set_common(&mut freight, &tracking, service_code);
        freight[18] = "1".to_string();
        freight[26] = format!("{}.{}", rng.random_range(0..20), rng.random_range(0..10));
        freight[27] = "KG".to_string();
        freight[28] = format!("{}.0", rng.random_range(1..25));
        freight[29] = "KG".to_string();
        freight[30] = "PKG".to_string();
        freight[43] = "FRT".to_string();
        freight[44] = "011".to_string();
        freight[45] = service_name.to_string();
        freight[52] = cents(freight_cents);
        freight[74] = name.to_string();
        freight[78] = city.to_string();
        freight[81] = country.to_string();
        rows.push(freight);

        let mut fuel = blank_row();
        set_common(&mut fuel, &tracking, service_code);
        fuel[18] = "0".to_string();
        fuel[43] = "FSC".to_string();
        fuel[44] = "FSC".to_string();
        fuel[45] = "Fuel Surcharge".to_string();
        fuel[52] = cents(fuel_cents);
        rows.push(fuel);

        // Roughly one shipment in ten picks up a tax line.
        if rng.random_range(0..10) == 0 {
            let tax_cents = freight_cents * 19 / 100;
            invoice_cents += tax_cents;

            let mut tax = blank_row();
            set_common(&mut tax, &tracking, service_code);
            tax[18] = "0".to_string();
            tax[43] = "TAX".to_string();
            tax[45] = "Tax".to_string();
            tax[52] = cents(tax_cents);
            rows.push(tax);
        }
    }

    // Column 10 repeats the invoice grand total on every row; it is only
    // known once all charges are drawn.
    let invoice_total = cents(invoice_cents);
    let mut output = BufWriter::new(stdout().lock());

    for mut row in rows {
        row[10] = invoice_total.clone();
        writeln!(output, "{}", row.join(","))?;
    }

    output.flush()
}

fn blank_row() -> Vec<String> {
    vec![String::new(); COLUMNS]
}

fn set_common(row: &mut [String], tracking: &str, service_code: &str) {
    row[0] = "3".to_string();
    row[1] = "0000X1Y2Z3".to_string();
    row[3] = "DE".to_string();
    row[4] = "2025-06-07".to_string();
    row[5] = INVOICE_NUMBER.to_string();
    row[6] = "I".to_string();
    row[9] = "EUR".to_string();
    row[11] = "2025-06-02".to_string();
    row[20] = tracking.to_string();
    row[33] = service_code.to_string();
    row[34] = "SHP".to_string();
}

fn cents(value: i64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}
