use super::{columns as col, project};

use std::str::FromStr;

use anyhow::Result;
use csv::ByteRecord;
use rust_decimal::Decimal;

use crate::models::{ChargeCategory, PackageIndicator, RowError, ShipmentType};
use crate::types::DecimalField;

const RECORD_WIDTH: usize = 176;

fn record_with(fields: &[(usize, &str)]) -> ByteRecord {
    let mut cells = vec![String::new(); RECORD_WIDTH];

    for (index, value) in fields {
        cells[*index] = (*value).to_string();
    }

    ByteRecord::from(cells)
}

#[test]
fn test_projection_maps_documented_columns_to_named_fields() -> Result<()> {
    let record = record_with(&[
        (col::INVOICE_NUMBER, "92300514"),
        (col::CURRENCY, "EUR"),
        (col::INVOICE_TOTAL, "15.76"),
        (col::PACKAGE_INDICATOR, "1"),
        (col::TRACKING_NUMBER, "1Z75A40368821"),
        (col::ACTUAL_WEIGHT, "1.2"),
        (col::ACTUAL_WEIGHT_UNIT, "KG"),
        (col::BILLED_WEIGHT, "2.0"),
        (col::SERVICE_CODE, "704"),
        (col::SHIPMENT_TYPE, "SHP"),
        (col::CHARGE_CATEGORY, "FRT"),
        (col::CHARGE_DESCRIPTION, "WW Standard"),
        (col::DISCOUNT_AMOUNT, "-1.20"),
        (col::NET_AMOUNT, "5.10"),
        (col::SENDER_COUNTRY, "DE"),
        (col::RECIPIENT_NAME, "Acme GmbH"),
        (col::RECIPIENT_COUNTRY, "DE"),
    ]);

    let row = project(&record, 7)?;

    assert_eq!(row.ordinal, 7);
    assert_eq!(row.invoice_number.as_deref(), Some("92300514"));
    assert_eq!(row.currency.as_deref(), Some("EUR"));
    assert_eq!(row.invoice_total, Some(Decimal::from_str("15.76")?));
    assert_eq!(row.package_indicator, PackageIndicator::Package);
    assert_eq!(row.tracking_number.as_deref(), Some("1Z75A40368821"));
    assert_eq!(row.actual_weight, Some(Decimal::from_str("1.2")?));
    assert_eq!(row.actual_weight_unit.as_deref(), Some("KG"));
    assert_eq!(row.service_code.as_deref(), Some("704"));
    assert_eq!(row.shipment_type, ShipmentType::Outbound);
    assert_eq!(row.charge_category, ChargeCategory::Freight);
    assert_eq!(row.charge_description.as_deref(), Some("WW Standard"));
    assert_eq!(row.discount_amount, Some(Decimal::from_str("-1.20")?));
    assert_eq!(row.net_amount, DecimalField::Value(Decimal::from_str("5.10")?));
    assert_eq!(row.sender.country.as_deref(), Some("DE"));
    assert_eq!(row.recipient.name.as_deref(), Some("Acme GmbH"));
    assert!(row.is_canonical());

    Ok(())
}

#[test]
fn test_truncated_record_is_rejected() {
    let record = ByteRecord::from(vec!["3"; 10]);

    let result = project(&record, 0);

    assert!(matches!(result, Err(RowError::Truncated { ordinal: 0, columns: 10 })));
}

#[test]
fn test_record_missing_trailing_columns_still_projects() -> Result<()> {
    // Net amount present but nothing past it: address and note columns absent.
    let mut cells = vec![String::new(); col::NET_AMOUNT + 1];
    cells[col::TRACKING_NUMBER] = "1Z1".to_string();
    cells[col::NET_AMOUNT] = "2.50".to_string();

    let row = project(&ByteRecord::from(cells), 0)?;

    assert_eq!(row.tracking_number.as_deref(), Some("1Z1"));
    assert_eq!(row.net_amount.value(), Some(Decimal::from_str("2.50")?));
    assert!(row.sender.name.is_none());
    assert!(row.entered_weight_note.is_none());

    Ok(())
}

#[test]
fn test_blank_fields_project_to_none_and_empty() -> Result<()> {
    let record = record_with(&[(col::TRACKING_NUMBER, "  "), (col::NET_AMOUNT, "")]);

    let row = project(&record, 0)?;

    assert!(row.tracking_number.is_none());
    assert_eq!(row.net_amount, DecimalField::Empty);
    assert_eq!(row.shipment_type, ShipmentType::Unknown);
    assert_eq!(row.package_indicator, PackageIndicator::Unrecognized);

    Ok(())
}

#[test]
fn test_non_utf8_bytes_are_decoded_lossily_instead_of_failing() -> Result<()> {
    let mut cells: Vec<Vec<u8>> = vec![Vec::new(); RECORD_WIDTH];
    // "Müller" in latin-1: 0xFC is not valid UTF-8.
    cells[col::RECIPIENT_NAME] = vec![b'M', 0xFC, b'l', b'l', b'e', b'r'];
    cells[col::NET_AMOUNT] = b"1.00".to_vec();

    let row = project(&ByteRecord::from(cells), 0)?;

    let name = row.recipient.name.unwrap_or_default();
    assert!(name.starts_with('M') && name.ends_with("ller"));
    assert_eq!(row.net_amount.value(), Some(Decimal::from_str("1.00")?));

    Ok(())
}

#[test]
fn test_malformed_net_amount_survives_projection_as_malformed() -> Result<()> {
    let record = record_with(&[(col::TRACKING_NUMBER, "1Z1"), (col::NET_AMOUNT, "--")]);

    let row = project(&record, 0)?;

    assert!(row.net_amount.is_malformed());

    Ok(())
}
