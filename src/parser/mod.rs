pub mod columns;
#[cfg(test)]
mod tests;

use csv::ByteRecord;
use rust_decimal::Decimal;

use crate::models::{
    Address, ChargeCategory, ChargeRow, PackageIndicator, RowError, ShipmentType,
};
use crate::types::DecimalField;

use self::columns as col;

/// Projects one raw positional record into a typed [`ChargeRow`].
///
/// Records must at least reach the net amount column; trailing columns past
/// the documented subset are tolerated and ignored, missing optional trailing
/// columns become `None`. Fields are decoded lossily since real exports are
/// often latin-1 rather than UTF-8.
pub fn project(record: &ByteRecord, ordinal: usize) -> Result<ChargeRow, RowError> {
    if record.len() <= col::NET_AMOUNT {
        return Err(RowError::Truncated { ordinal, columns: record.len() });
    }

    Ok(ChargeRow {
        ordinal,
        version: field(record, col::VERSION),
        account_number: field(record, col::ACCOUNT_NUMBER),
        shipper_number: field(record, col::SHIPPER_NUMBER),
        country_code: field(record, col::COUNTRY_CODE),
        invoice_date: field(record, col::INVOICE_DATE),
        invoice_number: field(record, col::INVOICE_NUMBER),
        invoice_type: field(record, col::INVOICE_TYPE),
        invoice_type_detail: field(record, col::INVOICE_TYPE_DETAIL),
        vat_number: field(record, col::VAT_NUMBER),
        currency: field(record, col::CURRENCY),
        invoice_total: decimal(record, col::INVOICE_TOTAL),
        shipment_date: field(record, col::SHIPMENT_DATE),
        reference_1: field(record, col::REFERENCE_1),
        order_reference: field(record, col::ORDER_REFERENCE),
        payment_terms: field(record, col::PAYMENT_TERMS),
        package_indicator: PackageIndicator::from_field(
            field(record, col::PACKAGE_INDICATOR).as_deref().unwrap_or(""),
        ),
        tracking_number: field(record, col::TRACKING_NUMBER),
        actual_weight: decimal(record, col::ACTUAL_WEIGHT),
        actual_weight_unit: field(record, col::ACTUAL_WEIGHT_UNIT),
        billed_weight: decimal(record, col::BILLED_WEIGHT),
        billed_weight_unit: field(record, col::BILLED_WEIGHT_UNIT),
        package_type: field(record, col::PACKAGE_TYPE),
        zone: field(record, col::ZONE),
        service_code: field(record, col::SERVICE_CODE),
        shipment_type: ShipmentType::from_field(
            field(record, col::SHIPMENT_TYPE).as_deref().unwrap_or(""),
        ),
        shipment_subtype: field(record, col::SHIPMENT_SUBTYPE),
        charge_category: ChargeCategory::from_field(
            field(record, col::CHARGE_CATEGORY).as_deref().unwrap_or(""),
        ),
        charge_code: field(record, col::CHARGE_CODE),
        charge_description: field(record, col::CHARGE_DESCRIPTION),
        discount_amount: decimal(record, col::DISCOUNT_AMOUNT),
        net_amount: match field(record, col::NET_AMOUNT) {
            Some(raw) => DecimalField::parse(&raw),
            None => DecimalField::Empty,
        },
        sender: Address {
            name: field(record, col::SENDER_NAME),
            company: None,
            street: field(record, col::SENDER_STREET),
            city: field(record, col::SENDER_CITY),
            postal: field(record, col::SENDER_POSTAL),
            country: field(record, col::SENDER_COUNTRY),
        },
        recipient: Address {
            name: field(record, col::RECIPIENT_NAME),
            company: field(record, col::RECIPIENT_COMPANY),
            street: field(record, col::RECIPIENT_STREET),
            city: field(record, col::RECIPIENT_CITY),
            postal: field(record, col::RECIPIENT_POSTAL),
            country: field(record, col::RECIPIENT_COUNTRY),
        },
        pickup_date: field(record, col::PICKUP_DATE),
        delivery_date: field(record, col::DELIVERY_DATE),
        declared_value: decimal(record, col::DECLARED_VALUE),
        goods_description: field(record, col::GOODS_DESCRIPTION),
        entered_weight_note: field(record, col::ENTERED_WEIGHT_NOTE),
        audited_weight_note: field(record, col::AUDITED_WEIGHT_NOTE),
    })
}

fn field(record: &ByteRecord, index: usize) -> Option<String> {
    let raw = record.get(index)?;
    let text = String::from_utf8_lossy(raw);
    let text = text.trim();

    if text.is_empty() { None } else { Some(text.to_string()) }
}

fn decimal(record: &ByteRecord, index: usize) -> Option<Decimal> {
    field(record, index).and_then(|raw| DecimalField::parse(&raw).value())
}
