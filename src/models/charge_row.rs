use rust_decimal::Decimal;

use crate::models::{ChargeCategory, PackageIndicator, ShipmentType};
use crate::types::DecimalField;

/// One address block from a billing row. The sender occupies columns 67-73,
/// the recipient columns 74-81; only the documented columns are projected.
#[derive(Debug, Clone, Default)]
pub struct Address {
    pub name: Option<String>,
    pub company: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
}

/// One charge line of a UPS Billing Data export, projected from the raw
/// positional record into named, typed fields at parse time.
///
/// A shipment is spread over several of these rows: one weight-bearing
/// package line plus any number of charge-only lines sharing the tracking
/// number. Rows are immutable once parsed.
///
/// Fields the export format leaves undocumented or ambiguous
/// (`invoice_type_detail`, `charge_code`, `reference_1`, `zone`, the two
/// weight notes) are carried as opaque optional strings and given no
/// semantics here.
#[derive(Debug, Clone)]
pub struct ChargeRow {
    /// 0-based index of the row in its source file, assigned by the reader.
    pub ordinal: usize,
    pub version: Option<String>,
    pub account_number: Option<String>,
    pub shipper_number: Option<String>,
    pub country_code: Option<String>,
    pub invoice_date: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_type: Option<String>,
    pub invoice_type_detail: Option<String>,
    pub vat_number: Option<String>,
    pub currency: Option<String>,
    /// Invoice-level grand total, repeated on every row of the invoice.
    /// Only used for reconciliation, never for per-shipment aggregation.
    pub invoice_total: Option<Decimal>,
    pub shipment_date: Option<String>,
    pub reference_1: Option<String>,
    pub order_reference: Option<String>,
    pub payment_terms: Option<String>,
    pub package_indicator: PackageIndicator,
    /// Grouping key. Empty for miscellaneous service fees not tied to a
    /// shipment.
    pub tracking_number: Option<String>,
    pub actual_weight: Option<Decimal>,
    pub actual_weight_unit: Option<String>,
    pub billed_weight: Option<Decimal>,
    pub billed_weight_unit: Option<String>,
    pub package_type: Option<String>,
    pub zone: Option<String>,
    pub service_code: Option<String>,
    pub shipment_type: ShipmentType,
    pub shipment_subtype: Option<String>,
    pub charge_category: ChargeCategory,
    pub charge_code: Option<String>,
    pub charge_description: Option<String>,
    /// Informational only: already reflected in `net_amount`, never summed.
    pub discount_amount: Option<Decimal>,
    pub net_amount: DecimalField,
    pub sender: Address,
    pub recipient: Address,
    pub pickup_date: Option<String>,
    pub delivery_date: Option<String>,
    pub declared_value: Option<Decimal>,
    pub goods_description: Option<String>,
    pub entered_weight_note: Option<String>,
    pub audited_weight_note: Option<String>,
}

impl ChargeRow {
    /// Whether this row is the canonical line of its shipment: the one row
    /// carrying authoritative weight and service-name data.
    pub fn is_canonical(&self) -> bool {
        self.package_indicator == PackageIndicator::Package
            && self.charge_category == ChargeCategory::Freight
    }
}
