use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ChargeRow, Confidence, ShipmentType};
use crate::types::{DecimalField, GroupKey};

/// Streaming accumulator for all charge lines sharing one grouping key.
///
/// Rows may arrive in any order; the canonical freight row is whichever
/// qualifying row is seen first in input order. Data-quality problems are
/// collected as anomaly notes and surface on the finished summary instead of
/// failing the group.
#[derive(Debug)]
pub struct ShipmentGroup {
    key: GroupKey,
    charge_lines: usize,
    total_cost: Decimal,
    canonical: Option<Box<ChargeRow>>,
    fallback: Option<Box<ChargeRow>>,
    anomalies: Vec<String>,
    mixed_types: bool,
    extra_canonical: bool,
}

impl ShipmentGroup {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            charge_lines: 0,
            total_cost: Decimal::ZERO,
            canonical: None,
            fallback: None,
            anomalies: Vec::new(),
            mixed_types: false,
            extra_canonical: false,
        }
    }

    /// Folds one charge line into the group.
    pub fn push(&mut self, row: ChargeRow) {
        self.charge_lines += 1;

        match row.net_amount {
            DecimalField::Value(amount) => self.total_cost += amount,
            DecimalField::Empty => {}
            DecimalField::Malformed => {
                self.anomalies.push(format!("unreadable net amount on input row {}", row.ordinal));
            }
        }

        if let Some(reference) = self.canonical.as_deref().or(self.fallback.as_deref()) {
            if row.shipment_type != reference.shipment_type && !self.mixed_types {
                self.mixed_types = true;
                self.anomalies.push("inconsistent shipment type within group".to_string());
            }
        }

        if row.is_canonical() {
            if self.canonical.is_none() {
                self.canonical = Some(Box::new(row));
                return;
            }

            //NOTE: One shipment per tracking number should make this impossible, but exports
            //      are messy enough that the first qualifying row wins and the group is flagged.
            if !self.extra_canonical {
                self.extra_canonical = true;
                self.anomalies.push("multiple canonical freight rows, first kept".to_string());
            }
            return;
        }

        if self.fallback.is_none() {
            self.fallback = Some(Box::new(row));
        }
    }

    /// Finishes the group into its summary record.
    pub fn finish(mut self) -> ShipmentSummary {
        if self.canonical.is_none() {
            self.anomalies.insert(0, "no canonical freight row in group".to_string());
        }

        let base = self.canonical.as_deref().or(self.fallback.as_deref());
        let shipment_type = base
            .map(|row| row.shipment_type.clone())
            .unwrap_or(ShipmentType::Unknown);

        let (customer_name, customer_country) = match (&shipment_type, base) {
            (_, None) => (None, None),
            (ShipmentType::Outbound, Some(row)) => {
                (row.recipient.name.clone(), row.recipient.country.clone())
            }
            (ShipmentType::Return, Some(row)) => {
                (row.sender.name.clone(), row.sender.country.clone())
            }
            (other, Some(row)) => {
                let label = if other.code().is_empty() { "unknown" } else { other.code() };
                self.anomalies
                    .push(format!("address fields are unreliable for shipment type [{label}]"));
                (row.recipient.name.clone(), row.recipient.country.clone())
            }
        };

        let service_name = self.canonical.as_deref().and_then(|row| row.charge_description.clone());
        let actual_weight = self.canonical.as_deref().and_then(|row| row.actual_weight);
        let billed_weight = self.canonical.as_deref().and_then(|row| row.billed_weight);
        let invoice_number = base.and_then(|row| row.invoice_number.clone());

        let confidence = if self.anomalies.is_empty() { Confidence::Normal } else { Confidence::Low };
        let notes = if self.anomalies.is_empty() { None } else { Some(self.anomalies.join("; ")) };

        ShipmentSummary {
            tracking_number: self.key,
            invoice_number,
            shipment_type,
            service_name,
            actual_weight,
            billed_weight,
            customer_name,
            customer_country,
            total_cost: self.total_cost,
            charge_lines: self.charge_lines,
            confidence,
            notes,
        }
    }
}

/// Aggregated view of one shipment, one record per grouping key.
///
/// The service name is always sourced from the canonical freight row's
/// charge description; the service-code table is many-to-one and route
/// dependent, so it is never consulted.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentSummary {
    pub tracking_number: GroupKey,
    pub invoice_number: Option<String>,
    pub shipment_type: ShipmentType,
    pub service_name: Option<String>,
    pub actual_weight: Option<Decimal>,
    pub billed_weight: Option<Decimal>,
    pub customer_name: Option<String>,
    pub customer_country: Option<String>,
    pub total_cost: Decimal,
    pub charge_lines: usize,
    pub confidence: Confidence,
    pub notes: Option<String>,
}
