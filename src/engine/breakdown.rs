use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{ChargeCategory, ChargeRow};
use crate::types::DecimalField;

/// Running cost breakdown by charge category across the whole run: summed
/// net amounts, summed discounts, line count and distinct shipment count.
pub struct CategoryBreakdown {
    totals: HashMap<ChargeCategory, Tally>,
}

#[derive(Default)]
struct Tally {
    net_amount: Decimal,
    discount_amount: Decimal,
    charge_lines: usize,
    shipments: HashSet<String>,
}

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self {
            totals: HashMap::new(),
        }
    }

    pub fn observe(&mut self, row: &ChargeRow) {
        let tally = self.totals.entry(row.charge_category.clone()).or_default();
        tally.charge_lines += 1;

        if let DecimalField::Value(amount) = row.net_amount {
            tally.net_amount += amount;
        }

        if let Some(discount) = row.discount_amount {
            tally.discount_amount += discount;
        }

        if let Some(tracking) = row.tracking_number.as_deref() {
            tally.shipments.insert(tracking.to_string());
        }
    }

    pub fn finish(self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = self
            .totals
            .into_iter()
            .map(|(category, tally)| CategoryTotal {
                category,
                net_amount: tally.net_amount,
                discount_amount: tally.discount_amount,
                charge_lines: tally.charge_lines,
                shipments: tally.shipments.len(),
            })
            .collect();

        totals.sort_by(|a, b| b.net_amount.cmp(&a.net_amount));
        totals
    }
}

#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: ChargeCategory,
    pub net_amount: Decimal,
    pub discount_amount: Decimal,
    pub charge_lines: usize,
    pub shipments: usize,
}
