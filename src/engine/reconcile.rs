use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::ChargeRow;
use crate::types::DecimalField;

/// Cross-checks the summed net amounts of every invoice against the
/// invoice-level total each row repeats in column 10. A deviation beyond
/// tolerance points at a parsing or grouping defect, not at bad billing, so
/// it is reported as a warning and never aborts the run.
pub struct Reconciler {
    invoices: HashMap<String, InvoiceTally>,
}

#[derive(Default)]
struct InvoiceTally {
    expected: Option<Decimal>,
    observed: Decimal,
    rows: usize,
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            invoices: HashMap::new(),
        }
    }

    pub fn observe(&mut self, row: &ChargeRow) {
        let Some(invoice_number) = row.invoice_number.as_deref() else {
            return;
        };

        let tally = self.invoices.entry(invoice_number.to_string()).or_default();
        tally.rows += 1;

        if tally.expected.is_none() {
            tally.expected = row.invoice_total;
        }

        if let DecimalField::Value(amount) = row.net_amount {
            tally.observed += amount;
        }
    }

    pub fn finish(self) -> Vec<InvoiceMismatch> {
        let floor = Decimal::new(5, 2);
        let per_row = Decimal::new(1, 2);
        let mut mismatches = Vec::new();

        for (invoice_number, tally) in self.invoices {
            let Some(expected) = tally.expected else {
                continue;
            };

            let tolerance = (per_row * Decimal::from(tally.rows)).max(floor);
            let deviation = (tally.observed - expected).abs();

            if deviation > tolerance {
                mismatches.push(InvoiceMismatch {
                    invoice_number,
                    expected,
                    observed: tally.observed,
                    tolerance,
                });
            }
        }

        mismatches.sort_by(|a, b| a.invoice_number.cmp(&b.invoice_number));
        mismatches
    }
}

/// One invoice whose summed charges deviate from its stated total.
#[derive(Debug, Clone)]
pub struct InvoiceMismatch {
    pub invoice_number: String,
    pub expected: Decimal,
    pub observed: Decimal,
    pub tolerance: Decimal,
}
