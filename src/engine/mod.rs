mod breakdown;
mod invoice_engine;
mod reconcile;

pub use breakdown::CategoryTotal;
pub use invoice_engine::{EngineReport, InvoiceEngine};
pub use reconcile::InvoiceMismatch;
