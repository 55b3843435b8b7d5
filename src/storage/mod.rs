mod summary_storage;

use crate::models::ShipmentSummary;
use crate::types::GroupKey;

pub use summary_storage::SummaryStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, key: &str) -> Option<ShipmentSummary>;
    fn save(&self, key: GroupKey, summary: ShipmentSummary);
}
