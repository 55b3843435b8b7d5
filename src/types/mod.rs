mod decimal_field;

pub use decimal_field::DecimalField;

/// Key a shipment's charge lines are grouped under. Normally the tracking
/// number; untracked miscellaneous rows get a synthetic `invoice#ordinal` key.
pub type GroupKey = String;
