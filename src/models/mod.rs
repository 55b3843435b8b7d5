mod charge_row;
mod errors;
mod shipment;

use serde::{Serialize, Serializer};

pub use charge_row::{Address, ChargeRow};
pub use errors::RowError;
pub use shipment::{ShipmentGroup, ShipmentSummary};

/// Package indicator (column 18). `1` marks the weight-bearing package line
/// of a shipment, `0` a charge-only line. `3` is a rare weight-bearing
/// variant seen on audited rows; it never qualifies as the canonical line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PackageIndicator {
    ChargeOnly,
    Package,
    PackageVariant,
    Unrecognized,
}

impl PackageIndicator {
    pub fn from_field(raw: &str) -> Self {
        match raw.trim() {
            "0" => Self::ChargeOnly,
            "1" => Self::Package,
            "3" => Self::PackageVariant,
            _ => Self::Unrecognized,
        }
    }
}

/// Charge category (column 43). Unknown codes are carried as-is rather than
/// rejected; exports occasionally surface categories such as `DAS` or `RES`
/// that the documented set does not cover.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ChargeCategory {
    Freight,
    FuelSurcharge,
    Accessorial,
    Tax,
    Brokerage,
    Government,
    Exemption,
    Informational,
    Miscellaneous,
    Other(String),
}

impl ChargeCategory {
    pub fn from_field(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FRT" => Self::Freight,
            "FSC" => Self::FuelSurcharge,
            "ACC" => Self::Accessorial,
            "TAX" => Self::Tax,
            "BRK" => Self::Brokerage,
            "GOV" => Self::Government,
            "EXM" => Self::Exemption,
            "INF" => Self::Informational,
            "MSC" => Self::Miscellaneous,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Freight => "FRT",
            Self::FuelSurcharge => "FSC",
            Self::Accessorial => "ACC",
            Self::Tax => "TAX",
            Self::Brokerage => "BRK",
            Self::Government => "GOV",
            Self::Exemption => "EXM",
            Self::Informational => "INF",
            Self::Miscellaneous => "MSC",
            Self::Other(code) => code,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Freight => "Freight",
            Self::FuelSurcharge => "Fuel Surcharge",
            Self::Accessorial => "Accessorial",
            Self::Tax => "Tax (VAT)",
            Self::Brokerage => "Brokerage",
            Self::Government => "Government Charges",
            Self::Exemption => "Exemption/Credit",
            Self::Informational => "Information Only",
            Self::Miscellaneous => "Miscellaneous",
            Self::Other(_) => "Other",
        }
    }
}

/// Shipment type (column 34): outbound shipment, return, adjustment or
/// miscellaneous fee. Drives which address block identifies the customer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShipmentType {
    Outbound,
    Return,
    Adjustment,
    Miscellaneous,
    Other(String),
    Unknown,
}

impl ShipmentType {
    pub fn from_field(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "" => Self::Unknown,
            "SHP" => Self::Outbound,
            "RTN" => Self::Return,
            "ADJ" => Self::Adjustment,
            "MIS" => Self::Miscellaneous,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Outbound => "SHP",
            Self::Return => "RTN",
            Self::Adjustment => "ADJ",
            Self::Miscellaneous => "MIS",
            Self::Other(code) => code,
            Self::Unknown => "",
        }
    }
}

impl Serialize for ShipmentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// Data-quality verdict for one aggregated shipment. Anomalies never abort
/// a run; they only downgrade the affected summary to `Low`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Normal,
    Low,
}
