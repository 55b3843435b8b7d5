use rust_decimal::Decimal;
use std::str::FromStr;

/// A numeric field (amount or weight) as it appears in a billing export.
///
/// UPS exports leave most numeric columns blank on rows where they do not
/// apply, so an empty field is ordinary and must stay distinct from a field
/// holding unparseable text: blanks contribute nothing to a sum, while
/// malformed values taint the owning group's confidence.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecimalField {
    Empty,
    Value(Decimal),
    Malformed,
}

impl DecimalField {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.is_empty() {
            return Self::Empty;
        }

        match Decimal::from_str(raw) {
            Ok(value) => Self::Value(value),
            Err(_) => Self::Malformed,
        }
    }

    pub fn value(self) -> Option<Decimal> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_malformed(self) -> bool {
        matches!(self, Self::Malformed)
    }
}
