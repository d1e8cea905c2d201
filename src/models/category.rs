//! Charge categories
//!
//! The six fixed monetary line items of a rent settlement. The set is closed
//! and the order is part of the contract: calculation, terminal display, and
//! the PDF statement all walk `ChargeCategory::ALL` in the same order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed charge categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeCategory {
    Rent,
    AdministrationFee,
    MediaSettlement,
    ElectricityAdvance,
    ElectricityInvoice,
    TvInternet,
}

impl ChargeCategory {
    /// All categories in canonical order
    pub const ALL: [ChargeCategory; 6] = [
        ChargeCategory::Rent,
        ChargeCategory::AdministrationFee,
        ChargeCategory::MediaSettlement,
        ChargeCategory::ElectricityAdvance,
        ChargeCategory::ElectricityInvoice,
        ChargeCategory::TvInternet,
    ];

    /// Human-readable label used for table rows
    pub const fn label(&self) -> &'static str {
        match self {
            ChargeCategory::Rent => "Rent",
            ChargeCategory::AdministrationFee => "Administration Fee",
            ChargeCategory::MediaSettlement => "Periodic Media Settlement",
            ChargeCategory::ElectricityAdvance => "Advance Payment for Electricity",
            ChargeCategory::ElectricityInvoice => "Electricity Invoice",
            ChargeCategory::TvInternet => "TV/Internet",
        }
    }

    /// Position in the canonical order (0-5)
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ChargeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_six_fixed_entries() {
        assert_eq!(ChargeCategory::ALL.len(), 6);
        assert_eq!(ChargeCategory::ALL[0], ChargeCategory::Rent);
        assert_eq!(ChargeCategory::ALL[5], ChargeCategory::TvInternet);
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, category) in ChargeCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ChargeCategory::Rent.label(), "Rent");
        assert_eq!(
            ChargeCategory::ElectricityAdvance.to_string(),
            "Advance Payment for Electricity"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&ChargeCategory::TvInternet).unwrap();
        assert_eq!(json, "\"tv-internet\"");
        let back: ChargeCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChargeCategory::TvInternet);
    }
}
