//! Charge sheet
//!
//! Raw user input for one settlement: an address plus one free-form text
//! value per charge category. Values stay exactly as entered; normalization
//! and validation happen in the `normalize` module, and reports deliberately
//! render the raw text rather than the normalized amounts.

use serde::{Deserialize, Serialize};

use super::category::ChargeCategory;

/// Raw text input for all six charge categories plus the address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSheet {
    address: String,
    values: [String; 6],
}

impl ChargeSheet {
    /// Create an empty charge sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw value for a category
    pub fn set(&mut self, category: ChargeCategory, value: impl Into<String>) {
        self.values[category.index()] = value.into();
    }

    /// Get the raw value for a category, exactly as entered
    pub fn get(&self, category: ChargeCategory) -> &str {
        &self.values[category.index()]
    }

    /// Get the raw value for display, falling back to the literal "0"
    /// when the field is empty or blank
    pub fn raw_or_zero(&self, category: ChargeCategory) -> &str {
        let raw = self.get(category);
        if raw.trim().is_empty() {
            "0"
        } else {
            raw
        }
    }

    /// Set the address
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Get the address, exactly as entered
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet() {
        let sheet = ChargeSheet::new();
        for category in ChargeCategory::ALL {
            assert_eq!(sheet.get(category), "");
            assert_eq!(sheet.raw_or_zero(category), "0");
        }
        assert_eq!(sheet.address(), "");
    }

    #[test]
    fn test_set_get() {
        let mut sheet = ChargeSheet::new();
        sheet.set(ChargeCategory::Rent, "1500");
        sheet.set(ChargeCategory::ElectricityInvoice, "30.456");

        assert_eq!(sheet.get(ChargeCategory::Rent), "1500");
        assert_eq!(sheet.get(ChargeCategory::ElectricityInvoice), "30.456");
        assert_eq!(sheet.get(ChargeCategory::TvInternet), "");
    }

    #[test]
    fn test_raw_or_zero_keeps_raw_text() {
        let mut sheet = ChargeSheet::new();
        sheet.set(ChargeCategory::Rent, "30.456");
        sheet.set(ChargeCategory::TvInternet, "   ");

        // Raw text survives even when it differs from the normalized amount
        assert_eq!(sheet.raw_or_zero(ChargeCategory::Rent), "30.456");
        assert_eq!(sheet.raw_or_zero(ChargeCategory::TvInternet), "0");
    }

    #[test]
    fn test_address() {
        let mut sheet = ChargeSheet::new();
        sheet.set_address("Main Street 5");
        assert_eq!(sheet.address(), "Main Street 5");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut sheet = ChargeSheet::new();
        sheet.set_address("Main Street 5");
        sheet.set(ChargeCategory::AdministrationFee, "50");

        let json = serde_json::to_string(&sheet).unwrap();
        let back: ChargeSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
