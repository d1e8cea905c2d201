//! Amount type for representing monetary values
//!
//! Internally stores amounts as exact decimals (BigDecimal) so that money
//! never passes through binary floating point. The loose parse policy keeps
//! whatever fractional digits the user typed, so a fixed-scale integer
//! representation is not enough here.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// An exact decimal monetary amount
///
/// # Examples
/// ```
/// use rentcalc::models::Amount;
/// let amount = Amount::parse("10.50").unwrap();
/// assert!(!amount.is_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(BigDecimal);

impl Amount {
    /// Create a zero Amount
    pub fn zero() -> Self {
        Self(BigDecimal::from(0))
    }

    /// Create an Amount from whole units and hundredths
    ///
    /// # Examples
    /// ```
    /// use rentcalc::models::Amount;
    /// let amount = Amount::from_units_hundredths(10, 50); // 10.50
    /// assert_eq!(amount.to_string(), "10.5");
    /// ```
    pub fn from_units_hundredths(units: i64, hundredths: i64) -> Self {
        Self(BigDecimal::new((units * 100 + hundredths).into(), 2))
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::from(0)
    }

    /// Parse an amount from decimal text, exactly
    ///
    /// Accepts formats: "10.50", "10", ".5", "5.", "-10.50". No truncation or
    /// rounding is applied; policy-specific handling lives in the normalizer.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        // BigDecimal rejects a bare leading or trailing decimal point
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s),
        };
        if digits == "." {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }
        let padded = if let Some(rest) = digits.strip_prefix('.') {
            format!("{}0.{}", sign, rest)
        } else if let Some(rest) = digits.strip_suffix('.') {
            format!("{}{}", sign, rest)
        } else {
            format!("{}{}", sign, digits)
        };

        BigDecimal::from_str(&padded)
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }

    /// Format with a trailing currency label, e.g. "1760.45 zl"
    pub fn format_with_label(&self, label: &str) -> String {
        format!("{} {}", self, label)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Minimal decimal text: "0", "1760.45", never "0E-2"
        write!(f, "{}", self.0.normalized())
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().to_string(), "10.5");
        assert_eq!(Amount::parse("10").unwrap().to_string(), "10");
        assert_eq!(Amount::parse(".5").unwrap().to_string(), "0.5");
        assert_eq!(Amount::parse("5.").unwrap().to_string(), "5");
        assert_eq!(Amount::parse("30.456").unwrap().to_string(), "30.456");
        assert_eq!(Amount::parse(" 12 ").unwrap().to_string(), "12");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("12abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse(".").is_err());
    }

    #[test]
    fn test_parse_negative() {
        let amount = Amount::parse("-10.50").unwrap();
        assert!(amount.is_negative());
        assert_eq!(amount.to_string(), "-10.5");
        assert_eq!(Amount::parse("-.5").unwrap().to_string(), "-0.5");
    }

    #[test]
    fn test_display_is_minimal() {
        assert_eq!(Amount::zero().to_string(), "0");
        assert_eq!(Amount::from_units_hundredths(1760, 45).to_string(), "1760.45");
        assert_eq!(Amount::from_units_hundredths(100, 0).to_string(), "100");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::parse("10.99").unwrap();
        let b = Amount::parse("0.01").unwrap();
        assert_eq!((a + b).to_string(), "11");

        let mut c = Amount::zero();
        c += Amount::parse("30.45").unwrap();
        assert_eq!(c.to_string(), "30.45");
    }

    #[test]
    fn test_sum_is_exact() {
        let amounts = vec![
            Amount::parse("0.1").unwrap(),
            Amount::parse("0.2").unwrap(),
            Amount::parse("0.3").unwrap(),
        ];
        let total: Amount = amounts.into_iter().sum();
        // 0.1 + 0.2 is exactly 0.3 here, unlike f64
        assert_eq!(total.to_string(), "0.6");
    }

    #[test]
    fn test_comparison_is_numeric() {
        assert_eq!(
            Amount::parse("10.50").unwrap(),
            Amount::parse("10.5").unwrap()
        );
        assert!(Amount::parse("10.5").unwrap() > Amount::parse("2").unwrap());
    }

    #[test]
    fn test_format_with_label() {
        let total = Amount::from_units_hundredths(1760, 45);
        assert_eq!(total.format_with_label("zl"), "1760.45 zl");
    }

    #[test]
    fn test_serialization() {
        let a = Amount::parse("10.50").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let deserialized: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, deserialized);
    }
}
