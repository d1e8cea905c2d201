//! Input normalization and summation
//!
//! Converts the raw text of a charge sheet into validated non-negative
//! amounts and sums them into a total. Validation is all-or-nothing: if any
//! of the six fields is rejected, the whole batch fails and no total is
//! produced.
//!
//! Two parse policies exist. `Truncate` (the default) textually cuts the
//! input to at most two fractional digits before parsing, so "10.999" counts
//! as 10.99. `Loose` parses the text exactly as typed, with no truncation.
//! Under either policy an empty field counts as zero, while unparseable or
//! negative input fails the batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RentError, RentResult};
use crate::models::{Amount, ChargeCategory, ChargeSheet};

/// How raw charge text is turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Textually truncate to two fractional digits before parsing
    #[default]
    Truncate,
    /// Parse the text as-is, keeping all fractional digits
    Loose,
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePolicy::Truncate => write!(f, "truncate"),
            ParsePolicy::Loose => write!(f, "loose"),
        }
    }
}

impl FromStr for ParsePolicy {
    type Err = RentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(ParsePolicy::Truncate),
            "loose" => Ok(ParsePolicy::Loose),
            other => Err(RentError::Config(format!(
                "Unknown parse policy '{}' (expected 'truncate' or 'loose')",
                other
            ))),
        }
    }
}

/// Normalizes raw charge text into amounts under a fixed policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    policy: ParsePolicy,
}

impl Normalizer {
    /// Create a normalizer with the given policy
    pub fn new(policy: ParsePolicy) -> Self {
        Self { policy }
    }

    /// The policy this normalizer applies
    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Normalize a single field
    ///
    /// Empty or blank input is zero. Anything unparseable under the policy,
    /// or parseable but negative, is rejected with the offending category
    /// named in the error.
    pub fn normalize(&self, category: ChargeCategory, raw: &str) -> RentResult<Amount> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Amount::zero());
        }

        let amount = match self.policy {
            ParsePolicy::Truncate => {
                let (negative, body) = match raw.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, raw),
                };
                let prefix = two_decimal_prefix(body);
                if prefix.is_empty() {
                    return Err(RentError::invalid_amount(category.label(), raw));
                }
                if negative {
                    return Err(RentError::negative_amount(category.label(), raw));
                }
                Amount::parse(prefix)
                    .map_err(|_| RentError::invalid_amount(category.label(), raw))?
            }
            ParsePolicy::Loose => Amount::parse(raw)
                .map_err(|_| RentError::invalid_amount(category.label(), raw))?,
        };

        if amount.is_negative() {
            return Err(RentError::negative_amount(category.label(), raw));
        }
        Ok(amount)
    }

    /// Normalize all six fields of a sheet and sum them, in canonical order
    ///
    /// All-or-nothing: the first rejected field fails the whole batch and no
    /// partial total is returned.
    pub fn total(&self, sheet: &ChargeSheet) -> RentResult<Amount> {
        let mut amounts = Vec::with_capacity(ChargeCategory::ALL.len());
        for category in ChargeCategory::ALL {
            amounts.push(self.normalize(category, sheet.get(category))?);
        }
        Ok(amounts.into_iter().sum())
    }
}

/// Longest leading prefix of the form `digits [ '.' up-to-two-digits ]`
///
/// Mirrors the truncation the settlement form applied before parsing:
/// everything after the second fractional digit (or the first character that
/// breaks the pattern) is dropped.
fn two_decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let mut frac = 0;
        while end < bytes.len() && frac < 2 && bytes[end].is_ascii_digit() {
            end += 1;
            frac += 1;
        }
    }
    &s[..end]
}
