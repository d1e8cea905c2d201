//! Core data models for rentcalc
//!
//! This module contains the data structures that represent the settlement
//! domain: monetary amounts, the fixed charge categories, and the raw
//! charge sheet.

pub mod amount;
pub mod category;
pub mod sheet;

pub use amount::{Amount, AmountParseError};
pub use category::ChargeCategory;
pub use sheet::ChargeSheet;
