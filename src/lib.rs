//! rentcalc - Command-line rent settlement calculator
//!
//! This library provides the core functionality for rentcalc: six fixed
//! monetary charge categories are collected as raw text, normalized and
//! summed into a total, and rendered into a PDF statement with a suggested
//! file name derived from the address and date.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, the charge sheet)
//! - `normalize`: Parse policies, validation, and summation
//! - `session`: Caller-owned calculation state
//! - `report`: Statement building and PDF rendering
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```
//! use rentcalc::models::{ChargeCategory, ChargeSheet};
//! use rentcalc::normalize::ParsePolicy;
//! use rentcalc::session::CalcSession;
//!
//! let mut sheet = ChargeSheet::new();
//! sheet.set(ChargeCategory::Rent, "1500");
//! sheet.set(ChargeCategory::ElectricityInvoice, "30.456");
//!
//! let mut session = CalcSession::new(ParsePolicy::Truncate);
//! let total = session.calculate(&sheet).unwrap();
//! assert_eq!(total.to_string(), "1530.45");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
pub mod session;

pub use error::{RentError, RentResult};
pub use session::CalcSession;
