//! Calculation session
//!
//! Caller-owned state for one settlement session: the last successfully
//! computed total and the most recently generated report. The original form
//! kept these as ambient UI state; here they live in an explicit object with
//! a defined lifecycle.

use chrono::NaiveDate;

use crate::error::RentResult;
use crate::models::{Amount, ChargeSheet};
use crate::normalize::{Normalizer, ParsePolicy};
use crate::report::Report;

/// Holds the computed total and the last generated report
///
/// The total only changes on a fully successful calculation; a failed batch
/// leaves the previous total in place for the caller to keep displaying.
#[derive(Debug, Default)]
pub struct CalcSession {
    normalizer: Normalizer,
    total: Option<Amount>,
    report: Option<Report>,
}

impl CalcSession {
    /// Create a session with the given parse policy
    pub fn new(policy: ParsePolicy) -> Self {
        Self {
            normalizer: Normalizer::new(policy),
            total: None,
            report: None,
        }
    }

    /// The parse policy in effect for this session
    pub fn policy(&self) -> ParsePolicy {
        self.normalizer.policy()
    }

    /// Validate and sum the sheet, updating the stored total on success
    ///
    /// On a validation failure the previous total (if any) is left untouched
    /// and the error is returned for the caller to surface.
    pub fn calculate(&mut self, sheet: &ChargeSheet) -> RentResult<Amount> {
        let total = self.normalizer.total(sheet)?;
        self.total = Some(total.clone());
        Ok(total)
    }

    /// The total from the last successful calculation, if any
    pub fn total(&self) -> Option<&Amount> {
        self.total.as_ref()
    }

    /// Build a report from the current raw sheet, replacing any previous one
    ///
    /// Rows use the raw text as currently entered; the total is the stored
    /// one (zero if nothing has been calculated yet). The sheet is not
    /// re-validated here, so rows and total may diverge after edits.
    pub fn generate(&mut self, sheet: &ChargeSheet, generated_on: NaiveDate) -> &Report {
        let total = self.total.clone().unwrap_or_else(Amount::zero);
        self.report.insert(Report::build(sheet, total, generated_on))
    }

    /// The most recently generated report, if any
    pub fn last_report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Clear the stored total and report for a fresh session
    pub fn reset(&mut self) {
        self.total = None;
        self.report = None;
    }
}
