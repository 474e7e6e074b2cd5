use super::fields::{parse_f64, parse_i64};
use crate::error::{RecordError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positional fields `createBusiness` expects after the key.
pub const BUSINESS_FIELD_COUNT: usize = 10;

/// Metadata for a business that borrows against a credit limit.
///
/// The store key (`businessID`) lives outside the record.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct BusinessRecord {
    #[serde(rename = "BusinessName")]
    pub name: String,
    #[serde(rename = "BusinessAcNo")]
    pub account_number: String,
    #[serde(rename = "BusinessLimit")]
    pub limit: i64,
    /// Hash reference to the main wallet.
    #[serde(rename = "BusinessWalletID")]
    pub wallet_id: String,
    #[serde(rename = "BusinessLoanWalletID")]
    pub loan_wallet_id: String,
    #[serde(rename = "BusinessLiabilityWalletID")]
    pub liability_wallet_id: String,
    #[serde(rename = "MaxROI")]
    pub max_roi: f64,
    /// Not checked against `max_roi`.
    #[serde(rename = "MinROI")]
    pub min_roi: f64,
    #[serde(rename = "NumberOfPrograms")]
    pub number_of_programs: i64,
    #[serde(rename = "BusinessExposure")]
    pub exposure: i64,
}

impl BusinessRecord {
    /// Builds a record from the ten positional fields in wire order:
    /// name, account number, limit, wallet, loan wallet, liability wallet,
    /// max ROI, min ROI, number of programs, exposure.
    pub fn from_fields(fields: &[String]) -> Result<Self> {
        let [
            name,
            account_number,
            limit,
            wallet_id,
            loan_wallet_id,
            liability_wallet_id,
            max_roi,
            min_roi,
            number_of_programs,
            exposure,
        ] = fields
        else {
            return Err(RecordError::ValidationError(format!(
                "Invalid number of business fields: expected {BUSINESS_FIELD_COUNT}, got {}",
                fields.len()
            )));
        };

        if name.is_empty() {
            return Err(RecordError::ValidationError(
                "BusinessName must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.clone(),
            account_number: account_number.clone(),
            limit: parse_i64("BusinessLimit", limit)?,
            wallet_id: wallet_id.clone(),
            loan_wallet_id: loan_wallet_id.clone(),
            liability_wallet_id: liability_wallet_id.clone(),
            max_roi: parse_f64("MaxROI", max_roi)?,
            min_roi: parse_f64("MinROI", min_roi)?,
            number_of_programs: parse_i64("NumberOfPrograms", number_of_programs)?,
            exposure: parse_i64("BusinessExposure", exposure)?,
        })
    }

    pub fn wallet_id(&self, kind: WalletKind) -> &str {
        match kind {
            WalletKind::Main => &self.wallet_id,
            WalletKind::Loan => &self.loan_wallet_id,
            WalletKind::Liability => &self.liability_wallet_id,
        }
    }
}

/// Renders every field as `Field=value`, joined by `, `.
impl fmt::Display for BusinessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BusinessName={}, BusinessAcNo={}, BusinessLimit={}, BusinessWalletID={}, \
             BusinessLoanWalletID={}, BusinessLiabilityWalletID={}, MaxROI={}, MinROI={}, \
             NumberOfPrograms={}, BusinessExposure={}",
            self.name,
            self.account_number,
            self.limit,
            self.wallet_id,
            self.loan_wallet_id,
            self.liability_wallet_id,
            self.max_roi,
            self.min_roi,
            self.number_of_programs,
            self.exposure,
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WalletKind {
    Main,
    Loan,
    Liability,
}

impl WalletKind {
    /// Case-sensitive; returns `None` for anything outside `main`, `loan`, `liability`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "main" => Some(Self::Main),
            "loan" => Some(Self::Loan),
            "liability" => Some(Self::Liability),
            _ => None,
        }
    }
}
