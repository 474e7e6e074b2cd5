use super::fields::{parse_date, parse_date_time, parse_f64, parse_i64};
use crate::error::{RecordError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of positional fields `createLoan` expects after the key.
pub const LOAN_FIELD_COUNT: usize = 11;

/// Lifecycle status of a loan instrument.
///
/// Any status may move to any other; `CollectedSettled` is terminal by
/// convention only. Written in lower case, read back in any case.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Open,
    Sanctioned,
    #[serde(rename = "part disbursed")]
    PartDisbursed,
    Disbursed,
    #[serde(rename = "part collected")]
    PartCollected,
    #[serde(rename = "collected/settled")]
    CollectedSettled,
    Overdue,
}

impl LoanStatus {
    pub const ALL: [LoanStatus; 7] = [
        LoanStatus::Open,
        LoanStatus::Sanctioned,
        LoanStatus::PartDisbursed,
        LoanStatus::Disbursed,
        LoanStatus::PartCollected,
        LoanStatus::CollectedSettled,
        LoanStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Open => "open",
            LoanStatus::Sanctioned => "sanctioned",
            LoanStatus::PartDisbursed => "part disbursed",
            LoanStatus::Disbursed => "disbursed",
            LoanStatus::PartCollected => "part collected",
            LoanStatus::CollectedSettled => "collected/settled",
            LoanStatus::Overdue => "overdue",
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == LoanStatus::CollectedSettled
    }
}

/// Case-insensitive. This is the only way a status enters a record, on
/// creation and on update alike.
impl FromStr for LoanStatus {
    type Err = RecordError;

    fn from_str(raw: &str) -> Result<Self> {
        let normalized = raw.to_lowercase();
        LoanStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| RecordError::ValidationError(format!("Invalid loan status '{raw}'")))
    }
}

impl<'de> Deserialize<'de> for LoanStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LoanRecord {
    #[serde(rename = "InstrumentNumber")]
    pub instrument_number: String,
    /// Key of the borrowing business. Opaque; existence is not checked here.
    #[serde(rename = "ExposureBusinessID")]
    pub exposure_business_id: String,
    #[serde(rename = "ProgramID")]
    pub program_id: String,
    #[serde(rename = "SanctionAmount", alias = "SanctionAmountt")]
    pub sanction_amount: i64,
    #[serde(rename = "SanctionDate")]
    pub sanction_date: DateTime<Utc>,
    #[serde(rename = "SanctionAuthority")]
    pub sanction_authority: String,
    #[serde(rename = "ROI")]
    pub roi: f64,
    /// Always midnight UTC.
    #[serde(rename = "DueDate")]
    pub due_date: DateTime<Utc>,
    #[serde(rename = "ValueDate")]
    pub value_date: DateTime<Utc>,
    #[serde(rename = "LoanStatus")]
    pub status: LoanStatus,
    #[serde(rename = "LoanBalance")]
    pub balance: i64,
}

impl LoanRecord {
    /// Builds a record from the eleven positional fields in wire order:
    /// instrument number, exposure business ID, program ID, sanction amount,
    /// sanction date, sanction authority, ROI, due date, value date, status,
    /// balance.
    pub fn from_fields(fields: &[String]) -> Result<Self> {
        let [
            instrument_number,
            exposure_business_id,
            program_id,
            sanction_amount,
            sanction_date,
            sanction_authority,
            roi,
            due_date,
            value_date,
            status,
            balance,
        ] = fields
        else {
            return Err(RecordError::ValidationError(format!(
                "Invalid number of loan fields: expected {LOAN_FIELD_COUNT}, got {}",
                fields.len()
            )));
        };

        Ok(Self {
            instrument_number: instrument_number.clone(),
            exposure_business_id: exposure_business_id.clone(),
            program_id: program_id.clone(),
            sanction_amount: parse_i64("SanctionAmount", sanction_amount)?,
            sanction_date: parse_date_time("SanctionDate", sanction_date)?,
            sanction_authority: sanction_authority.clone(),
            roi: parse_f64("ROI", roi)?,
            due_date: parse_date("DueDate", due_date)?,
            value_date: parse_date_time("ValueDate", value_date)?,
            status: status.parse()?,
            balance: parse_i64("LoanBalance", balance)?,
        })
    }

    /// Applies the restricted update: status and balance only.
    ///
    /// Both inputs are validated before either field is touched.
    pub fn apply_update(&mut self, new_status: &str, new_balance: &str) -> Result<()> {
        let status: LoanStatus = new_status.parse()?;
        let balance = parse_i64("LoanBalance", new_balance)?;
        self.status = status;
        self.balance = balance;
        Ok(())
    }

    /// The narrow read projection: `<SanctionAmount>,<LoanStatus>`.
    pub fn summary(&self) -> String {
        format!("{},{}", self.sanction_amount, self.status)
    }
}
