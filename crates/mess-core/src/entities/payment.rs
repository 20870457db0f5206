use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::enums::PaymentStatus;

/// One billing period's mess fee for one student.
///
/// `paid_on` is `Some` exactly when `status` is `paid`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: RecordId,
    /// Foreign lookup key into the student directory. Not owned here.
    pub student_ref: String,
    pub student_name: String,
    pub student_email: String,
    pub room: String,
    /// Billing period label ("February 2024").
    pub period: String,
    /// Whole currency units.
    pub amount_due: u32,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub paid_on: Option<NaiveDate>,
    pub transaction_id: Option<String>,
}

/// Fields supplied when billing a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPayment {
    pub student_ref: String,
    pub student_name: String,
    #[serde(default)]
    pub student_email: String,
    #[serde(default)]
    pub room: String,
    pub period: String,
    /// Falls back to the configured monthly fee.
    #[serde(default)]
    pub amount_due: Option<u32>,
    pub due_date: NaiveDate,
}
