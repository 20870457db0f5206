//! Payment record update builder. Paid records are frozen.

use chrono::NaiveDate;
use mess_core::entities::PaymentRecord;
use mess_core::errors::CoreError;
use serde::{Deserialize, Serialize};

use super::{Patch, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_due: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl Patch<PaymentRecord> for PaymentUpdate {
    fn apply_to(&self, record: &mut PaymentRecord) -> Result<(), CoreError> {
        if let Some(paid_on) = record.paid_on {
            return Err(CoreError::AlreadyPaid {
                id: record.id,
                paid_on,
            });
        }
        if let Some(amount_due) = self.amount_due {
            if amount_due == 0 {
                return Err(CoreError::validation("amount_due must be greater than zero"));
            }
            record.amount_due = amount_due;
        }
        if let Some(due_date) = self.due_date {
            record.due_date = due_date;
        }
        if let Some(ref room) = self.room {
            record.room.clone_from(room);
        }
        if let Some(ref period) = self.period {
            require_text("period", period)?;
            record.period.clone_from(period);
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.amount_due.is_none()
            && self.due_date.is_none()
            && self.room.is_none()
            && self.period.is_none()
    }
}

pub struct PaymentUpdateBuilder(PaymentUpdate);

impl PaymentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PaymentUpdate::default())
    }

    #[must_use]
    pub const fn amount_due(mut self, amount_due: u32) -> Self {
        self.0.amount_due = Some(amount_due);
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.0.room = Some(room.into());
        self
    }

    #[must_use]
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.0.period = Some(period.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PaymentUpdate {
        self.0
    }
}

impl Default for PaymentUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
