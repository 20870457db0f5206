//! Poll update builder. Only labels are editable, and only while active.

use mess_core::entities::Poll;
use mess_core::errors::CoreError;
use serde::{Deserialize, Serialize};

use super::{Patch, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl Patch<Poll> for PollUpdate {
    fn apply_to(&self, record: &mut Poll) -> Result<(), CoreError> {
        if !record.is_active() {
            return Err(CoreError::AlreadyClosed { id: record.id });
        }
        if let Some(ref date_label) = self.date_label {
            require_text("date_label", date_label)?;
            record.date_label.clone_from(date_label);
        }
        if let Some(ref question) = self.question {
            require_text("question", question)?;
            record.question.clone_from(question);
        }
        if let Some(ref deadline) = self.deadline {
            require_text("deadline", deadline)?;
            record.deadline.clone_from(deadline);
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.date_label.is_none() && self.question.is_none() && self.deadline.is_none()
    }
}

pub struct PollUpdateBuilder(PollUpdate);

impl PollUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PollUpdate::default())
    }

    #[must_use]
    pub fn date_label(mut self, date_label: impl Into<String>) -> Self {
        self.0.date_label = Some(date_label.into());
        self
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.0.question = Some(question.into());
        self
    }

    #[must_use]
    pub fn deadline(mut self, deadline: impl Into<String>) -> Self {
        self.0.deadline = Some(deadline.into());
        self
    }

    #[must_use]
    pub fn build(self) -> PollUpdate {
        self.0
    }
}

impl Default for PollUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
