use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::enums::{FeedbackStatus, FeedbackType};

/// Display name used for anonymous submissions.
pub const ANONYMOUS: &str = "Anonymous";

/// Who submitted a piece of feedback.
///
/// Anonymous submissions drop the identity before the record is built, so
/// there is nothing to leak.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Author {
    Student {
        student_ref: String,
        name: String,
        email: String,
    },
    Anonymous,
}

impl Author {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Student { name, .. } => name,
            Self::Anonymous => ANONYMOUS,
        }
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// A complaint or suggestion moving through `open → review → resolved`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Feedback {
    pub id: RecordId,
    pub author: Author,
    pub feedback_type: FeedbackType,
    /// Free-form label ("Hygiene", "Food Quality").
    pub category: String,
    pub message: String,
    pub status: FeedbackStatus,
    /// Manager response, set when the record moves to review.
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    #[must_use]
    pub fn author_display_name(&self) -> &str {
        self.author.display_name()
    }

    #[must_use]
    pub const fn anonymous(&self) -> bool {
        self.author.is_anonymous()
    }
}

/// Identity of the submitting student, discarded for anonymous feedback.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentIdentity {
    pub student_ref: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Fields supplied by the feedback form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewFeedback {
    pub student: StudentIdentity,
    #[serde(default)]
    pub feedback_type: FeedbackType,
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub anonymous: bool,
}

impl NewFeedback {
    /// Resolve the author, dropping the identity when anonymous.
    #[must_use]
    pub fn author(&self) -> Author {
        if self.anonymous {
            Author::Anonymous
        } else {
            Author::Student {
                student_ref: self.student.student_ref.clone(),
                name: self.student.name.clone(),
                email: self.student.email.clone(),
            }
        }
    }
}

/// Suggested categories offered by the feedback form.
pub const SUGGESTED_CATEGORIES: [&str; 7] = [
    "Food Quality",
    "Hygiene",
    "Service",
    "Menu",
    "Timing",
    "Staff Behavior",
    "Other",
];
