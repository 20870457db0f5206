//! Feedback repository: submission plus the `open → review → resolved` workflow.

use chrono::Utc;
use mess_core::RecordId;
use mess_core::audit_detail::StatusChangedDetail;
use mess_core::entities::{Author, Feedback, NewFeedback};
use mess_core::enums::{AuditAction, EntityType, FeedbackStatus, FeedbackType};
use mess_core::errors::CoreError;
use mess_core::responses::FeedbackSummary;

use crate::service::MessService;
use crate::store::{Filter, View, contains_ci};
use crate::updates::require_text;

/// Status and type filters plus search over message and author display name.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub status: Option<FeedbackStatus>,
    pub feedback_type: Option<FeedbackType>,
    pub search: Option<String>,
}

impl Filter<Feedback> for FeedbackFilter {
    fn matches(&self, fb: &Feedback) -> bool {
        self.status.is_none_or(|s| fb.status == s)
            && self.feedback_type.is_none_or(|t| fb.feedback_type == t)
            && self.search.as_deref().is_none_or(|q| {
                contains_ci(&fb.message, q)
                    || contains_ci(fb.author_display_name(), q)
                    || contains_ci(&fb.category, q)
            })
    }
}

impl MessService {
    /// Store a complaint or suggestion in `open`. Anonymous submissions keep
    /// no trace of the student.
    pub fn submit_feedback(&mut self, form: NewFeedback) -> Result<Feedback, CoreError> {
        require_text("category", &form.category)?;
        require_text("message", &form.message)?;
        if !form.anonymous {
            require_text("student.name", &form.student.name)?;
        }
        let author = form.author();

        let created = self
            .feedback
            .create(|id| {
                Ok(Feedback {
                    id,
                    author,
                    feedback_type: form.feedback_type,
                    category: form.category.trim().to_string(),
                    message: form.message.trim().to_string(),
                    status: FeedbackStatus::Open,
                    response: None,
                    created_at: Utc::now(),
                })
            })?
            .clone();

        self.audit
            .record::<()>(EntityType::Feedback, created.id, AuditAction::Created, None);
        tracing::debug!(
            id = created.id,
            kind = %created.feedback_type,
            anonymous = created.anonymous(),
            "feedback submitted"
        );
        Ok(created)
    }

    pub fn get_feedback(&self, id: RecordId) -> Result<&Feedback, CoreError> {
        self.feedback.get(id)
    }

    /// Attach the manager's response and move the record to review.
    ///
    /// # Errors
    ///
    /// `Validation` for blank text, `NotFound`, or `InvalidTransition`
    /// unless the record is open.
    pub fn respond(&mut self, id: RecordId, response: &str) -> Result<Feedback, CoreError> {
        require_text("response", response)?;
        self.transition_feedback(id, FeedbackStatus::Review, |fb| {
            fb.response = Some(response.trim().to_string());
        })
    }

    /// Close the record, from open or review.
    ///
    /// # Errors
    ///
    /// `NotFound`, or `InvalidTransition` if already resolved.
    pub fn resolve(&mut self, id: RecordId) -> Result<Feedback, CoreError> {
        self.transition_feedback(id, FeedbackStatus::Resolved, |_| {})
    }

    fn transition_feedback(
        &mut self,
        id: RecordId,
        to: FeedbackStatus,
        on_success: impl FnOnce(&mut Feedback),
    ) -> Result<Feedback, CoreError> {
        let mut from = None;
        let updated = self
            .feedback
            .update(id, |fb| {
                if !fb.status.can_transition_to(to) {
                    return Err(CoreError::InvalidTransition {
                        entity_type: EntityType::Feedback,
                        id: fb.id,
                        from: fb.status.to_string(),
                        to: to.to_string(),
                    });
                }
                from = Some(fb.status);
                fb.status = to;
                on_success(fb);
                Ok(())
            })?
            .clone();

        let from = from.unwrap_or(to);
        self.audit.record(
            EntityType::Feedback,
            id,
            AuditAction::StatusChanged,
            Some(StatusChangedDetail {
                from: from.to_string(),
                to: to.to_string(),
            }),
        );
        tracing::info!(id, %from, %to, "feedback status changed");
        Ok(updated)
    }

    #[must_use]
    pub fn list_feedback(&self, filter: FeedbackFilter) -> View<'_, Feedback, FeedbackFilter> {
        self.feedback.list(filter)
    }

    /// A student's own named submissions. Anonymous ones cannot be traced back.
    #[must_use]
    pub fn feedback_by_author(&self, student_ref: &str) -> Vec<Feedback> {
        self.feedback
            .iter()
            .filter(|fb| {
                matches!(&fb.author, Author::Student { student_ref: r, .. } if r == student_ref)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn feedback_summary(&self) -> FeedbackSummary {
        let mut summary = FeedbackSummary::default();
        for fb in self.feedback.iter() {
            match fb.status {
                FeedbackStatus::Open => summary.open += 1,
                FeedbackStatus::Review => summary.review += 1,
                FeedbackStatus::Resolved => summary.resolved += 1,
            }
            summary.total += 1;
        }
        summary
    }
}
