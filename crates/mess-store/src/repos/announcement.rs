//! Announcement repository: post, edit, delete, list.

use chrono::Utc;
use mess_core::RecordId;
use mess_core::entities::{Announcement, NewAnnouncement};
use mess_core::enums::{AnnouncementCategory, AuditAction, EntityType};
use mess_core::errors::CoreError;

use crate::service::MessService;
use crate::store::{Filter, View, contains_ci};
use crate::updates::announcement::AnnouncementUpdate;
use crate::updates::{Patch, require_text};

/// Category filter plus case-insensitive search over title and message.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementFilter {
    pub category: Option<AnnouncementCategory>,
    pub search: Option<String>,
}

impl Filter<Announcement> for AnnouncementFilter {
    fn matches(&self, a: &Announcement) -> bool {
        self.category.is_none_or(|c| a.category == c)
            && self.search.as_deref().is_none_or(|q| {
                contains_ci(&a.title, q) || contains_ci(&a.message, q)
            })
    }
}

impl MessService {
    pub fn create_announcement(
        &mut self,
        fields: NewAnnouncement,
    ) -> Result<Announcement, CoreError> {
        require_text("title", &fields.title)?;
        require_text("message", &fields.message)?;

        let created = self
            .announcements
            .create(|id| {
                Ok(Announcement {
                    id,
                    title: fields.title.trim().to_string(),
                    message: fields.message.trim().to_string(),
                    category: fields.category,
                    created_at: Utc::now(),
                })
            })?
            .clone();

        self.audit.record::<()>(
            EntityType::Announcement,
            created.id,
            AuditAction::Created,
            None,
        );
        tracing::debug!(id = created.id, category = %created.category, "announcement posted");
        Ok(created)
    }

    pub fn get_announcement(&self, id: RecordId) -> Result<&Announcement, CoreError> {
        self.announcements.get(id)
    }

    pub fn update_announcement(
        &mut self,
        id: RecordId,
        update: AnnouncementUpdate,
    ) -> Result<Announcement, CoreError> {
        if update.is_empty() {
            return self.announcements.get(id).cloned();
        }
        let updated = self
            .announcements
            .update(id, |record| update.apply_to(record))?
            .clone();

        self.audit.record(
            EntityType::Announcement,
            id,
            AuditAction::Updated,
            Some(&update),
        );
        tracing::debug!(id, "announcement updated");
        Ok(updated)
    }

    pub fn delete_announcement(&mut self, id: RecordId) -> Result<(), CoreError> {
        self.announcements.delete(id)?;
        self.audit
            .record::<()>(EntityType::Announcement, id, AuditAction::Deleted, None);
        tracing::debug!(id, "announcement deleted");
        Ok(())
    }

    /// Announcements matching `filter`, newest first.
    #[must_use]
    pub fn list_announcements(
        &self,
        filter: AnnouncementFilter,
    ) -> View<'_, Announcement, AnnouncementFilter> {
        self.announcements.list(filter)
    }
}
