//! Announcement update builder.

use mess_core::entities::Announcement;
use mess_core::enums::AnnouncementCategory;
use mess_core::errors::CoreError;
use serde::{Deserialize, Serialize};

use super::{Patch, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AnnouncementCategory>,
}

impl Patch<Announcement> for AnnouncementUpdate {
    fn apply_to(&self, record: &mut Announcement) -> Result<(), CoreError> {
        if let Some(ref title) = self.title {
            require_text("title", title)?;
            record.title.clone_from(title);
        }
        if let Some(ref message) = self.message {
            require_text("message", message)?;
            record.message.clone_from(message);
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.title.is_none() && self.message.is_none() && self.category.is_none()
    }
}

pub struct AnnouncementUpdateBuilder(AnnouncementUpdate);

impl AnnouncementUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AnnouncementUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.0.message = Some(message.into());
        self
    }

    #[must_use]
    pub const fn category(mut self, category: AnnouncementCategory) -> Self {
        self.0.category = Some(category);
        self
    }

    #[must_use]
    pub fn build(self) -> AnnouncementUpdate {
        self.0
    }
}

impl Default for AnnouncementUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
