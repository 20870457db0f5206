use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::enums::AnnouncementCategory;

/// A notice posted by the mess manager. Listed newest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub category: AnnouncementCategory,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when posting an announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub category: AnnouncementCategory,
}
