use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_NOTIFICATIONS: usize = 50;

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Creation time in milliseconds, unique within the log.
    pub id: i64,
    pub title: String,
    pub message: String,
    pub whatsapp: String,
    pub email: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Newest-first notification list, capped at [`MAX_NOTIFICATIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from persisted entries, enforcing the cap.
    pub fn from_entries(mut entries: Vec<Notification>) -> Self {
        entries.truncate(MAX_NOTIFICATIONS);
        Self { entries }
    }

    pub fn append(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        whatsapp: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut id = now.timestamp_millis();
        if let Some(head) = self.entries.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }

        let notification = Notification {
            id,
            title: title.into(),
            message: message.into(),
            whatsapp: whatsapp.into(),
            email: email.into(),
            timestamp: now.format(DISPLAY_FORMAT).to_string(),
            created_at: now,
            read: false,
        };

        let mut entries = Vec::with_capacity(MAX_NOTIFICATIONS);
        entries.push(notification);
        entries.extend(self.entries.iter().take(MAX_NOTIFICATIONS - 1).cloned());

        Self { entries }
    }

    pub fn mark_read(&self, id: i64) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|n| Notification {
                read: n.read || n.id == id,
                ..n.clone()
            })
            .collect();
        Self { entries }
    }

    pub fn mark_all_read(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|n| Notification {
                read: true,
                ..n.clone()
            })
            .collect();
        Self { entries }
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
