//! Saves and restores client state across restarts, one JSON slot per collection.
//!
//! These slots are local to one device. Nothing here is shared between teams.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::notifications::{Notification, NotificationLog};
use super::scrims::ScrimResultLog;
use super::storage::{KeyValueStore, StorageError};
use crate::database::models::TeamInfo;

pub const SESSION_KEY: &str = "scrimfinder.session";
pub const NOTIFICATIONS_KEY: &str = "scrimfinder.notifications";
pub const SCRIM_RESULTS_KEY: &str = "scrimfinder.scrim_results";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_team: TeamInfo,
    pub directory_snapshot: Vec<TeamInfo>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    pub session: Option<Session>,
    pub notifications: NotificationLog,
    pub scrim_results: ScrimResultLog,
}

pub struct SessionPersistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes all three slots. A missing session removes its slot.
    pub fn save(
        &mut self,
        session: Option<&Session>,
        notifications: &NotificationLog,
        scrim_results: &ScrimResultLog,
    ) {
        match session {
            Some(session) => self.write(SESSION_KEY, session),
            None => self.remove(SESSION_KEY),
        }
        self.write(NOTIFICATIONS_KEY, notifications);
        self.write(SCRIM_RESULTS_KEY, scrim_results);
    }

    pub fn restore(&self) -> Restored {
        let notifications: Vec<Notification> = self.read(NOTIFICATIONS_KEY).unwrap_or_default();

        Restored {
            session: self.read(SESSION_KEY),
            notifications: NotificationLog::from_entries(notifications),
            scrim_results: self.read(SCRIM_RESULTS_KEY).unwrap_or_default(),
        }
    }

    /// Forgets the session and notifications. Scrim history is kept.
    pub fn clear(&mut self) {
        self.remove(SESSION_KEY);
        self.remove(NOTIFICATIONS_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding malformed {}: {}", key, e);
                None
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|e| StorageError::Io {
                key: key.to_string(),
                message: e.to_string(),
            })
            .and_then(|json| self.store.set(key, &json));

        if let Err(e) = result {
            log::warn!("Failed to save {}: {}", key, e);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            log::warn!("Failed to remove {}: {}", key, e);
        }
    }
}
