//! The client's application state. Every transition returns a new snapshot.

use chrono::{DateTime, Utc};

use super::directory::{DirectoryFilter, TeamDirectory};
use super::error::ClientError;
use super::i18n::Lang;
use super::links::{ContactLinks, offer_links};
use super::notifications::NotificationLog;
use super::persistence::Restored;
use super::scrims::{ScrimResultLog, ScrimSubmission};
use crate::database::models::{TeamInfo, TeamStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    FindMatch,
    MyTeam,
    Notifications,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub lang: Lang,
    pub directory: TeamDirectory,
    pub notifications: NotificationLog,
    pub scrim_results: ScrimResultLog,
    pub tab: Tab,
    pub filter: DirectoryFilter,
    pub expanded_team: Option<i64>,
}

impl ClientState {
    pub fn restored(restored: Restored) -> Self {
        Self {
            directory: restored.session.map(TeamDirectory::from).unwrap_or_default(),
            notifications: restored.notifications,
            scrim_results: restored.scrim_results,
            ..Self::default()
        }
    }

    pub fn current_team(&self) -> Option<&TeamInfo> {
        self.directory.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.directory.is_authenticated()
    }

    pub fn logged_in(&self, directory: TeamDirectory) -> Self {
        Self {
            directory,
            tab: Tab::FindMatch,
            filter: DirectoryFilter::default(),
            expanded_team: None,
            ..self.clone()
        }
    }

    /// Back to the landing view. Scrim history survives.
    pub fn logged_out(&self) -> Self {
        Self {
            lang: self.lang,
            scrim_results: self.scrim_results.clone(),
            ..Self::default()
        }
    }

    pub fn with_lang(&self, lang: Lang) -> Self {
        Self {
            lang,
            ..self.clone()
        }
    }

    pub fn toggled_lang(&self) -> Self {
        self.with_lang(self.lang.toggled())
    }

    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            tab,
            ..self.clone()
        }
    }

    /// Changing country resets an unrelated province.
    pub fn with_filter(&self, filter: DirectoryFilter) -> Self {
        let province = match (filter.country, filter.province) {
            (Some(country), Some(province)) if !country.has_province(&province) => None,
            (_, province) => province,
        };

        Self {
            filter: DirectoryFilter {
                country: filter.country,
                province,
            },
            ..self.clone()
        }
    }

    pub fn toggled_expanded(&self, team_id: i64) -> Self {
        let expanded_team = if self.expanded_team == Some(team_id) {
            None
        } else {
            Some(team_id)
        };

        Self {
            expanded_team,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: TeamStatus) -> Self {
        Self {
            directory: self.directory.with_status(status),
            ..self.clone()
        }
    }

    /// Searching goes back to available; anything else starts searching.
    pub fn toggled_search(&self) -> Self {
        match self.current_team().map(|t| t.status) {
            Some(TeamStatus::Searching) => self.with_status(TeamStatus::Available),
            Some(_) => self.with_status(TeamStatus::Searching),
            None => self.clone(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.current_team()
            .is_some_and(|t| t.status == TeamStatus::Searching)
    }

    /// Simulated interest from another team. Dropped once the search has stopped.
    pub fn with_match_interest(&self, now: DateTime<Utc>) -> Self {
        let Some(me) = self.current_team().filter(|_| self.is_searching()) else {
            return self.clone();
        };

        let labels = self.lang.labels();
        Self {
            notifications: self.notifications.append(
                labels.match_interest_title,
                labels.match_interest_message,
                me.whatsapp.clone(),
                me.email.clone(),
                now,
            ),
            ..self.clone()
        }
    }

    pub fn with_offer_sent(
        &self,
        team_id: i64,
        now: DateTime<Utc>,
    ) -> Result<(Self, ContactLinks), ClientError> {
        let sender = self
            .current_team()
            .ok_or_else(|| ClientError::validation("Not logged in"))?;
        let target = self
            .directory
            .find(team_id)
            .ok_or_else(|| ClientError::validation(format!("Team {} not found", team_id)))?;

        if target.id == sender.id {
            return Err(ClientError::validation("Cannot send an offer to your own team"));
        }
        if target.status == TeamStatus::InMatch {
            return Err(ClientError::validation(format!(
                "{} is already in a match",
                target.team_name
            )));
        }

        let links = offer_links(sender, target, self.lang);
        let notifications = self.notifications.append(
            self.lang.labels().offer_title,
            self.lang.offer_message(&sender.team_name),
            target.whatsapp.clone(),
            target.email.clone(),
            now,
        );

        Ok((
            Self {
                notifications,
                ..self.clone()
            },
            links,
        ))
    }

    pub fn with_scrim_result(
        &self,
        submission: ScrimSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, ClientError> {
        let reporter = self
            .current_team()
            .ok_or_else(|| ClientError::validation("Not logged in"))?;

        Ok(Self {
            scrim_results: self.scrim_results.append(reporter, submission, now)?,
            ..self.clone()
        })
    }

    pub fn with_notification_read(&self, id: i64) -> Self {
        Self {
            notifications: self.notifications.mark_read(id),
            ..self.clone()
        }
    }

    pub fn with_all_notifications_read(&self) -> Self {
        Self {
            notifications: self.notifications.mark_all_read(),
            ..self.clone()
        }
    }

    pub fn with_directory_teams(&self, teams: Vec<TeamInfo>) -> Self {
        Self {
            directory: self.directory.with_teams(teams),
            ..self.clone()
        }
    }
}
