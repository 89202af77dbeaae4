use chrono::{DateTime, Utc};

use super::api::ScrimApi;
use super::error::ClientError;
use super::persistence::Session;
use crate::database::models::{LoginInput, TeamInfo, TeamStatus};
use crate::regions::Country;

/// Country/province criteria for the opponent listing. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub country: Option<Country>,
    pub province: Option<String>,
}

impl DirectoryFilter {
    pub fn new(country: Option<Country>, province: Option<&str>) -> Self {
        Self {
            country,
            province: province
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    fn matches(&self, team: &TeamInfo) -> bool {
        self.country.is_none_or(|c| c == team.country)
            && self
                .province
                .as_deref()
                .is_none_or(|p| p == team.province)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryGroup {
    pub country: Country,
    pub teams: Vec<TeamInfo>,
}

/// The logged-in team plus its snapshot of every registered team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    current: Option<TeamInfo>,
    teams: Vec<TeamInfo>,
}

impl TeamDirectory {
    pub fn new(current: TeamInfo, teams: Vec<TeamInfo>) -> Self {
        Self {
            current: Some(current),
            teams,
        }
    }

    /// Authenticates and returns a fresh directory. `self` is left as is on failure.
    pub async fn login<A: ScrimApi>(
        &self,
        api: &A,
        email: &str,
        password: &str,
    ) -> Result<Self, ClientError> {
        let response = api
            .login(LoginInput {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;

        Ok(Self::new(response.team, response.all_teams))
    }

    pub fn current(&self) -> Option<&TeamInfo> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn teams(&self) -> &[TeamInfo] {
        &self.teams
    }

    pub fn find(&self, team_id: i64) -> Option<&TeamInfo> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Sets the logged-in team's status, including its own directory entry.
    pub fn with_status(&self, status: TeamStatus) -> Self {
        let Some(current) = &self.current else {
            return self.clone();
        };
        let current = TeamInfo {
            status,
            ..current.clone()
        };

        let teams = self
            .teams
            .iter()
            .map(|t| {
                if t.id == current.id {
                    TeamInfo {
                        status,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();

        Self {
            current: Some(current),
            teams,
        }
    }

    /// Replaces the snapshot with freshly fetched teams, keeping the local view of self.
    pub fn with_teams(&self, teams: Vec<TeamInfo>) -> Self {
        let teams = match &self.current {
            Some(current) => teams
                .into_iter()
                .map(|t| if t.id == current.id { current.clone() } else { t })
                .collect(),
            None => teams,
        };

        Self {
            current: self.current.clone(),
            teams,
        }
    }

    /// Every team except self that matches the filter, in directory order.
    pub fn filter(&self, filter: &DirectoryFilter) -> Vec<&TeamInfo> {
        let self_id = self.current.as_ref().map(|t| t.id);

        self.teams
            .iter()
            .filter(|t| Some(t.id) != self_id)
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// Filtered teams grouped by country, groups sorted by country name.
    pub fn grouped(&self, filter: &DirectoryFilter) -> Vec<CountryGroup> {
        let mut groups: Vec<CountryGroup> = Vec::new();

        for team in self.filter(filter) {
            match groups.iter_mut().find(|g| g.country == team.country) {
                Some(group) => group.teams.push(team.clone()),
                None => groups.push(CountryGroup {
                    country: team.country,
                    teams: vec![team.clone()],
                }),
            }
        }

        groups.sort_by(|a, b| a.country.as_str().cmp(b.country.as_str()));
        groups
    }

    pub fn to_session(&self, now: DateTime<Utc>) -> Option<Session> {
        self.current.as_ref().map(|current| Session {
            current_team: current.clone(),
            directory_snapshot: self.teams.clone(),
            saved_at: now,
        })
    }
}

impl From<Session> for TeamDirectory {
    fn from(session: Session) -> Self {
        Self::new(session.current_team, session.directory_snapshot)
    }
}
