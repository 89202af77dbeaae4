use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::sqlite_text_enum;
use crate::regions::Country;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamStatus {
    #[default]
    Available,
    Searching,
    InMatch,
}

sqlite_text_enum!(TeamStatus {
    Available => "available",
    Searching => "searching",
    InMatch => "inMatch",
});

sqlite_text_enum!(Country {
    Indonesia => "Indonesia",
    Malaysia => "Malaysia",
    Philippines => "Philippines",
});

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Available => "available",
            TeamStatus::Searching => "searching",
            TeamStatus::InMatch => "inMatch",
        }
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TeamStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(TeamStatus::Available),
            "searching" => Ok(TeamStatus::Searching),
            "inMatch" => Ok(TeamStatus::InMatch),
            _ => Err(format!("Invalid TeamStatus: {}", s)),
        }
    }
}

/// A row of the `teams` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub team_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub logo_url: Option<String>,
    pub country: Country,
    pub province: String,
    pub whatsapp: String,
    pub captain_name: String,
    pub status: TeamStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a team, as sent to clients and kept in their directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub id: i64,
    pub team_name: String,
    pub logo: Option<String>,
    pub country: Country,
    pub province: String,
    pub status: TeamStatus,
    pub captain_name: String,
    pub whatsapp: String,
    pub email: String,
}

impl From<Team> for TeamInfo {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            team_name: team.team_name,
            logo: team.logo_url,
            country: team.country,
            province: team.province,
            status: team.status,
            captain_name: team.captain_name,
            whatsapp: team.whatsapp,
            email: team.email,
        }
    }
}

/// Validated registration data ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub team_name: String,
    pub email: String,
    pub password_hash: String,
    pub logo_url: Option<String>,
    pub country: Country,
    pub province: String,
    pub whatsapp: String,
    pub captain_name: String,
    pub status: TeamStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamInfo>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: TeamInfo,
}
