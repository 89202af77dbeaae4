use serde::{Deserialize, Serialize};

use super::team::{TeamInfo, TeamStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub team_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub province: String,
    pub whatsapp: String,
    pub captain_name: String,
    /// Optional `data:image/...;base64,...` URL for the team logo.
    #[serde(default)]
    pub logo_base64: Option<String>,
    #[serde(default)]
    pub status: Option<TeamStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusInput {
    pub email: String,
    pub password: String,
    pub status: TeamStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub team: TeamInfo,
    pub all_teams: Vec<TeamInfo>,
}
