use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ClientError;
use crate::database::models::TeamInfo;
use crate::services::image_store::parse_data_url;

/// Largest screenshot accepted, in decoded bytes.
pub const MAX_SCREENSHOT_BYTES: usize = 10 * 1024 * 1024;

/// Form input for a reported scrim. Scores arrive unchecked.
#[derive(Debug, Clone, Default)]
pub struct ScrimSubmission {
    pub opponent_name: String,
    pub your_score: i64,
    pub opponent_score: i64,
    pub screenshot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrimResult {
    pub id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub opponent_name: String,
    pub your_score: u32,
    pub opponent_score: u32,
    pub screenshot: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl ScrimResult {
    pub fn outcome(&self) -> Outcome {
        match self.your_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrimStats {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub results: Vec<ScrimResult>,
}

/// Append-only log of self-reported scrim results, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrimResultLog {
    entries: Vec<ScrimResult>,
}

/// The screenshot must be an inline `image/*` data URL within the size cap.
fn validated_screenshot(value: Option<String>) -> Result<String, ClientError> {
    let value = value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ClientError::validation("Screenshot is required"))?;

    let image = parse_data_url(&value)
        .map_err(|_| ClientError::validation("Screenshot must be an inline image"))?;
    if !image.mime.starts_with("image/") {
        return Err(ClientError::validation(format!(
            "Unsupported screenshot type: {}",
            image.mime
        )));
    }
    if image.bytes.len() > MAX_SCREENSHOT_BYTES {
        return Err(ClientError::validation("Screenshot is larger than 10 MB"));
    }

    Ok(value.trim().to_string())
}

fn score(value: i64, field: &str) -> Result<u32, ClientError> {
    u32::try_from(value)
        .map_err(|_| ClientError::validation(format!("{} must be a non-negative integer", field)))
}

impl ScrimResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ScrimResult>) -> Self {
        Self { entries }
    }

    pub fn append(
        &self,
        reporter: &TeamInfo,
        submission: ScrimSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, ClientError> {
        let screenshot = validated_screenshot(submission.screenshot)?;

        let opponent_name = submission.opponent_name.trim();
        if opponent_name.is_empty() {
            return Err(ClientError::validation("Opponent name is required"));
        }

        let your_score = score(submission.your_score, "Your score")?;
        let opponent_score = score(submission.opponent_score, "Opponent score")?;

        let mut id = now.timestamp_millis();
        if let Some(head) = self.entries.first() {
            if id <= head.id {
                id = head.id + 1;
            }
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(ScrimResult {
            id,
            team_id: reporter.id,
            team_name: reporter.team_name.clone(),
            opponent_name: opponent_name.to_string(),
            your_score,
            opponent_score,
            screenshot,
            timestamp: now,
        });
        entries.extend(self.entries.iter().cloned());

        Ok(Self { entries })
    }

    pub fn stats_for(&self, team_id: i64) -> ScrimStats {
        let mut stats = ScrimStats::default();

        for result in self.entries.iter().filter(|r| r.team_id == team_id) {
            stats.total += 1;
            match result.outcome() {
                Outcome::Win => stats.wins += 1,
                Outcome::Loss => stats.losses += 1,
                Outcome::Draw => stats.draws += 1,
            }
            stats.results.push(result.clone());
        }

        stats
    }

    pub fn entries(&self) -> &[ScrimResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
