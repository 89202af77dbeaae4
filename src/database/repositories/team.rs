use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{NewTeam, Team, TeamStatus};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_team(&self, team: &NewTeam) -> Result<Team, sqlx::Error> {
        let now = Utc::now();
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO
                teams (
                    team_name,
                    email,
                    password_hash,
                    logo_url,
                    country,
                    province,
                    whatsapp,
                    captain_name,
                    status,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                team_name,
                email,
                password_hash,
                logo_url,
                country,
                province,
                whatsapp,
                captain_name,
                status,
                created_at,
                updated_at
            "#,
        )
        .bind(&team.team_name)
        .bind(&team.email)
        .bind(&team.password_hash)
        .bind(&team.logo_url)
        .bind(team.country)
        .bind(&team.province)
        .bind(&team.whatsapp)
        .bind(&team.captain_name)
        .bind(team.status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Team>, sqlx::Error> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT
                id,
                team_name,
                email,
                password_hash,
                logo_url,
                country,
                province,
                whatsapp,
                captain_name,
                status,
                created_at,
                updated_at
            FROM
                teams
            WHERE
                email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    /// All teams, newest registration first.
    pub async fn get_all_teams(&self) -> Result<Vec<Team>, sqlx::Error> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT
                id,
                team_name,
                email,
                password_hash,
                logo_url,
                country,
                province,
                whatsapp,
                captain_name,
                status,
                created_at,
                updated_at
            FROM
                teams
            ORDER BY
                created_at DESC,
                id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT
                COUNT(*)
            FROM
                teams
            WHERE
                email = ?
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn count_teams(&self) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: TeamStatus,
    ) -> Result<Option<Team>, sqlx::Error> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET
                status = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                team_name,
                email,
                password_hash,
                logo_url,
                country,
                province,
                whatsapp,
                captain_name,
                status,
                created_at,
                updated_at
            "#,
        )
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }
}
