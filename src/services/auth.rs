use bcrypt::{hash, verify};

use crate::database::models::{
    LoginInput, LoginResponse, NewTeam, RegisterInput, Team, TeamInfo, UpdateStatusInput,
};
use crate::database::repositories::TeamRepository;
use crate::error::AppError;
use crate::regions::Country;
use crate::services::directory_cache::DirectoryCache;
use crate::services::image_store::ImageStore;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct AuthService {
    team_repository: TeamRepository,
    image_store: ImageStore,
    directory_cache: DirectoryCache,
    bcrypt_cost: u32,
}

fn required(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

impl AuthService {
    pub fn new(
        team_repository: TeamRepository,
        image_store: ImageStore,
        directory_cache: DirectoryCache,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            team_repository,
            image_store,
            directory_cache,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterInput) -> Result<TeamInfo, AppError> {
        let team_name = required(&request.team_name, "Team name")?;
        let email = required(&request.email, "Email")?.to_lowercase();
        let captain_name = required(&request.captain_name, "Captain name")?;
        let province = required(&request.province, "Province")?;

        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let country: Country = request.country.parse().map_err(AppError::BadRequest)?;

        if !country.has_province(&province) {
            return Err(AppError::BadRequest(format!(
                "{} is not a province of {}",
                province, country
            )));
        }

        let whatsapp = country.normalize_whatsapp(&request.whatsapp).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid WhatsApp format for {}. Example: {}",
                country,
                country.phone_example()
            ))
        })?;

        // Check if email already exists
        if self.team_repository.email_exists(&email).await? {
            log::info!("Registration rejected, email already registered: {}", email);
            return Err(AppError::duplicate_email());
        }

        // A failed logo upload leaves the logo empty, it never blocks registration
        let logo_url = match request.logo_base64.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(data_url) => match self.image_store.store(&team_name, data_url).await {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("Logo upload failed for {} (continuing): {}", email, e);
                    None
                }
            },
            None => None,
        };

        let password_hash = hash(&request.password, self.bcrypt_cost)?;

        let team = self
            .team_repository
            .create_team(&NewTeam {
                team_name,
                email,
                password_hash,
                logo_url,
                country,
                province,
                whatsapp,
                captain_name,
                status: request.status.unwrap_or_default(),
            })
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    AppError::duplicate_email()
                }
                other => AppError::from(other),
            })?;

        self.directory_cache.invalidate().await;

        log::info!("Registered team {} ({})", team.team_name, team.id);

        Ok(team.into())
    }

    pub async fn login(&self, request: LoginInput) -> Result<LoginResponse, AppError> {
        let team = self
            .verify_credentials(&request.email, &request.password)
            .await?;

        let all_teams = self
            .directory_cache
            .get_or_load(&self.team_repository)
            .await?;

        log::info!("Team {} logged in", team.id);

        Ok(LoginResponse {
            team: team.into(),
            all_teams: all_teams.as_ref().clone(),
        })
    }

    /// Updates a team's matchmaking status after re-checking its credentials.
    pub async fn update_status(
        &self,
        team_id: i64,
        request: UpdateStatusInput,
    ) -> Result<TeamInfo, AppError> {
        let team = self
            .verify_credentials(&request.email, &request.password)
            .await?;

        if team.id != team_id {
            return Err(AppError::Unauthorized(
                "Credentials do not belong to this team".to_string(),
            ));
        }

        let team = self
            .team_repository
            .update_status(team_id, request.status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        self.directory_cache.invalidate().await;

        log::info!("Team {} is now {}", team.id, team.status);

        Ok(team.into())
    }

    pub async fn directory(&self) -> Result<Vec<TeamInfo>, AppError> {
        let teams = self
            .directory_cache
            .get_or_load(&self.team_repository)
            .await?;

        Ok(teams.as_ref().clone())
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Team, AppError> {
        let team = self
            .team_repository
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify(password, &team.password_hash)? {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        Ok(team)
    }
}
