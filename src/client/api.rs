use std::future::Future;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::error::{AuthError, ClientError};
use crate::database::models::{
    LoginInput, LoginResponse, RegisterInput, TeamInfo, TeamResponse, TeamsResponse,
    UpdateStatusInput,
};
use crate::handlers::shared::ApiResponse;
use crate::regions::Country;
use crate::services::auth::MIN_PASSWORD_LENGTH;

/// Raw registration form, checked before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub team_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
    pub province: String,
    pub whatsapp: String,
    pub captain_name: String,
    pub logo: Option<String>,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterInput, ClientError> {
        let required = [
            (&self.team_name, "Team name"),
            (&self.email, "Email"),
            (&self.password, "Password"),
            (&self.country, "Country"),
            (&self.province, "Province"),
            (&self.whatsapp, "WhatsApp number"),
            (&self.captain_name, "Captain name"),
        ];
        if let Some((_, field)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(ClientError::validation(format!("{} is required", field)));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ClientError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.password != self.confirm_password {
            return Err(ClientError::validation("Passwords do not match"));
        }

        let country: Country = self.country.parse().map_err(ClientError::Validation)?;
        let province = self.province.trim();
        if !country.has_province(province) {
            return Err(ClientError::validation(format!(
                "{} is not a province of {}",
                province, country
            )));
        }

        let whatsapp = country.normalize_whatsapp(&self.whatsapp).ok_or_else(|| {
            ClientError::validation(format!(
                "Invalid WhatsApp format for {}. Example: {}",
                country,
                country.phone_example()
            ))
        })?;

        Ok(RegisterInput {
            team_name: self.team_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            country: country.as_str().to_string(),
            province: province.to_string(),
            whatsapp,
            captain_name: self.captain_name.trim().to_string(),
            logo_base64: self.logo.clone(),
            status: None,
        })
    }
}

/// The authentication and directory service as seen from the client.
pub trait ScrimApi {
    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<LoginResponse, ClientError>> + Send;

    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<TeamInfo, ClientError>> + Send;

    fn fetch_teams(&self) -> impl Future<Output = Result<Vec<TeamInfo>, ClientError>> + Send;

    fn update_status(
        &self,
        team_id: i64,
        input: UpdateStatusInput,
    ) -> impl Future<Output = Result<TeamInfo, ClientError>> + Send;
}

/// [`ScrimApi`] over the JSON endpoints served by this crate.
#[derive(Clone)]
pub struct HttpScrimApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpScrimApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// `base_url` may carry a path prefix (`http://host/scrim`). Endpoints are
    /// resolved below it, so a missing trailing slash is added here.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            ClientError::Transport(format!("Invalid server URL {}: {}", base_url, e))
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Transport(e.to_string()))
    }

    async fn send<B, T>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.request(method, self.endpoint(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .await
                .ok()
                .and_then(|body| body.message);
            log::debug!("{} returned {}: {:?}", path, status, message);
            return Err(error_for_status(status, message));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ClientError::Transport(format!("{} returned no data", path)))
    }
}

fn error_for_status(status: StatusCode, message: Option<String>) -> ClientError {
    match (status, message) {
        (StatusCode::UNAUTHORIZED, message) => AuthError::InvalidCredentials(
            message.unwrap_or_else(|| "Invalid email or password".to_string()),
        )
        .into(),
        (StatusCode::CONFLICT, _) => AuthError::DuplicateEmail.into(),
        (StatusCode::BAD_REQUEST, Some(message)) => ClientError::Validation(message),
        (status, Some(message)) => ClientError::Transport(format!("{}: {}", status, message)),
        (status, None) => ClientError::Transport(status.to_string()),
    }
}

impl ScrimApi for HttpScrimApi {
    async fn login(&self, input: LoginInput) -> Result<LoginResponse, ClientError> {
        self.send(reqwest::Method::POST, "api/login", Some(&input))
            .await
    }

    async fn register(&self, input: RegisterInput) -> Result<TeamInfo, ClientError> {
        let response: TeamResponse = self
            .send(reqwest::Method::POST, "api/register", Some(&input))
            .await?;
        Ok(response.team)
    }

    async fn fetch_teams(&self) -> Result<Vec<TeamInfo>, ClientError> {
        let response: TeamsResponse = self
            .send::<(), _>(reqwest::Method::GET, "api/teams", None)
            .await?;
        Ok(response.teams)
    }

    async fn update_status(
        &self,
        team_id: i64,
        input: UpdateStatusInput,
    ) -> Result<TeamInfo, ClientError> {
        let path = format!("api/teams/{}/status", team_id);
        let response: TeamResponse = self
            .send(reqwest::Method::PUT, &path, Some(&input))
            .await?;
        Ok(response.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            team_name: "Garuda".to_string(),
            email: "garuda@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            country: "Indonesia".to_string(),
            province: "Bali".to_string(),
            whatsapp: "812 3456 7890".to_string(),
            captain_name: "Wayan".to_string(),
            logo: None,
        }
    }

    #[test]
    fn valid_form_normalizes_whatsapp() {
        let input = form().validate().unwrap();
        assert_eq!(input.whatsapp, "+6281234567890");
        assert_eq!(input.country, "Indonesia");
    }

    #[test]
    fn rejects_short_or_mismatched_passwords() {
        let short = RegistrationForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..form()
        };
        assert!(matches!(short.validate(), Err(ClientError::Validation(_))));

        let mismatched = RegistrationForm {
            confirm_password: "secret2".to_string(),
            ..form()
        };
        assert!(matches!(
            mismatched.validate(),
            Err(ClientError::Validation(m)) if m == "Passwords do not match"
        ));
    }

    #[test]
    fn rejects_province_from_another_country() {
        let form = RegistrationForm {
            province: "Johor".to_string(),
            ..form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn endpoints_keep_the_base_path() {
        let api = HttpScrimApi::new("http://localhost:8080/scrim").unwrap();
        assert_eq!(
            api.endpoint("api/login").unwrap().as_str(),
            "http://localhost:8080/scrim/api/login"
        );

        let api = HttpScrimApi::new("http://localhost:8080").unwrap();
        assert_eq!(
            api.endpoint("api/teams/7/status").unwrap().as_str(),
            "http://localhost:8080/api/teams/7/status"
        );
    }

    #[test]
    fn maps_error_statuses() {
        assert_eq!(
            error_for_status(StatusCode::CONFLICT, None),
            ClientError::Auth(AuthError::DuplicateEmail)
        );
        assert_eq!(
            error_for_status(StatusCode::UNAUTHORIZED, Some("nope".to_string())),
            ClientError::Auth(AuthError::InvalidCredentials("nope".to_string()))
        );
        assert!(matches!(
            error_for_status(StatusCode::BAD_GATEWAY, None),
            ClientError::Transport(_)
        ));
    }
}
