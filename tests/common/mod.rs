use actix_web::web;
use anyhow::Result;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use scrimfinder::AppState;
use scrimfinder::config::Config;
use scrimfinder::database::init_database;
use scrimfinder::database::models::RegisterInput;
use scrimfinder::database::repositories::TeamRepository;
use scrimfinder::handlers::shared::ApiResponse;
use scrimfinder::services::{AuthService, DirectoryCache, ImageStore};

#[allow(dead_code)]
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub temp_dir: TempDir,
    pub auth_service: AuthService,
    pub team_repository: TeamRepository,
}

impl TestContext {
    #[allow(dead_code)]
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            media_dir: temp_dir.path().join("media").display().to_string(),
            ..Config::test_config()
        };

        let pool = init_database(&database_url).await?;
        let team_repository = TeamRepository::new(pool.clone());
        let auth_service = AuthService::new(
            team_repository.clone(),
            ImageStore::from_config(&config),
            DirectoryCache::new(std::time::Duration::from_secs(config.directory_cache_ttl_secs)),
            config.bcrypt_cost,
        );

        Ok(TestContext {
            pool,
            config,
            temp_dir,
            auth_service,
            team_repository,
        })
    }

    #[allow(dead_code)]
    pub fn app_state(&self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.pool.clone(), &self.config))
    }
}

// Mock data generators
#[allow(dead_code)]
pub struct MockData;

#[allow(dead_code)]
impl MockData {
    pub fn registration(email: &str) -> RegisterInput {
        RegisterInput {
            team_name: format!("{} Esports", CompanyName().fake::<String>()),
            email: email.to_string(),
            password: "password123".to_string(),
            country: "Indonesia".to_string(),
            province: "Jawa Barat".to_string(),
            whatsapp: "81234567890".to_string(),
            captain_name: Name().fake(),
            logo_base64: None,
            status: None,
        }
    }

    pub fn malaysian_registration(email: &str) -> RegisterInput {
        RegisterInput {
            country: "Malaysia".to_string(),
            province: "Johor".to_string(),
            whatsapp: "+60123456789".to_string(),
            ..Self::registration(email)
        }
    }
}

#[allow(dead_code)]
pub fn assert_success_response<T>(body: &str) -> T
where
    T: serde::de::DeserializeOwned,
{
    let response: ApiResponse<T> =
        serde_json::from_str(body).expect("Failed to parse JSON response");

    assert!(
        response.success,
        "Expected successful response but got error: {:?}",
        response.message
    );
    response.data.expect("Expected data in successful response")
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
