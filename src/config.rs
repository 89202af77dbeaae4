use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub allowed_origin: String,
    pub media_dir: String,
    pub media_base_url: String,
    pub bcrypt_cost: u32,
    pub directory_cache_ttl_secs: u64,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./scrimfinder.db".to_string()),
            media_base_url: env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}/media", host, port)),
            host,
            port,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            media_dir: env::var("MEDIA_DIR").unwrap_or_else(|_| "./media".to_string()),
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            directory_cache_ttl_secs: env::var("DIRECTORY_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse()
                .unwrap_or(10 * 1024 * 1024),
        })
    }

    /// Fixed configuration for tests: in-memory database, cheapest bcrypt cost.
    pub fn test_config() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            allowed_origin: "*".to_string(),
            media_dir: env::temp_dir()
                .join("scrimfinder-test-media")
                .display()
                .to_string(),
            media_base_url: "http://localhost/media".to_string(),
            bcrypt_cost: 4,
            directory_cache_ttl_secs: 30,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
