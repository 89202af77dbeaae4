pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod regions;
pub mod services;

pub use config::Config;
pub use services::{AuthService, DirectoryCache, ImageStore};

pub struct AppState {
    pub auth_service: AuthService,
    pub image_store: ImageStore,
}

impl AppState {
    /// Wires the services for a database pool and configuration.
    pub fn new(pool: sqlx::SqlitePool, config: &Config) -> Self {
        let image_store = ImageStore::from_config(config);
        let directory_cache = DirectoryCache::new(std::time::Duration::from_secs(
            config.directory_cache_ttl_secs,
        ));
        let auth_service = AuthService::new(
            database::repositories::TeamRepository::new(pool),
            image_store.clone(),
            directory_cache,
            config.bcrypt_cost,
        );

        Self {
            auth_service,
            image_store,
        }
    }
}
