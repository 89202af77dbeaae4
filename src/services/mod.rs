pub mod auth;
pub mod directory_cache;
pub mod image_store;

pub use auth::AuthService;
pub use directory_cache::DirectoryCache;
pub use image_store::ImageStore;
