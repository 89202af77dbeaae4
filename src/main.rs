use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, middleware::from_fn, web};
use anyhow::Result;

use scrimfinder::database::init_database;
use scrimfinder::middleware::request_id;
use scrimfinder::{AppState, Config, handlers};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Scrim Finder API server...");

    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    let app_state = web::Data::new(AppState::new(pool, &config));

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        let cors = if config.allowed_origin == "*" {
            Cors::default().allow_any_origin()
        } else {
            Cors::default().allowed_origin(&config.allowed_origin)
        };

        App::new()
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().limit(config.max_body_bytes))
            .wrap(
                cors.allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Accept", "X-Request-ID"])
                    .max_age(3600),
            )
            .wrap(from_fn(request_id))
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{User-Agent}i" %T request_id=%{x-request-id}o"#,
            ))
            .configure(handlers::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
