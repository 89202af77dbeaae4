use actix_web::{HttpResponse, Responder, get, web};

pub mod auth;
pub mod media;
pub mod shared;
pub mod teams;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(
            web::scope("/api")
                .route("/login", web::post().to(auth::login))
                .route("/register", web::post().to(auth::register))
                .route("/teams", web::get().to(teams::get_teams))
                .route(
                    "/teams/{id}/status",
                    web::put().to(teams::update_team_status),
                ),
        )
        .route("/media/{file}", web::get().to(media::get_media));
}
