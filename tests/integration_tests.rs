use actix_web::{App, http::StatusCode, middleware::from_fn, test, web};
use pretty_assertions::assert_eq;
use scrimfinder::database::models::{LoginResponse, TeamResponse, TeamsResponse};
use scrimfinder::handlers;
use scrimfinder::middleware::{REQUEST_ID_HEADER, request_id};
use serde_json::json;

mod common;

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data($ctx.app_state())
                .app_data(web::JsonConfig::default().limit($ctx.config.max_body_bytes))
                .wrap(from_fn(request_id))
                .configure(handlers::configure),
        )
        .await
    };
}

fn registration(email: &str) -> serde_json::Value {
    json!({
        "teamName": "Garuda Esports",
        "email": email,
        "password": "password123",
        "country": "Indonesia",
        "province": "Bali",
        "whatsapp": "+6281234567890",
        "captainName": "Wayan"
    })
}

#[actix_web::test]
async fn test_register_endpoint() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("garuda@example.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["data"]["team"]["teamName"], "Garuda Esports");
    assert_eq!(body["data"]["team"]["status"], "available");
    assert!(body["data"]["team"].get("passwordHash").is_none());
    assert!(body["data"]["team"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_duplicate_register_endpoint() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(registration("a@b.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::CONFLICT {
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], "emailAlreadyExists");
        }
    }

    assert_eq!(ctx.team_repository.count_teams().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_register_rejects_invalid_input() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let mut body = registration("invalid@example.com");
    body["country"] = json!("Singapore");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_endpoint() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("login@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "login@example.com", "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let data: LoginResponse =
        common::assert_success_response(std::str::from_utf8(&body).unwrap());
    assert_eq!(data.team.email, "login@example.com");
    assert_eq!(data.all_teams.len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "login@example.com", "password": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_teams_endpoint_lists_newest_first() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    for email in ["one@example.com", "two@example.com"] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(registration(email))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let data: TeamsResponse = common::assert_success_response(std::str::from_utf8(&body).unwrap());
    assert_eq!(data.count, 2);
    let emails: Vec<&str> = data.teams.iter().map(|t| t.email.as_str()).collect();
    assert_eq!(emails, vec!["two@example.com", "one@example.com"]);
}

#[actix_web::test]
async fn test_status_endpoint() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("status@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let created: TeamResponse =
        common::assert_success_response(std::str::from_utf8(&body).unwrap());

    let req = test::TestRequest::put()
        .uri(&format!("/api/teams/{}/status", created.team.id))
        .set_json(json!({
            "email": "status@example.com",
            "password": "password123",
            "status": "inMatch"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["team"]["status"], "inMatch");

    let req = test::TestRequest::put()
        .uri(&format!("/api/teams/{}/status", created.team.id))
        .set_json(json!({
            "email": "status@example.com",
            "password": "wrong",
            "status": "available"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_uploaded_logo_is_served() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let mut body = registration("logo@example.com");
    body["logoBase64"] = json!("data:image/png;base64,aGVsbG8=");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    let logo = body["data"]["team"]["logo"].as_str().unwrap();
    let file_name = logo.rsplit('/').next().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/media/{}", file_name))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/png");
    assert_eq!(test::read_body(resp).await.as_ref(), b"hello");

    let req = test::TestRequest::get()
        .uri("/media/missing.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_and_request_id() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((REQUEST_ID_HEADER, "trace-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-123");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
