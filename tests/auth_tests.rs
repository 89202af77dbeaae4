use pretty_assertions::assert_eq;
use scrimfinder::database::models::{LoginInput, TeamStatus, UpdateStatusInput};
use scrimfinder::error::{AppError, EMAIL_ALREADY_EXISTS};
use scrimfinder::regions::Country;

mod common;

use common::MockData;

#[tokio::test]
async fn test_team_registration() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let request = MockData::registration("Register@Example.com");
    let team_name = request.team_name.clone();

    let team = ctx.auth_service.register(request).await.unwrap();

    assert_eq!(team.email, "register@example.com");
    assert_eq!(team.team_name, team_name);
    assert_eq!(team.country, Country::Indonesia);
    assert_eq!(team.whatsapp, "+6281234567890");
    assert_eq!(team.status, TeamStatus::Available);
    assert_eq!(team.logo, None);
}

#[tokio::test]
async fn test_duplicate_email_registration_adds_no_row() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    ctx.auth_service
        .register(MockData::registration("a@b.com"))
        .await
        .unwrap();
    assert_eq!(ctx.team_repository.count_teams().await.unwrap(), 1);

    let err = ctx
        .auth_service
        .register(MockData::malaysian_registration("a@b.com"))
        .await
        .unwrap_err();

    match err {
        AppError::Conflict { code, .. } => assert_eq!(code, EMAIL_ALREADY_EXISTS),
        other => panic!("expected conflict, got {:?}", other),
    }
    assert_eq!(ctx.team_repository.count_teams().await.unwrap(), 1);
}

#[tokio::test]
async fn test_registration_validation() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let short_password = scrimfinder::database::models::RegisterInput {
        password: "12345".to_string(),
        ..MockData::registration("short@example.com")
    };
    assert!(matches!(
        ctx.auth_service.register(short_password).await,
        Err(AppError::BadRequest(_))
    ));

    let wrong_province = scrimfinder::database::models::RegisterInput {
        province: "Johor".to_string(),
        ..MockData::registration("province@example.com")
    };
    assert!(matches!(
        ctx.auth_service.register(wrong_province).await,
        Err(AppError::BadRequest(_))
    ));

    let bad_phone = scrimfinder::database::models::RegisterInput {
        whatsapp: "12ab".to_string(),
        ..MockData::registration("phone@example.com")
    };
    assert!(matches!(
        ctx.auth_service.register(bad_phone).await,
        Err(AppError::BadRequest(_))
    ));

    assert_eq!(ctx.team_repository.count_teams().await.unwrap(), 0);
}

#[tokio::test]
async fn test_registration_stores_logo() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let request = scrimfinder::database::models::RegisterInput {
        logo_base64: Some("data:image/png;base64,aGVsbG8=".to_string()),
        ..MockData::registration("logo@example.com")
    };
    let team = ctx.auth_service.register(request).await.unwrap();

    let logo = team.logo.expect("logo url");
    assert!(logo.starts_with("http://localhost/media/"));
    assert!(logo.ends_with(".png"));
}

#[tokio::test]
async fn test_broken_logo_does_not_block_registration() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let request = scrimfinder::database::models::RegisterInput {
        logo_base64: Some("not a data url".to_string()),
        ..MockData::registration("broken-logo@example.com")
    };
    let team = ctx.auth_service.register(request).await.unwrap();

    assert_eq!(team.logo, None);
}

#[tokio::test]
async fn test_team_login_returns_directory() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let first = ctx
        .auth_service
        .register(MockData::registration("first@example.com"))
        .await
        .unwrap();
    let second = ctx
        .auth_service
        .register(MockData::malaysian_registration("second@example.com"))
        .await
        .unwrap();

    let response = ctx
        .auth_service
        .login(LoginInput {
            email: "first@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.team, first);
    let ids: Vec<i64> = response.all_teams.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_invalid_login() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    ctx.auth_service
        .register(MockData::registration("login@example.com"))
        .await
        .unwrap();

    let wrong_password = ctx
        .auth_service
        .login(LoginInput {
            email: "login@example.com".to_string(),
            password: "wrongpassword".to_string(),
        })
        .await;
    assert!(matches!(wrong_password, Err(AppError::Unauthorized(_))));

    let unknown = ctx
        .auth_service
        .login(LoginInput {
            email: "nobody@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await;
    assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn test_status_update_refreshes_directory() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let team = ctx
        .auth_service
        .register(MockData::registration("status@example.com"))
        .await
        .unwrap();
    // prime the cache
    assert_eq!(ctx.auth_service.directory().await.unwrap()[0].status, TeamStatus::Available);

    let updated = ctx
        .auth_service
        .update_status(
            team.id,
            UpdateStatusInput {
                email: "status@example.com".to_string(),
                password: "password123".to_string(),
                status: TeamStatus::Searching,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, TeamStatus::Searching);
    assert_eq!(ctx.auth_service.directory().await.unwrap()[0].status, TeamStatus::Searching);
}

#[tokio::test]
async fn test_status_update_requires_matching_team() {
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();

    let first = ctx
        .auth_service
        .register(MockData::registration("owner@example.com"))
        .await
        .unwrap();
    ctx.auth_service
        .register(MockData::registration("other@example.com"))
        .await
        .unwrap();

    let result = ctx
        .auth_service
        .update_status(
            first.id,
            UpdateStatusInput {
                email: "other@example.com".to_string(),
                password: "password123".to_string(),
                status: TeamStatus::InMatch,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}
