use actix_web::{HttpRequest, HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::{LoginInput, RegisterInput, TeamResponse};
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestIdExt;

pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterInput>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let register_request = request.into_inner();

    log::info!(
        "[{}] Registration request for {} (logo attached: {})",
        req.request_id().unwrap_or_default(),
        register_request.email,
        register_request.logo_base64.is_some()
    );

    let team = state.auth_service.register(register_request).await?;

    Ok(ApiResponse::created(
        TeamResponse { team },
        "Registration successful",
    ))
}

pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginInput>,
) -> Result<HttpResponse> {
    let response = state.auth_service.login(request.into_inner()).await?;

    Ok(ApiResponse::success(response))
}
