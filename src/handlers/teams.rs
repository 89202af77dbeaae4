use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::{TeamResponse, TeamsResponse, UpdateStatusInput};
use crate::handlers::shared::ApiResponse;

pub async fn get_teams(state: web::Data<AppState>) -> Result<HttpResponse> {
    let teams = state.auth_service.directory().await?;

    Ok(ApiResponse::success(TeamsResponse {
        count: teams.len(),
        teams,
    }))
}

pub async fn update_team_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<UpdateStatusInput>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let team = state
        .auth_service
        .update_status(team_id, request.into_inner())
        .await?;

    Ok(ApiResponse::success(TeamResponse { team }))
}
