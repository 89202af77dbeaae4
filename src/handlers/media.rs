use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::error::AppError;
use crate::services::image_store::{ImageStoreError, mime_for_file};

pub async fn get_media(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let file_name = path.into_inner();

    let bytes = state
        .image_store
        .read(&file_name)
        .await
        .map_err(|e| match e {
            ImageStoreError::InvalidName(name) => {
                AppError::BadRequest(format!("Invalid file name: {}", name))
            }
            ImageStoreError::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("Media {} not found", file_name))
            }
            other => AppError::internal_server_error_message(other.to_string()),
        })?;

    Ok(HttpResponse::Ok()
        .content_type(mime_for_file(&file_name))
        .body(bytes))
}
