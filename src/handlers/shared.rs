use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Envelope shared by every JSON response of the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    // 200 with data
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::data(data))
    }

    // 201 with data and message
    pub fn created(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(Self {
            success: true,
            data: Some(data),
            message: Some(message.to_string()),
            code: None,
        })
    }

    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            code: None,
        }
    }
}

impl ApiResponse<()> {
    // Error response (no data)
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
            code: None,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }
}
