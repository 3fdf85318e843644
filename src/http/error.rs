use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::customer::{ResponseEnvelope, RestCustomer};

/// Errors that abort a request before or outside the customer service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Infrastructure details stay in the logs
        let message = match self {
            ApiError::MalformedBody(_) => self.to_string(),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                "Internal server error".to_string()
            }
        };

        let body: ResponseEnvelope<RestCustomer> = ResponseEnvelope::failure([message]);
        HttpResponse::build(self.status_code()).json(body)
    }
}
