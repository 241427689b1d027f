use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::heatmap::HeatmapError;
use crate::inference::InferenceError;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Upload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
    #[error("Unknown body area: {0}")]
    UnknownArea(String),
    #[error("Upload error: {0}")]
    Upload(#[from] actix_multipart::MultipartError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Heatmap(#[from] HeatmapError),
    #[error("Worker pool error: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnknownArea(_) => StatusCode::NOT_FOUND,
            ApiError::Inference(InferenceError::Decode(_)) => StatusCode::BAD_REQUEST,
            ApiError::Inference(InferenceError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Inference(_) | ApiError::Heatmap(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
