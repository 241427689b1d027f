use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::{BodyArea, Hotspot, PredictionResponse, PredictionResult};

/// Base address of the prediction and data API, fixed at build time.
pub const API_BASE: &str = match option_env!("AAROGYA_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:5000",
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Uploads `file` to the area's prediction endpoint and buckets the returned
/// confidence.
pub async fn predict_xray(area: BodyArea, file: &GlooFile) -> Result<PredictionResult, ApiError> {
    let form_data =
        web_sys::FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;

    let url = format!("{}{}", API_BASE, area.endpoint());
    let response = Request::post(&url).body(form_data)?.send().await?;
    let response = ensure_ok(response).await?;

    let body = response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    body.into_result()
        .ok_or_else(|| ApiError::Malformed(format!("confidence {}", body.confidence)))
}

pub async fn fetch_hotspots() -> Result<Vec<Hotspot>, ApiError> {
    let url = format!("{}/api/heatmap-data", API_BASE);
    let response = Request::get(&url).send().await?;
    let response = ensure_ok(response).await?;

    response
        .json::<Vec<Hotspot>>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}
