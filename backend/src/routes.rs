use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::{
    BodyArea, DiabetesRiskRequest, HeartRiskRequest, PredictionResponse, RiskQuestionnaire,
    RiskResponse,
};
use std::path::PathBuf;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::error::ApiError;
use crate::heatmap::HeatmapSource;
use crate::inference::model::ModelRegistry;
use crate::inference::risk::{RiskError, RiskRegistry};

/// Largest accepted X-ray upload, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

impl Default for UploadLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(status)))
        .service(web::resource("/predict/xray/{area}").route(web::post().to(predict_xray)))
        .service(
            web::resource("/predict/heart").route(web::post().to(predict_risk::<HeartRiskRequest>)),
        )
        .service(
            web::resource("/predict/diabetes")
                .route(web::post().to(predict_risk::<DiabetesRiskRequest>)),
        )
        .service(web::resource("/predict/lung-risk").route(web::post().to(lung_risk)))
        .service(web::resource("/api/heatmap-data").route(web::get().to(heatmap_data)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    cfg.service(Files::new("/static", frontend_dir).index_file("index.html"));
}

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "Aarogya AI Backend Running" }))
}

async fn predict_xray(
    path: web::Path<String>,
    registry: web::Data<ModelRegistry>,
    limit: web::Data<UploadLimit>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let segment = path.into_inner();
    let area = BodyArea::from_path_segment(&segment).ok_or(ApiError::UnknownArea(segment))?;

    let image = read_file_field(payload, limit.0)
        .await?
        .ok_or(ApiError::MissingFile)?;
    info!("Received {} byte {} X-ray", image.len(), area);

    let confidence = web::block(move || registry.predict(area, &image))
        .await?
        .map_err(|e| {
            error!("{} prediction failed: {}", area, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(PredictionResponse { confidence }))
}

/// Returns the bytes of the multipart field named `file`, skipping any other
/// fields. An empty upload counts as no upload; one over `limit` bytes is
/// rejected as soon as it crosses the limit.
async fn read_file_field(
    mut payload: Multipart,
    limit: usize,
) -> Result<Option<Vec<u8>>, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        let is_file = field.name() == Some("file");
        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if is_file {
                if data.len() + chunk.len() > limit {
                    return Err(ApiError::PayloadTooLarge { limit });
                }
                data.extend_from_slice(&chunk);
            }
        }
        if is_file && !data.is_empty() {
            return Ok(Some(data));
        }
    }
    Ok(None)
}

async fn heatmap_data(source: web::Data<HeatmapSource>) -> Result<HttpResponse, ApiError> {
    let hotspots = web::block(move || source.load()).await?.map_err(|e| {
        error!("Heatmap data unavailable: {}", e);
        e
    })?;
    Ok(HttpResponse::Ok().json(hotspots))
}

/// Scores a questionnaire. Any failure answers 0% rather than an error
/// status, so the quiz always has a number to show.
async fn predict_risk<Q>(body: web::Bytes, risk: web::Data<RiskRegistry>) -> HttpResponse
where
    Q: RiskQuestionnaire + DeserializeOwned,
{
    let outcome = serde_json::from_slice::<Q>(&body)
        .map_err(RiskError::from)
        .and_then(|answers| risk.score(Q::KIND, &answers.features()?));

    let response = match outcome {
        Ok(probability) => RiskResponse::from_probability(probability),
        Err(e) => {
            error!("{} risk scoring failed: {}", Q::KIND, e);
            RiskResponse::default()
        }
    };
    HttpResponse::Ok().json(response)
}

async fn lung_risk() -> HttpResponse {
    HttpResponse::Ok().json(RiskResponse::lung())
}
