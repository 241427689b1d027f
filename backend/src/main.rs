mod config;
mod error;
mod heatmap;
mod inference;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::Config;
use heatmap::HeatmapSource;
use inference::config::{ModelsConfig, ModelsConfigError};
use inference::model::ModelRegistry;
use inference::risk::RiskRegistry;
use routes::{UploadLimit, configure_routes};
use shared::{BodyArea, RiskKind};
use strum::IntoEnumIterator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let models = match ModelsConfig::load(&config.models_config_path) {
        Ok(models) => {
            log::info!("Models config version {}", models.version);
            Some(models)
        }
        Err(ModelsConfigError::Read { path, source }) => {
            log::warn!("No models config at {} ({}), predictions disabled", path, source);
            None
        }
        Err(e) => {
            log::error!("Failed to load models config: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };
    let registry = models.as_ref().map(ModelRegistry::from_config).unwrap_or_default();
    let risk = models
        .as_ref()
        .map(|models| RiskRegistry::from_config(&models.risk))
        .unwrap_or_default();

    for area in BodyArea::iter() {
        if !registry.is_loaded(area) {
            log::warn!("{} predictions will answer 503", area);
        }
    }
    for kind in RiskKind::iter() {
        if !risk.is_loaded(kind) {
            log::warn!("{} risk predictions will answer 0%", kind);
        }
    }
    let registry = web::Data::new(registry);
    let risk = web::Data::new(risk);
    let upload_limit = web::Data::new(UploadLimit(config.max_upload_bytes));
    let heatmap = web::Data::new(HeatmapSource::new(config.heatmap_data_path.clone()));
    let frontend_dir = config.frontend_dir.clone();

    log::info!("Heatmap data: {}", config.heatmap_data_path.display());
    log::info!("Serving frontend from {}", frontend_dir.display());

    let bind_address = format!("0.0.0.0:{}", config.port);
    log::info!("Aarogya AI backend starting on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(registry.clone())
            .app_data(risk.clone())
            .app_data(upload_limit.clone())
            .app_data(heatmap.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
