use std::env;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidVar { key: &'static str, value: String },
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub heatmap_data_path: PathBuf,
    pub models_config_path: PathBuf,
    pub frontend_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Reads the environment (after `.env` has been loaded). Unset paths
    /// default to the workspace layout next to this crate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = workspace_root();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidVar { key: "PORT", value })?,
            Err(_) => {
                log::info!("PORT not set, using default: 5000");
                5000
            }
        };

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                key: "MAX_UPLOAD_BYTES",
                value,
            })?,
            Err(_) => {
                log::info!("MAX_UPLOAD_BYTES not set, using default: {}", DEFAULT_MAX_UPLOAD_BYTES);
                DEFAULT_MAX_UPLOAD_BYTES
            }
        };

        Ok(Self {
            port,
            heatmap_data_path: path_var("HEATMAP_DATA_PATH", root.join("data/disease_data.json")),
            models_config_path: path_var("MODELS_CONFIG", root.join("config/models.yaml")),
            frontend_dir: path_var("FRONTEND_DIR", root.join("frontend/dist")),
            max_upload_bytes,
        })
    }
}

fn workspace_root() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(manifest_dir).join("..")
    } else {
        PathBuf::from("/usr/src/app")
    }
}

fn path_var(key: &str, default: PathBuf) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| {
        log::info!("{} not set, using default: {}", key, default.display());
        default
    })
}
