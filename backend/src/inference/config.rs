use serde::Deserialize;
use shared::BodyArea;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::model::Reduction;
use super::risk::RiskConfig;

#[derive(Debug, thiserror::Error)]
pub enum ModelsConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid models config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unknown body area in models config: {0}")]
    UnknownArea(String),
}

#[derive(Debug, Deserialize)]
pub struct ModelsConfig {
    pub version: u32,
    pub image: ImageConfig,
    /// Keyed by the endpoint path segment (`lung`, `bones`, `kidney`).
    pub models: HashMap<String, ModelSpec>,
    #[serde(default)]
    pub risk: RiskConfig,
}

#[derive(Debug, Deserialize)]
pub struct ImageConfig {
    pub size: [u32; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    pub path: PathBuf,
    pub reduction: Reduction,
}

impl ModelsConfig {
    /// Parses the YAML file and resolves model paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ModelsConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelsConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_yaml(&raw)?;
        if let Some(dir) = path.parent() {
            for spec in config.models.values_mut() {
                if spec.path.is_relative() {
                    spec.path = dir.join(&spec.path);
                }
            }
        }
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ModelsConfigError> {
        let config: ModelsConfig = serde_yaml::from_str(raw)?;
        config.areas()?;
        Ok(config)
    }

    pub fn areas(&self) -> Result<Vec<(BodyArea, &ModelSpec)>, ModelsConfigError> {
        self.models
            .iter()
            .map(|(segment, spec)| {
                BodyArea::from_path_segment(segment)
                    .map(|area| (area, spec))
                    .ok_or_else(|| ModelsConfigError::UnknownArea(segment.clone()))
            })
            .collect()
    }
}
