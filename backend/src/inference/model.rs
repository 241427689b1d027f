use ndarray::Array4;
use serde::Deserialize;
use shared::BodyArea;
use std::collections::HashMap;
use std::path::Path;

use super::InferenceError;
use super::config::ModelsConfig;
use super::preprocess::preprocess;

pub const DEFAULT_INPUT_SIZE: [u32; 2] = [224, 224];

/// A classifier scoring one preprocessed image batch.
pub trait XrayModel: Send + Sync {
    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>, InferenceError>;
}

/// How the raw model output collapses into a single confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    First,
    Max,
}

impl Reduction {
    /// A NaN anywhere in the output makes the maximum NaN.
    pub fn apply(&self, outputs: &[f32]) -> Option<f32> {
        match self {
            Reduction::First => outputs.first().copied(),
            Reduction::Max => outputs.iter().copied().reduce(|max, value| {
                if max.is_nan() || value.is_nan() {
                    f32::NAN
                } else {
                    max.max(value)
                }
            }),
        }
    }
}

struct AreaModel {
    model: Box<dyn XrayModel>,
    reduction: Reduction,
}

pub struct ModelRegistry {
    models: HashMap<BodyArea, AreaModel>,
    input_size: [u32; 2],
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_SIZE)
    }
}

impl ModelRegistry {
    pub fn new(input_size: [u32; 2]) -> Self {
        Self {
            models: HashMap::new(),
            input_size,
        }
    }

    pub fn insert(&mut self, area: BodyArea, model: Box<dyn XrayModel>, reduction: Reduction) {
        self.models.insert(area, AreaModel { model, reduction });
    }

    pub fn is_loaded(&self, area: BodyArea) -> bool {
        self.models.contains_key(&area)
    }

    /// Loads every configured area. An area whose model cannot be loaded is
    /// left out and answers with `Unavailable`.
    pub fn from_config(config: &ModelsConfig) -> Self {
        let mut registry = Self::new(config.image.size);
        let areas = match config.areas() {
            Ok(areas) => areas,
            Err(e) => {
                log::error!("Skipping model loading: {}", e);
                return registry;
            }
        };

        for (area, spec) in areas {
            match load_model(&spec.path) {
                Ok(model) => {
                    log::info!("Loaded {} model from {}", area, spec.path.display());
                    registry.insert(area, model, spec.reduction);
                }
                Err(e) => {
                    log::error!("Failed to load {} model from {}: {}", area, spec.path.display(), e);
                }
            }
        }

        registry
    }

    pub fn predict(&self, area: BodyArea, image: &[u8]) -> Result<f64, InferenceError> {
        let entry = self
            .models
            .get(&area)
            .ok_or(InferenceError::Unavailable(area))?;

        let input = preprocess(image, self.input_size)?;
        let outputs = entry.model.forward(&input)?;
        let score = entry
            .reduction
            .apply(&outputs)
            .ok_or(InferenceError::EmptyOutput)?;

        if !score.is_finite() {
            return Err(InferenceError::NonFinite(score));
        }
        Ok(score as f64)
    }
}

#[cfg(feature = "torch")]
fn load_model(path: &Path) -> Result<Box<dyn XrayModel>, InferenceError> {
    Ok(Box::new(super::torch::TorchModel::load(path)?))
}

#[cfg(not(feature = "torch"))]
fn load_model(_path: &Path) -> Result<Box<dyn XrayModel>, InferenceError> {
    Err(InferenceError::TorchDisabled)
}
