pub mod config;
pub mod model;
pub mod preprocess;
pub mod risk;
#[cfg(feature = "torch")]
pub mod torch;

use shared::BodyArea;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("No model loaded for {0}")]
    Unavailable(BodyArea),
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Model returned no output")]
    EmptyOutput,
    #[error("Model returned a non-finite score: {0}")]
    NonFinite(f32),
    #[cfg(not(feature = "torch"))]
    #[error("Built without the `torch` feature")]
    TorchDisabled,
    #[cfg(feature = "torch")]
    #[error("Model lock poisoned")]
    Poisoned,
    #[cfg(feature = "torch")]
    #[error("Torch error: {0}")]
    Torch(#[from] tch::TchError),
}
