use shared::Hotspot;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed heatmap data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON file holding the hotspot array. Re-read on every request so the
/// file can be swapped while the server runs.
#[derive(Debug, Clone)]
pub struct HeatmapSource {
    path: PathBuf,
}

impl HeatmapSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Vec<Hotspot>, HeatmapError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| HeatmapError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
