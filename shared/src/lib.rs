pub mod hotspot;
pub mod map;
pub mod risk;
pub mod upload;
pub mod xray;

pub use hotspot::{CircleOverlay, Hotspot, HotspotLoad, HOTSPOT_RADIUS_SCALE};
pub use map::{LatLng, MapView, Tile};
pub use risk::{
    DiabetesRiskRequest, HeartRiskRequest, InvalidAnswer, Measure, RiskKind, RiskQuestionnaire,
    RiskResponse,
};
pub use upload::{UploadSelection, BACKEND_FAILURE_NOTICE};
pub use xray::{Assessment, BodyArea, PredictionResponse, PredictionResult};
