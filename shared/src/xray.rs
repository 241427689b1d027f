use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Body areas the X-ray page can classify. Each one has its own model
/// behind its own prediction endpoint. The strum names are the endpoint
/// path segments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum BodyArea {
    #[strum(serialize = "kidney")]
    Kidney,
    #[strum(serialize = "lung")]
    Lungs,
    #[strum(serialize = "bones")]
    Bones,
}

impl fmt::Display for BodyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl BodyArea {
    /// Last path segment of the area's prediction endpoint.
    pub fn path_segment(&self) -> &'static str {
        (*self).into()
    }

    pub fn endpoint(&self) -> String {
        format!("/predict/xray/{}", self.path_segment())
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        segment.parse().ok()
    }
}

/// Body of a successful `POST /predict/xray/{area}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub confidence: f64,
}

impl PredictionResponse {
    /// Buckets the score. A non-finite confidence is a malformed response.
    pub fn into_result(self) -> Option<PredictionResult> {
        if !self.confidence.is_finite() {
            return None;
        }
        Some(PredictionResult {
            confidence: self.confidence,
            assessment: Assessment::from_confidence(self.confidence),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    HighLikelihood,
    Inconclusive,
    NoAbnormality,
}

impl Assessment {
    pub const HIGH_THRESHOLD: f64 = 0.75;
    pub const INCONCLUSIVE_THRESHOLD: f64 = 0.40;

    /// Lower bounds are inclusive: 0.75 is already "high", 0.40 already
    /// "inconclusive".
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= Self::HIGH_THRESHOLD {
            Assessment::HighLikelihood
        } else if confidence >= Self::INCONCLUSIVE_THRESHOLD {
            Assessment::Inconclusive
        } else {
            Assessment::NoAbnormality
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Assessment::HighLikelihood => "High likelihood of abnormality detected",
            Assessment::Inconclusive => "Inconclusive evaluation recommended",
            Assessment::NoAbnormality => "No significant abnormality detected",
        }
    }

    /// Alert, warning and success colors respectively.
    pub fn color(&self) -> &'static str {
        match self {
            Assessment::HighLikelihood => "#ff6b6b",
            Assessment::Inconclusive => "#facc15",
            Assessment::NoAbnormality => "#4ade80",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub confidence: f64,
    pub assessment: Assessment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn high_threshold_is_inclusive() {
        let assessment = Assessment::from_confidence(0.75);
        assert_eq!(assessment, Assessment::HighLikelihood);
        assert_eq!(assessment.label(), "High likelihood of abnormality detected");
        assert_eq!(assessment.color(), "#ff6b6b");
    }

    #[test]
    fn just_below_high_is_inconclusive() {
        let assessment = Assessment::from_confidence(0.74999);
        assert_eq!(assessment, Assessment::Inconclusive);
        assert_eq!(assessment.label(), "Inconclusive evaluation recommended");
        assert_eq!(assessment.color(), "#facc15");
    }

    #[test]
    fn inconclusive_threshold_is_inclusive() {
        assert_eq!(Assessment::from_confidence(0.40), Assessment::Inconclusive);
        assert_eq!(Assessment::from_confidence(0.3999), Assessment::NoAbnormality);
    }

    #[test]
    fn zero_is_no_abnormality() {
        let assessment = Assessment::from_confidence(0.0);
        assert_eq!(assessment.label(), "No significant abnormality detected");
        assert_eq!(assessment.color(), "#4ade80");
    }

    #[test]
    fn endpoints_follow_area() {
        assert_eq!(BodyArea::Kidney.endpoint(), "/predict/xray/kidney");
        assert_eq!(BodyArea::Lungs.endpoint(), "/predict/xray/lung");
        assert_eq!(BodyArea::Bones.endpoint(), "/predict/xray/bones");
    }

    #[test]
    fn path_segments_parse_back() {
        for area in BodyArea::iter() {
            assert_eq!(BodyArea::from_path_segment(area.path_segment()), Some(area));
        }
        assert_eq!(BodyArea::from_path_segment("lungs"), None);
        assert_eq!(BodyArea::from_path_segment("heart"), None);
        assert_eq!(BodyArea::from_path_segment("Lung"), None);
    }

    #[test]
    fn areas_display_in_button_order() {
        let names: Vec<String> = BodyArea::iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["Kidney", "Lungs", "Bones"]);
    }

    #[test]
    fn response_parses_and_buckets() {
        let response: PredictionResponse = serde_json::from_str(r#"{"confidence": 0.82}"#).unwrap();
        let result = response.into_result().unwrap();
        assert_eq!(result.confidence, 0.82);
        assert_eq!(result.assessment, Assessment::HighLikelihood);
    }

    #[test]
    fn error_body_is_not_a_prediction() {
        let parsed = serde_json::from_str::<PredictionResponse>(r#"{"error": "No file uploaded"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn non_finite_confidence_is_rejected() {
        assert!(PredictionResponse { confidence: f64::NAN }.into_result().is_none());
        assert!(PredictionResponse { confidence: f64::INFINITY }.into_result().is_none());
    }
}
