use serde::Deserialize;
use shared::risk::Features;
use shared::{InvalidAnswer, RiskKind};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("No {0} risk model configured")]
    Unavailable(RiskKind),
    #[error("Malformed questionnaire: {0}")]
    Request(#[from] serde_json::Error),
    #[error(transparent)]
    Answer(#[from] InvalidAnswer),
    #[error("Model returned a non-finite probability: {0}")]
    NonFinite(f64),
}

/// Probability of the positive class for one questionnaire.
pub trait RiskModel: Send + Sync {
    fn probability(&self, features: &Features) -> Result<f64, RiskError>;
}

/// Exported logistic regression. Features without a coefficient contribute
/// nothing; coefficients without a feature see an input of 0.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    pub intercept: f64,
    #[serde(default)]
    pub coefficients: HashMap<String, f64>,
}

impl RiskModel for LogisticModel {
    fn probability(&self, features: &Features) -> Result<f64, RiskError> {
        let logit = features
            .iter()
            .filter_map(|(name, value)| self.coefficients.get(*name).map(|c| c * value))
            .fold(self.intercept, |sum, term| sum + term);
        let probability = 1.0 / (1.0 + (-logit).exp());

        if !probability.is_finite() {
            return Err(RiskError::NonFinite(probability));
        }
        Ok(probability)
    }
}

/// `risk` section of the models config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskConfig {
    pub heart: Option<LogisticModel>,
    pub diabetes: Option<LogisticModel>,
}

#[derive(Default)]
pub struct RiskRegistry {
    models: HashMap<RiskKind, Box<dyn RiskModel>>,
}

impl RiskRegistry {
    pub fn insert(&mut self, kind: RiskKind, model: Box<dyn RiskModel>) {
        self.models.insert(kind, model);
    }

    pub fn is_loaded(&self, kind: RiskKind) -> bool {
        self.models.contains_key(&kind)
    }

    pub fn from_config(config: &RiskConfig) -> Self {
        let mut registry = Self::default();
        for (kind, model) in [
            (RiskKind::Heart, &config.heart),
            (RiskKind::Diabetes, &config.diabetes),
        ] {
            if let Some(model) = model {
                log::info!("Loaded {} risk model ({} coefficients)", kind, model.coefficients.len());
                registry.insert(kind, Box::new(model.clone()));
            }
        }
        registry
    }

    pub fn score(&self, kind: RiskKind, features: &Features) -> Result<f64, RiskError> {
        self.models
            .get(&kind)
            .ok_or(RiskError::Unavailable(kind))?
            .probability(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(intercept: f64, coefficients: &[(&str, f64)]) -> LogisticModel {
        LogisticModel {
            intercept,
            coefficients: coefficients.iter().map(|(n, c)| (n.to_string(), *c)).collect(),
        }
    }

    #[test]
    fn zero_logit_is_even_odds() {
        let p = model(0.0, &[]).probability(&vec![("BMI", 30.0)]).unwrap();
        assert_eq!(p, 0.5);
    }

    #[test]
    fn coefficients_weight_named_features() {
        let m = model(-1.0, &[("age", 0.5), ("bmi", 0.0)]);
        let p = m.probability(&vec![("age", 2.0), ("bmi", 40.0), ("gender", 1.0)]).unwrap();
        assert_eq!(p, 0.5);

        let higher = m.probability(&vec![("age", 4.0)]).unwrap();
        assert!(higher > 0.5);
    }

    #[test]
    fn nan_feature_is_an_error() {
        let m = model(0.0, &[("age", 1.0)]);
        let result = m.probability(&vec![("age", f64::NAN)]);
        assert!(matches!(result, Err(RiskError::NonFinite(_))));
    }

    #[test]
    fn unconfigured_kind_is_unavailable() {
        let registry = RiskRegistry::from_config(&RiskConfig {
            heart: Some(model(0.0, &[])),
            diabetes: None,
        });
        assert!(registry.is_loaded(RiskKind::Heart));
        assert!(matches!(
            registry.score(RiskKind::Diabetes, &vec![]),
            Err(RiskError::Unavailable(RiskKind::Diabetes))
        ));
    }
}
