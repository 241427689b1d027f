use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Fixed answer of `POST /predict/lung-risk`; the lung questionnaire has no
/// model behind it.
pub const LUNG_RISK_PERCENTAGE: f64 = 45.0;

/// Questionnaires scored by a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum RiskKind {
    Heart,
    Diabetes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum YesNo {
    Yes,
    No,
}

/// Male and unrecognized answers encode as 0, Female as 1.
pub fn gender_code(answer: Option<&str>) -> f64 {
    match answer.and_then(|a| a.parse().ok()) {
        Some(Gender::Female) => 1.0,
        Some(Gender::Male) | None => 0.0,
    }
}

/// Yes encodes as 1, No and unrecognized answers as 0.
pub fn yes_no_code(answer: Option<&str>) -> f64 {
    match answer.and_then(|a| a.parse().ok()) {
        Some(YesNo::Yes) => 1.0,
        Some(YesNo::No) | None => 0.0,
    }
}

/// Body mass index rounded to two decimals, or 0 when either measurement is
/// missing or not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg > 0.0 && height_cm > 0.0 {
        round2(weight_kg / (height_cm / 100.0).powi(2))
    } else {
        0.0
    }
}

/// Decades of age, capped at 9.
pub fn age_category(age: f64) -> f64 {
    (age.trunc() / 10.0).floor().min(9.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} is not a number: {value:?}")]
pub struct InvalidAnswer {
    pub field: &'static str,
    pub value: String,
}

/// A numeric form answer. Form inputs post numbers as strings, so both
/// shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

fn number(field: &'static str, answer: &Option<Measure>) -> Result<f64, InvalidAnswer> {
    match answer {
        None => Ok(0.0),
        Some(Measure::Number(value)) => Ok(*value),
        Some(Measure::Text(text)) => text.trim().parse().map_err(|_| InvalidAnswer {
            field,
            value: text.clone(),
        }),
    }
}

/// Named model inputs, in the order the model was trained on.
pub type Features = Vec<(&'static str, f64)>;

/// A questionnaire body that turns into model features.
pub trait RiskQuestionnaire {
    const KIND: RiskKind;

    fn features(&self) -> Result<Features, InvalidAnswer>;
}

/// Body of `POST /predict/heart`. Missing answers count as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartRiskRequest {
    pub gender: Option<String>,
    pub age: Option<Measure>,
    pub weight_kg: Option<Measure>,
    pub height_cm: Option<Measure>,
    pub exercise: Option<String>,
}

impl RiskQuestionnaire for HeartRiskRequest {
    const KIND: RiskKind = RiskKind::Heart;

    fn features(&self) -> Result<Features, InvalidAnswer> {
        Ok(vec![
            ("Sex", gender_code(self.gender.as_deref())),
            ("Age_Category", age_category(number("age", &self.age)?)),
            (
                "BMI",
                bmi(number("weight_kg", &self.weight_kg)?, number("height_cm", &self.height_cm)?),
            ),
            ("Exercise", yes_no_code(self.exercise.as_deref())),
        ])
    }
}

/// Body of `POST /predict/diabetes`. Missing answers count as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiabetesRiskRequest {
    pub gender: Option<String>,
    pub age: Option<Measure>,
    pub weight_kg: Option<Measure>,
    pub height_cm: Option<Measure>,
    pub exercise: Option<String>,
    pub hba1c_level: Option<Measure>,
    pub blood_glucose_level: Option<Measure>,
}

impl RiskQuestionnaire for DiabetesRiskRequest {
    const KIND: RiskKind = RiskKind::Diabetes;

    fn features(&self) -> Result<Features, InvalidAnswer> {
        Ok(vec![
            ("gender", gender_code(self.gender.as_deref())),
            ("age", number("age", &self.age)?.trunc()),
            (
                "bmi",
                bmi(number("weight_kg", &self.weight_kg)?, number("height_cm", &self.height_cm)?),
            ),
            ("exercise", yes_no_code(self.exercise.as_deref())),
            ("hba1c_level", number("hba1c_level", &self.hba1c_level)?),
            ("blood_glucose_level", number("blood_glucose_level", &self.blood_glucose_level)?),
        ])
    }
}

/// Body of every risk endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskResponse {
    pub risk_percentage: f64,
}

impl RiskResponse {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            risk_percentage: round2(probability * 100.0),
        }
    }

    pub fn lung() -> Self {
        Self {
            risk_percentage: LUNG_RISK_PERCENTAGE,
        }
    }
}
