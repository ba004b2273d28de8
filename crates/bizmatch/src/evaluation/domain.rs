use serde::{Deserialize, Serialize};

/// Business idea or profile submitted for grading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    pub description: String,
    #[serde(default)]
    pub funding_needed: Option<f64>,
    #[serde(default)]
    pub industry: Option<String>,
}

impl EvaluationRequest {
    /// Request carrying only the free-text idea, as sent by the quick-score form.
    pub fn from_idea(idea: impl Into<String>) -> Self {
        Self {
            description: idea.into(),
            ..Self::default()
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Which prompt and response shape the gateway uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Simple,
    Structured,
}

impl EvaluationMode {
    /// Low for numeric stability, higher for varied prose in the analysis.
    pub fn temperature(self) -> f32 {
        match self {
            EvaluationMode::Simple => 0.2,
            EvaluationMode::Structured => 0.7,
        }
    }

    pub fn max_tokens(self) -> Option<u32> {
        match self {
            EvaluationMode::Simple => None,
            EvaluationMode::Structured => Some(1000),
        }
    }
}

/// Quick score on the 10-100 scale, always a multiple of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleRating {
    pub score: u8,
}

impl SimpleRating {
    pub const FALLBACK_GRADE: u8 = 5;
    pub const MIN_GRADE: u8 = 1;
    pub const MAX_GRADE: u8 = 10;

    /// Scales a 1-10 grade; out-of-range grades are clamped first.
    pub fn from_grade(grade: u8) -> Self {
        let grade = grade.clamp(Self::MIN_GRADE, Self::MAX_GRADE);
        Self { score: grade * 10 }
    }

    pub fn fallback() -> Self {
        Self::from_grade(Self::FALLBACK_GRADE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentPotential {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Detailed qualitative rating produced by structured mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRating {
    pub score: u8,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    pub investment_potential: InvestmentPotential,
}

impl StructuredRating {
    pub const MIN_SCORE: u8 = 1;
    pub const MAX_SCORE: u8 = 100;
}

/// Rating returned to callers, in the shape of the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizedRating {
    Simple(SimpleRating),
    Structured(StructuredRating),
}

impl NormalizedRating {
    pub fn score(&self) -> u8 {
        match self {
            NormalizedRating::Simple(rating) => rating.score,
            NormalizedRating::Structured(rating) => rating.score,
        }
    }
}
