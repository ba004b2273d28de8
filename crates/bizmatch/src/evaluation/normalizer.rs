use serde::Deserialize;

use super::domain::{
    EvaluationMode, InvestmentPotential, NormalizedRating, RiskLevel, SimpleRating,
    StructuredRating,
};
use super::error::EvaluationError;

/// Maps raw completion text into the rating domain of `mode`.
pub fn normalize(raw: &str, mode: EvaluationMode) -> Result<NormalizedRating, EvaluationError> {
    match mode {
        EvaluationMode::Simple => Ok(NormalizedRating::Simple(normalize_simple(raw).rating)),
        EvaluationMode::Structured => normalize_structured(raw).map(NormalizedRating::Structured),
    }
}

/// Simple-mode normalization result; `fallback` is set when the grade could
/// not be read and the midpoint was substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleNormalization {
    pub rating: SimpleRating,
    pub fallback: Option<EvaluationError>,
}

pub fn normalize_simple(raw: &str) -> SimpleNormalization {
    match leading_integer(raw) {
        Some(grade) if grade != 0 => {
            let grade = grade.clamp(
                i64::from(SimpleRating::MIN_GRADE),
                i64::from(SimpleRating::MAX_GRADE),
            ) as u8;
            SimpleNormalization {
                rating: SimpleRating::from_grade(grade),
                fallback: None,
            }
        }
        _ => SimpleNormalization {
            rating: SimpleRating::fallback(),
            fallback: Some(EvaluationError::Parse(format!(
                "expected an integer grade, got '{}'",
                raw.trim()
            ))),
        },
    }
}

/// Reads an optional sign followed by leading digits, ignoring anything after
/// them, so `"7/10"` yields 7. Values too large for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStructuredRating {
    score: f64,
    analysis: String,
    recommendations: Vec<String>,
    risk_level: RiskLevel,
    investment_potential: InvestmentPotential,
}

/// Strict JSON parse of the five-field report; no per-field recovery.
pub fn normalize_structured(raw: &str) -> Result<StructuredRating, EvaluationError> {
    let parsed: RawStructuredRating = serde_json::from_str(raw.trim())
        .map_err(|err| EvaluationError::Parse(format!("invalid structured rating: {err}")))?;

    // `82.0` is accepted, `82.5` is not.
    if parsed.score.fract() != 0.0 {
        return Err(EvaluationError::Parse(format!(
            "score {} is not a whole number",
            parsed.score
        )));
    }
    let min = f64::from(StructuredRating::MIN_SCORE);
    let max = f64::from(StructuredRating::MAX_SCORE);
    if !(min..=max).contains(&parsed.score) {
        return Err(EvaluationError::Parse(format!(
            "score {} is outside {min}-{max}",
            parsed.score
        )));
    }

    Ok(StructuredRating {
        score: parsed.score as u8,
        analysis: parsed.analysis,
        recommendations: parsed.recommendations,
        risk_level: parsed.risk_level,
        investment_potential: parsed.investment_potential,
    })
}
