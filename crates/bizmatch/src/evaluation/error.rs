/// Failure of a single evaluation.
///
/// Variants carry rendered messages rather than source errors so a degraded
/// simple-mode result can keep its cause alongside the fallback score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("business description must not be empty")]
    InvalidRequest,
    #[error("evaluation service is not configured: {0}")]
    Configuration(String),
    #[error("could not reach the evaluation service: {0}")]
    Transport(String),
    #[error("could not parse the evaluation response: {0}")]
    Parse(String),
}

impl EvaluationError {
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::InvalidRequest => "invalid_request",
            EvaluationError::Configuration(_) => "configuration",
            EvaluationError::Transport(_) => "transport",
            EvaluationError::Parse(_) => "parse",
        }
    }
}
