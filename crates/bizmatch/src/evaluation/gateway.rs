use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{
    EvaluationMode, EvaluationRequest, NormalizedRating, SimpleRating, StructuredRating,
};
use super::error::EvaluationError;
use super::normalizer::{normalize_simple, normalize_structured};
use super::prompt::{PromptTemplate, SYSTEM_PROMPT};
use super::transport::{ChatCompletionRequest, ChatEndpoint, ChatMessage, ChatTransport};
use crate::config::EvaluatorConfig;

/// Outcome of a simple-mode evaluation. `degraded` carries the transport or
/// parse failure that forced the fallback score, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEvaluation {
    pub rating: SimpleRating,
    pub degraded: Option<EvaluationError>,
}

/// Sends business profiles to the chat-completion API and normalizes the answer.
///
/// Each call is independent: one outbound request, no retry, no caching.
pub struct EvaluationGateway<T> {
    transport: Arc<T>,
    config: EvaluatorConfig,
}

impl<T> EvaluationGateway<T>
where
    T: ChatTransport + 'static,
{
    pub fn new(transport: Arc<T>, config: EvaluatorConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
        mode: EvaluationMode,
    ) -> Result<NormalizedRating, EvaluationError> {
        match mode {
            EvaluationMode::Simple => self
                .evaluate_simple(request)
                .await
                .map(|evaluation| NormalizedRating::Simple(evaluation.rating)),
            EvaluationMode::Structured => self
                .evaluate_structured(request)
                .await
                .map(NormalizedRating::Structured),
        }
    }

    /// Quick 10-100 score. Only invalid input and missing configuration are
    /// errors; transport and parse failures degrade to the fallback score.
    pub async fn evaluate_simple(
        &self,
        request: &EvaluationRequest,
    ) -> Result<SimpleEvaluation, EvaluationError> {
        let endpoint = self.preflight(request)?;

        let raw = match self
            .request_completion(&endpoint, request, EvaluationMode::Simple)
            .await
        {
            Ok(raw) => raw,
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "simple evaluation fell back to midpoint score");
                return Ok(SimpleEvaluation {
                    rating: SimpleRating::fallback(),
                    degraded: Some(err),
                });
            }
        };

        let normalized = normalize_simple(&raw);
        if let Some(err) = &normalized.fallback {
            warn!(kind = err.kind(), error = %err, "simple evaluation fell back to midpoint score");
        } else {
            info!(score = normalized.rating.score, "simple evaluation scored");
        }

        Ok(SimpleEvaluation {
            rating: normalized.rating,
            degraded: normalized.fallback,
        })
    }

    /// Detailed report. Every failure propagates; no rating is synthesized.
    pub async fn evaluate_structured(
        &self,
        request: &EvaluationRequest,
    ) -> Result<StructuredRating, EvaluationError> {
        let endpoint = self.preflight(request)?;
        let raw = self
            .request_completion(&endpoint, request, EvaluationMode::Structured)
            .await?;
        let rating = normalize_structured(&raw)?;
        info!(
            score = rating.score,
            risk_level = ?rating.risk_level,
            investment_potential = ?rating.investment_potential,
            "structured evaluation scored"
        );
        Ok(rating)
    }

    fn preflight(&self, request: &EvaluationRequest) -> Result<ChatEndpoint, EvaluationError> {
        if !request.has_description() {
            return Err(EvaluationError::InvalidRequest);
        }
        self.endpoint()
    }

    fn endpoint(&self) -> Result<ChatEndpoint, EvaluationError> {
        let url = self
            .config
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                EvaluationError::Configuration("EVALUATOR_API_URL is not set".to_string())
            })?;
        let api_key = self
            .config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                EvaluationError::Configuration("EVALUATOR_API_KEY is not set".to_string())
            })?;
        Ok(ChatEndpoint { url, api_key })
    }

    async fn request_completion(
        &self,
        endpoint: &ChatEndpoint,
        request: &EvaluationRequest,
        mode: EvaluationMode,
    ) -> Result<String, EvaluationError> {
        let prompt = PromptTemplate::for_mode(mode).render(request);
        let completion_request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: mode.temperature(),
            max_tokens: mode.max_tokens(),
        };

        let response = self
            .transport
            .complete(endpoint, &completion_request)
            .await?;

        response
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| EvaluationError::Parse("completion has no choices".to_string()))
    }
}
