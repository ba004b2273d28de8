use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::domain::{EvaluationRequest, SimpleRating};
use super::error::EvaluationError;
use super::gateway::{EvaluationGateway, SimpleEvaluation};
use super::transport::ChatTransport;

pub(crate) const SIMPLE_FAILURE_MESSAGE: &str = "Nuk u bë dot vlerësimi.";
pub(crate) const NOT_CONFIGURED_MESSAGE: &str = "Shërbimi i vlerësimit nuk është konfiguruar.";
pub(crate) const EMPTY_DESCRIPTION_MESSAGE: &str = "Përshkrimi i biznesit është i detyrueshëm.";
pub(crate) const MALFORMED_BODY_MESSAGE: &str = "Kërkesa nuk është JSON i vlefshëm.";

/// Body of the quick-score endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaPayload {
    #[serde(default)]
    pub idea: String,
}

/// Router builder exposing the quick-score and detailed evaluation endpoints.
pub fn evaluation_router<T>(gateway: Arc<EvaluationGateway<T>>) -> Router
where
    T: ChatTransport + 'static,
{
    Router::new()
        .route("/evaluate", post(simple_evaluation_handler::<T>))
        .route(
            "/api/v1/evaluations",
            post(structured_evaluation_handler::<T>),
        )
        .with_state(gateway)
}

/// Always answers with a score; failures add an `error` field and, for
/// transport or configuration problems, a 500 status.
pub(crate) async fn simple_evaluation_handler<T>(
    State(gateway): State<Arc<EvaluationGateway<T>>>,
    payload: Result<axum::Json<IdeaPayload>, JsonRejection>,
) -> Response
where
    T: ChatTransport + 'static,
{
    let payload = match payload {
        Ok(axum::Json(payload)) => payload,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "rejected quick-score body");
            let payload = json!({
                "error": MALFORMED_BODY_MESSAGE,
                "score": SimpleRating::fallback().score,
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };
    let request = EvaluationRequest::from_idea(payload.idea);
    match gateway.evaluate_simple(&request).await {
        Ok(SimpleEvaluation {
            rating,
            degraded: Some(EvaluationError::Transport(_)),
        }) => {
            let payload = json!({ "error": SIMPLE_FAILURE_MESSAGE, "score": rating.score });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Ok(SimpleEvaluation { rating, .. }) => {
            (StatusCode::OK, axum::Json(json!({ "score": rating.score }))).into_response()
        }
        Err(EvaluationError::InvalidRequest) => {
            let payload = json!({
                "error": EMPTY_DESCRIPTION_MESSAGE,
                "score": SimpleRating::fallback().score,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(EvaluationError::Configuration(_)) => {
            let payload = json!({
                "error": NOT_CONFIGURED_MESSAGE,
                "score": SimpleRating::fallback().score,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(_) => {
            let payload = json!({
                "error": SIMPLE_FAILURE_MESSAGE,
                "score": SimpleRating::fallback().score,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn structured_evaluation_handler<T>(
    State(gateway): State<Arc<EvaluationGateway<T>>>,
    request: Result<axum::Json<EvaluationRequest>, JsonRejection>,
) -> Response
where
    T: ChatTransport + 'static,
{
    let request = match request {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return malformed_body_response(&rejection),
    };
    match gateway.evaluate_structured(&request).await {
        Ok(rating) => (StatusCode::OK, axum::Json(rating)).into_response(),
        Err(err) => structured_error_response(&err),
    }
}

/// Maps a structured-mode failure to a user-facing error body.
pub(crate) fn structured_error_response(err: &EvaluationError) -> Response {
    let (status, message) = match err {
        EvaluationError::InvalidRequest => (
            StatusCode::UNPROCESSABLE_ENTITY,
            EMPTY_DESCRIPTION_MESSAGE.to_string(),
        ),
        EvaluationError::Configuration(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            NOT_CONFIGURED_MESSAGE.to_string(),
        ),
        EvaluationError::Transport(_) | EvaluationError::Parse(_) => (
            StatusCode::BAD_GATEWAY,
            format!("Gabim në lidhjen me API-n e vlerësimit: {err}"),
        ),
    };
    let payload = json!({ "error": message, "kind": err.kind() });
    (status, axum::Json(payload)).into_response()
}

/// Answers an unreadable JSON body with the structured error shape.
pub(crate) fn malformed_body_response(rejection: &JsonRejection) -> Response {
    debug!(error = %rejection.body_text(), "rejected evaluation body");
    let payload = json!({
        "error": MALFORMED_BODY_MESSAGE,
        "kind": EvaluationError::InvalidRequest.kind(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
