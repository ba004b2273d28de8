use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::BusinessId;
use super::repository::{BusinessRepository, RepositoryError};
use super::service::{BusinessRatingService, RatingServiceError};
use crate::evaluation::router::{malformed_body_response, structured_error_response};
use crate::evaluation::{ChatTransport, EvaluationRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    pub investor_id: String,
    pub business_id: String,
}

/// Router builder exposing the business registry and match log.
pub fn business_router<R, T>(service: Arc<BusinessRatingService<R, T>>) -> Router
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    Router::new()
        .route(
            "/api/v1/businesses",
            post(register_handler::<R, T>).get(list_handler::<R, T>),
        )
        .route(
            "/api/v1/businesses/:business_id",
            get(business_handler::<R, T>),
        )
        .route(
            "/api/v1/matches",
            post(match_handler::<R, T>).get(matches_handler::<R, T>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R, T>(
    State(service): State<Arc<BusinessRatingService<R, T>>>,
    request: Result<axum::Json<EvaluationRequest>, JsonRejection>,
) -> Response
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    let axum::Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return malformed_body_response(&rejection),
    };
    match service.register(request).await {
        Ok(rated) => (StatusCode::CREATED, axum::Json(rated)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R, T>(
    State(service): State<Arc<BusinessRatingService<R, T>>>,
) -> Response
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    match service.list() {
        Ok(businesses) => (StatusCode::OK, axum::Json(businesses)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn business_handler<R, T>(
    State(service): State<Arc<BusinessRatingService<R, T>>>,
    Path(business_id): Path<String>,
) -> Response
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    match service.get(&BusinessId(business_id)) {
        Ok(business) => (StatusCode::OK, axum::Json(business)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn match_handler<R, T>(
    State(service): State<Arc<BusinessRatingService<R, T>>>,
    axum::Json(payload): axum::Json<MatchPayload>,
) -> Response
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    match service.record_match(payload.investor_id, BusinessId(payload.business_id)) {
        Ok(entry) => (StatusCode::CREATED, axum::Json(entry)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn matches_handler<R, T>(
    State(service): State<Arc<BusinessRatingService<R, T>>>,
) -> Response
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    match service.matches() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: RatingServiceError) -> Response {
    let status = match &err {
        RatingServiceError::Evaluation(err) => return structured_error_response(err),
        RatingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        RatingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        RatingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        RatingServiceError::MissingInvestor => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
