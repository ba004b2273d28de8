use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::domain::{Business, BusinessId, Match};
use super::repository::{BusinessRepository, RepositoryError};
use crate::evaluation::{
    ChatTransport, EvaluationError, EvaluationGateway, EvaluationRequest, StructuredRating,
};

/// Service composing the evaluation gateway with the business registry.
pub struct BusinessRatingService<R, T> {
    repository: Arc<R>,
    gateway: Arc<EvaluationGateway<T>>,
}

/// Freshly registered business together with the report that rated it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedBusiness {
    pub business: Business,
    pub rating: StructuredRating,
}

static BUSINESS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_business_id() -> BusinessId {
    let id = BUSINESS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    BusinessId(format!("biz-{id:06}"))
}

impl<R, T> BusinessRatingService<R, T>
where
    R: BusinessRepository + 'static,
    T: ChatTransport + 'static,
{
    pub fn new(repository: Arc<R>, gateway: Arc<EvaluationGateway<T>>) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    /// Rate a business profile in structured mode and register it with the
    /// resulting score. Nothing is stored when the rating fails.
    pub async fn register(
        &self,
        request: EvaluationRequest,
    ) -> Result<RatedBusiness, RatingServiceError> {
        let rating = self.gateway.evaluate_structured(&request).await?;

        let business = Business {
            id: next_business_id(),
            name: request.name.unwrap_or_default(),
            owner: request.owner.unwrap_or_default(),
            description: request.description,
            funding_needed: request.funding_needed.unwrap_or_default(),
            industry: request.industry.unwrap_or_default(),
            ai_rating: Some(rating.score),
            rated_at: Some(Utc::now()),
        };

        let stored = self.repository.insert(business)?;
        info!(business_id = %stored.id.0, score = rating.score, "business registered");
        Ok(RatedBusiness {
            business: stored,
            rating,
        })
    }

    pub fn get(&self, id: &BusinessId) -> Result<Business, RatingServiceError> {
        let business = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(business)
    }

    pub fn list(&self) -> Result<Vec<Business>, RatingServiceError> {
        Ok(self.repository.list()?)
    }

    /// Record an investor's interest. The business must exist.
    pub fn record_match(
        &self,
        investor_id: String,
        business_id: BusinessId,
    ) -> Result<Match, RatingServiceError> {
        let investor_id = investor_id.trim().to_string();
        if investor_id.is_empty() {
            return Err(RatingServiceError::MissingInvestor);
        }
        self.get(&business_id)?;

        let entry = Match {
            investor_id,
            business_id,
            matched_at: Utc::now(),
        };
        Ok(self.repository.record_match(entry)?)
    }

    pub fn matches(&self) -> Result<Vec<Match>, RatingServiceError> {
        Ok(self.repository.matches()?)
    }
}

/// Error raised by the rating service.
#[derive(Debug, thiserror::Error)]
pub enum RatingServiceError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("investor id must not be empty")]
    MissingInvestor,
}
