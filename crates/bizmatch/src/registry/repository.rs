use super::domain::{Business, BusinessId, Match};

/// Storage abstraction for the session's businesses and matches, injected
/// into the service so it can be exercised in isolation.
pub trait BusinessRepository: Send + Sync {
    fn insert(&self, business: Business) -> Result<Business, RepositoryError>;
    fn fetch(&self, id: &BusinessId) -> Result<Option<Business>, RepositoryError>;
    fn list(&self) -> Result<Vec<Business>, RepositoryError>;
    fn record_match(&self, entry: Match) -> Result<Match, RepositoryError>;
    fn matches(&self) -> Result<Vec<Match>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
