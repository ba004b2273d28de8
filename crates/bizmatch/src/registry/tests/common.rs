use std::sync::{Arc, Mutex};

use crate::evaluation::tests::common::{gateway, ScriptedTransport};
use crate::registry::domain::{seed_businesses, Business, BusinessId, Match};
use crate::registry::repository::{BusinessRepository, RepositoryError};
use crate::registry::service::BusinessRatingService;

#[derive(Default)]
pub(super) struct MemoryRepository {
    businesses: Mutex<Vec<Business>>,
    matches: Mutex<Vec<Match>>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        let repository = Self::default();
        *repository.businesses.lock().expect("mutex poisoned") = seed_businesses();
        repository
    }

    pub(super) fn len(&self) -> usize {
        self.businesses.lock().expect("mutex poisoned").len()
    }
}

impl BusinessRepository for MemoryRepository {
    fn insert(&self, business: Business) -> Result<Business, RepositoryError> {
        let mut guard = self.businesses.lock().expect("mutex poisoned");
        if guard.iter().any(|existing| existing.id == business.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(business.clone());
        Ok(business)
    }

    fn fetch(&self, id: &BusinessId) -> Result<Option<Business>, RepositoryError> {
        let guard = self.businesses.lock().expect("mutex poisoned");
        Ok(guard.iter().find(|business| &business.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Business>, RepositoryError> {
        Ok(self.businesses.lock().expect("mutex poisoned").clone())
    }

    fn record_match(&self, entry: Match) -> Result<Match, RepositoryError> {
        self.matches
            .lock()
            .expect("mutex poisoned")
            .push(entry.clone());
        Ok(entry)
    }

    fn matches(&self) -> Result<Vec<Match>, RepositoryError> {
        Ok(self.matches.lock().expect("mutex poisoned").clone())
    }
}

pub(super) struct UnavailableRepository;

impl BusinessRepository for UnavailableRepository {
    fn insert(&self, _business: Business) -> Result<Business, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn fetch(&self, _id: &BusinessId) -> Result<Option<Business>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn list(&self) -> Result<Vec<Business>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn record_match(&self, _entry: Match) -> Result<Match, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn matches(&self) -> Result<Vec<Match>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }
}

pub(super) fn service_with<R>(
    repository: &Arc<R>,
    transport: &Arc<ScriptedTransport>,
) -> BusinessRatingService<R, ScriptedTransport>
where
    R: BusinessRepository + 'static,
{
    BusinessRatingService::new(repository.clone(), Arc::new(gateway(transport)))
}
