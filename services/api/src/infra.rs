use bizmatch::registry::{
    seed_businesses, Business, BusinessId, BusinessRepository, Match, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Registry {
    businesses: Vec<Business>,
    matches: Vec<Match>,
}

/// Session-scoped registry; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryBusinessRepository {
    inner: Arc<Mutex<Registry>>,
}

impl InMemoryBusinessRepository {
    pub(crate) fn seeded() -> Self {
        let registry = Registry {
            businesses: seed_businesses(),
            matches: Vec::new(),
        };
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Registry>, RepositoryError> {
        self.inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("registry mutex poisoned".to_string()))
    }
}

impl BusinessRepository for InMemoryBusinessRepository {
    fn insert(&self, business: Business) -> Result<Business, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.businesses.iter().any(|existing| existing.id == business.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.businesses.push(business.clone());
        Ok(business)
    }

    fn fetch(&self, id: &BusinessId) -> Result<Option<Business>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .businesses
            .iter()
            .find(|business| &business.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Business>, RepositoryError> {
        Ok(self.lock()?.businesses.clone())
    }

    fn record_match(&self, entry: Match) -> Result<Match, RepositoryError> {
        self.lock()?.matches.push(entry.clone());
        Ok(entry)
    }

    fn matches(&self) -> Result<Vec<Match>, RepositoryError> {
        Ok(self.lock()?.matches.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn seeded_repository_preserves_insertion_order() {
        let repository = InMemoryBusinessRepository::seeded();
        let mut extra = seed_businesses().remove(0);
        extra.id = BusinessId("biz-000042".to_string());
        repository.insert(extra).expect("insert succeeds");

        let ids: Vec<_> = repository
            .list()
            .expect("list succeeds")
            .into_iter()
            .map(|business| business.id.0)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "biz-000042"]);
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let repository = InMemoryBusinessRepository::seeded();
        let duplicate = seed_businesses().remove(1);
        assert!(matches!(
            repository.insert(duplicate),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn clones_share_matches() {
        let repository = InMemoryBusinessRepository::default();
        let handle = repository.clone();
        handle
            .record_match(Match {
                investor_id: "inv-1".to_string(),
                business_id: BusinessId("1".to_string()),
                matched_at: Utc::now(),
            })
            .expect("match recorded");
        assert_eq!(repository.matches().expect("matches listed").len(), 1);
    }
}
