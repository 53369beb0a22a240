//! In-memory storage for active wizards.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{StepState, WizardError};
use crate::campaign::CampaignCatalog;

/// Default idle timeout before a wizard is dropped (30 minutes).
pub const DEFAULT_WIZARD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct WizardEntry {
    state: StepState,
    last_activity: DateTime<Utc>,
}

impl WizardEntry {
    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    fn is_expired_with_timeout(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        // Negative spans (clock skew) never expire.
        (now - self.last_activity)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store of wizard step states, keyed by wizard id.
///
/// Locks are released before any gateway call, so a render running while a
/// submission is in flight observes `Pending`.
#[derive(Debug, Clone)]
pub struct WizardStore {
    inner: Arc<WizardStoreInner>,
}

#[derive(Debug)]
struct WizardStoreInner {
    catalog: Arc<CampaignCatalog>,
    wizards: RwLock<HashMap<String, WizardEntry>>,
}

impl WizardStore {
    #[must_use]
    pub fn new(catalog: Arc<CampaignCatalog>) -> Self {
        Self {
            inner: Arc::new(WizardStoreInner {
                catalog,
                wizards: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Catalog every wizard in this store selects from.
    pub fn catalog(&self) -> &Arc<CampaignCatalog> {
        &self.inner.catalog
    }

    /// Start a wizard with the default selection and return its id.
    #[must_use]
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let entry = WizardEntry {
            state: StepState::new(&self.inner.catalog),
            last_activity: Utc::now(),
        };
        self.inner
            .wizards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), entry);
        id
    }

    /// Current state of a wizard.
    pub fn get(&self, id: &str) -> Result<StepState, WizardError> {
        let guard = self
            .inner
            .wizards
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard
            .get(id)
            .map(|entry| entry.state.clone())
            .ok_or_else(|| WizardError::NotFound(id.to_string()))
    }

    /// Change a wizard's selected campaign type.
    pub fn select(&self, id: &str, value: &str) -> Result<StepState, WizardError> {
        let catalog = Arc::clone(&self.inner.catalog);
        self.update(id, |state| state.select(&catalog, value))
            .map(|((), state)| state)
    }

    /// Mark a wizard `Pending` and return the campaign type to submit.
    pub fn begin_submit(&self, id: &str) -> Result<String, WizardError> {
        self.update(id, StepState::begin_submit)
            .map(|(value, _)| value)
    }

    /// Record the outcome of a submission.
    pub fn finish_submit(
        &self,
        id: &str,
        outcome: Result<(), String>,
    ) -> Result<StepState, WizardError> {
        self.update(id, |state| {
            state.finish_submit(outcome);
            Ok(())
        })
        .map(|((), state)| state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .wizards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove wizards idle for longer than the timeout.
    ///
    /// Wizards with a submission in flight are kept. Returns the number removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let now = Utc::now();
        let mut guard = self
            .inner
            .wizards
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, entry| {
            entry.state.status().is_pending() || !entry.is_expired_with_timeout(now, timeout)
        });
        before - guard.len()
    }

    /// Apply a mutation to one wizard, returning its value and the new state.
    fn update<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut StepState) -> Result<T, WizardError>,
    ) -> Result<(T, StepState), WizardError> {
        let mut guard = self
            .inner
            .wizards
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = guard
            .get_mut(id)
            .ok_or_else(|| WizardError::NotFound(id.to_string()))?;
        let value = f(&mut entry.state)?;
        entry.touch();
        Ok((value, entry.state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::SubmissionStatus;

    fn store() -> WizardStore {
        WizardStore::new(Arc::new(CampaignCatalog::builtin()))
    }

    #[test]
    fn test_create_and_get() {
        let store = store();
        let id = store.create();
        let state = store.get(&id).unwrap();
        assert_eq!(state.selected(), "sendOffers");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown() {
        let store = store();
        assert_eq!(
            store.get("missing"),
            Err(WizardError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_select_updates_state() {
        let store = store();
        let id = store.create();
        let state = store.select(&id, "findBuyers").unwrap();
        assert_eq!(state.selected(), "findBuyers");
        assert_eq!(store.get(&id).unwrap().selected(), "findBuyers");
    }

    #[test]
    fn test_submit_roundtrip() {
        let store = store();
        let id = store.create();
        assert_eq!(store.begin_submit(&id).unwrap(), "sendOffers");
        assert!(store.get(&id).unwrap().status().is_pending());
        assert_eq!(
            store.begin_submit(&id),
            Err(WizardError::SubmissionPending)
        );

        let state = store
            .finish_submit(&id, Err("Service unavailable".into()))
            .unwrap();
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed("Service unavailable".into())
        );
    }

    #[test]
    fn test_cleanup_keeps_pending() {
        let store = store();
        let idle = store.create();
        let pending = store.create();
        store.begin_submit(&pending).unwrap();

        std::thread::sleep(Duration::from_millis(20));
        let removed = store.cleanup_expired_with_timeout(Duration::from_millis(1));

        assert_eq!(removed, 1);
        assert!(store.get(&idle).is_err());
        assert!(store.get(&pending).is_ok());
    }

    #[test]
    fn test_cleanup_keeps_fresh() {
        let store = store();
        let _id = store.create();
        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_WIZARD_TIMEOUT), 0);
    }
}
