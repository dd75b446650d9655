//! Confirmation ledger storage.
//!
//! Decisions are keyed by (employee id, normalized title) so a recurring
//! event is resolved once no matter how many times it appears. The
//! calculation path loads the whole map for an employee up front and does
//! per-event lookups in memory.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::confirmations::MatchResolution;
use crate::error::EngineResult;
use crate::matching::normalize_title;

/// All confirmations for one employee, loaded once per calculation run.
///
/// Lookups normalize the queried title with the same rules the matcher
/// uses, so any rendering of a resolved title finds its record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmationMap {
    records: HashMap<String, MatchResolution>,
}

impl ConfirmationMap {
    /// Looks up the resolution for an event title, if one was ever saved.
    pub fn resolve(&self, title: &str) -> Option<&MatchResolution> {
        self.records.get(&normalize_title(title))
    }

    /// Number of resolved titles in the map.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the employee has no saved confirmations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<HashMap<String, MatchResolution>> for ConfirmationMap {
    fn from(records: HashMap<String, MatchResolution>) -> Self {
        ConfirmationMap { records }
    }
}

/// Durable storage contract for uncertain-match decisions.
///
/// The save contract is strict: a failed save must surface as an error,
/// never degrade to a silent no-op, because it would drop a human
/// decision.
pub trait ConfirmationStore: Send + Sync {
    /// Persists a resolution for (employee, title). Overwrites any
    /// earlier resolution for the same key, last writer wins.
    fn save_confirmation(
        &self,
        employee_id: &str,
        event_title: &str,
        resolution: MatchResolution,
    ) -> EngineResult<()>;

    /// Loads every resolution saved for an employee as one batch read.
    fn confirmation_map(&self, employee_id: &str) -> EngineResult<ConfirmationMap>;
}

/// In-memory confirmation store guarded by a read-write lock.
///
/// Reads run concurrently; writes take the lock exclusively per call,
/// which gives the required at-most-once-at-a-time write per key.
#[derive(Debug, Default)]
pub struct InMemoryConfirmationStore {
    records: RwLock<HashMap<(String, String), MatchResolution>>,
}

impl InMemoryConfirmationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn save_confirmation(
        &self,
        employee_id: &str,
        event_title: &str,
        resolution: MatchResolution,
    ) -> EngineResult<()> {
        let key = (employee_id.to_string(), normalize_title(event_title));
        debug!(employee_id, title = %event_title, "saving confirmation");
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.insert(key, resolution);
        Ok(())
    }

    fn confirmation_map(&self, employee_id: &str) -> EngineResult<ConfirmationMap> {
        let records = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let map: HashMap<String, MatchResolution> = records
            .iter()
            .filter(|((owner, _), _)| owner == employee_id)
            .map(|((_, title), resolution)| (title.clone(), resolution.clone()))
            .collect();
        debug!(employee_id, confirmations = map.len(), "loaded confirmation map");
        Ok(ConfirmationMap::from(map))
    }
}
