//! Ordered upsert log: the drift-detection surface for the offline learner.
//! This core guarantees events are observable in the order applied; how the
//! consumer retains or compacts them is its concern.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use causeway_core::types::{EdgeKey, PcsCategory, Sign};

/// One applied upsert, as observed by downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertEvent {
    /// Monotonic sequence number, assigned in apply order.
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub edge_id: String,
    pub key: EdgeKey,
    pub sign: Sign,
    pub pcs_score: f64,
    pub category: PcsCategory,
    pub evidence_ref: String,
    pub occurrence_count: u32,
    pub created: bool,
    pub conflict: bool,
}

/// In-memory append-only event sequence.
#[derive(Debug, Default)]
pub struct AppendLog {
    events: Mutex<Vec<UpsertEvent>>,
}

impl AppendLog {
    pub(crate) fn push(&self, mut event: UpsertEvent) -> u64 {
        let mut events = self.lock();
        event.seq = events.len() as u64;
        let seq = event.seq;
        events.push(event);
        seq
    }

    /// Copy of the full event sequence, in apply order.
    pub fn snapshot(&self) -> Vec<UpsertEvent> {
        self.lock().clone()
    }

    /// Events at or after `seq`, for incremental consumers.
    pub fn since(&self, seq: u64) -> Vec<UpsertEvent> {
        let events = self.lock();
        events
            .iter()
            .skip(seq as usize)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UpsertEvent>> {
        // A poisoned log is still readable; the Vec is append-only.
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
