use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Opaque handle correlating a "show recipe form" step with its later
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftToken(u64);

#[derive(Debug)]
struct PendingDraft {
    category: Category,
    stored_at: Instant,
}

#[derive(Debug, Default)]
struct DraftState {
    next_token: u64,
    pending: HashMap<u64, PendingDraft>,
}

/// Short-lived keyed store for the category picked before the form
/// round-trip completes.
///
/// Each `begin` hands out a fresh token; `take` consumes the entry, so a
/// token is single-use. Entries older than the TTL are swept on every
/// access rather than by a background task; the sweep is a linear scan
/// over live entries.
#[derive(Debug)]
pub struct DraftStore {
    ttl: Duration,
    inner: Mutex<DraftState>,
}

impl DraftStore {
    /// Create a store whose entries expire `ttl` after being stored.
    pub fn new(ttl: Duration) -> Self {
        DraftStore {
            ttl,
            inner: Mutex::new(DraftState::default()),
        }
    }

    /// Park a pending category and get the token for the later submission.
    pub fn begin(&self, category: Category) -> DraftToken {
        let now = Instant::now();
        let mut state = self.lock();
        Self::sweep(&mut state, self.ttl, now);

        let token = state.next_token;
        state.next_token += 1;
        state.pending.insert(
            token,
            PendingDraft {
                category,
                stored_at: now,
            },
        );
        DraftToken(token)
    }

    /// Consume a pending category.
    ///
    /// Returns `None` when the token was never issued, already used, or has
    /// expired.
    pub fn take(&self, token: DraftToken) -> Option<Category> {
        let now = Instant::now();
        let mut state = self.lock();
        Self::sweep(&mut state, self.ttl, now);

        state.pending.remove(&token.0).map(|draft| draft.category)
    }

    /// Number of live (unexpired, unconsumed) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let mut state = self.lock();
        Self::sweep(&mut state, self.ttl, now);
        state.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sweep(state: &mut DraftState, ttl: Duration, now: Instant) {
        state
            .pending
            .retain(|_, draft| now.duration_since(draft.stored_at) <= ttl);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DraftState> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
