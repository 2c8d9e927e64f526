//! Registry of live sessions.
//!
//! The transport layer keys connections by `(session id, participant
//! name)` and needs to find a session from any thread. `SessionStore`
//! maps ids to sessions, each behind its own `Mutex`, so commands on one
//! session are serialized while different sessions proceed in parallel.
//!
//! A panic while a lock is held poisons it; the store recovers the guard
//! instead of propagating the panic, because a `GameSession` is never left
//! half-mutated by a rejected operation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::SessionConfig;
use crate::session::GameSession;

/// Identifier of one session in the store.
pub type SessionId = String;

/// A session shared between connections.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Misuse of the session registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("session {0:?} already exists")]
    AlreadyExists(SessionId),

    #[error("no session {0:?}")]
    NotFound(SessionId),
}

/// Thread-safe map from session id to session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<FxHashMap<SessionId, SharedSession>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new lobby under `id`.
    pub fn create(&self, id: &str, config: SessionConfig) -> Result<SharedSession, StoreError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if sessions.contains_key(id) {
            return Err(StoreError::AlreadyExists(id.to_string()));
        }
        let session = Arc::new(Mutex::new(GameSession::new(id, config)));
        sessions.insert(id.to_string(), Arc::clone(&session));
        info!(session_id = id, live = sessions.len(), "Session registered");
        Ok(session)
    }

    /// Fetch `id`, creating a lobby with `config` if it does not exist.
    pub fn get_or_create(&self, id: &str, config: SessionConfig) -> SharedSession {
        if let Some(session) = self.get(id) {
            return session;
        }
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session_id = id, "Session registered");
            Arc::new(Mutex::new(GameSession::new(id, config)))
        });
        Arc::clone(session)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<SharedSession> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(id).cloned()
    }

    /// Drop `id` from the store. Handles already held elsewhere stay valid.
    pub fn remove(&self, id: &str) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let removed = sessions.remove(id);
        if removed.is_some() {
            info!(session_id = id, live = sessions.len(), "Session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live session ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<SessionId> = sessions.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Run `f` with exclusive access to session `id`.
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, StoreError> {
        let session = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let mut guard = lock(&session);
        debug!(session_id = id, "Session locked");
        Ok(f(&mut *guard))
    }
}

/// Lock a shared session, recovering from poisoning.
pub fn lock(session: &SharedSession) -> MutexGuard<'_, GameSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
