use crate::sessions::models::SessionState;
use crate::storage::interface::{ISessionStorage, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug)]
struct StoredSession {
    state: SessionState,
    touched_at: Instant,
}

#[derive(Clone)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    ttl: Duration,
}

impl HashMapSessionsStorage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            storage: Arc::default(),
            ttl,
        }
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn state(&self, session_id: &Uuid) -> SessionState {
        self.storage
            .read()
            .await
            .get(session_id)
            .filter(|session| session.touched_at.elapsed() < self.ttl)
            .map(|session| session.state.clone())
            .unwrap_or_default()
    }

    async fn save(&self, session_id: &Uuid, state: SessionState) {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|_, session| session.touched_at.elapsed() < self.ttl);
        let evicted = before - storage.len();
        if evicted > 0 {
            tracing::info!(task = "sessions_count", evicted, remaining = storage.len());
        }
        storage.insert(
            *session_id,
            StoredSession {
                state,
                touched_at: Instant::now(),
            },
        );
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}
