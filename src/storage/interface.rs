use crate::sessions::models::SessionState;
use uuid::Uuid;

pub trait ISessionStorage: SessionRepo + Clone + Send + Sync + 'static {}

pub trait SessionRepo {
    /// State of the session, or the initial state if it was never saved or has expired.
    async fn state(&self, session_id: &Uuid) -> SessionState;

    async fn save(&self, session_id: &Uuid, state: SessionState);

    async fn count(&self) -> usize;
}
