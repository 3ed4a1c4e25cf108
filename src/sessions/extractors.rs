use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use std::convert::Infallible;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "near_me_session";

/// Session the request belongs to. Requests without a usable cookie start a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub id: Uuid,
}

impl Session {
    pub fn set_cookie_header(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id)
    }
}

/// Finds the session id among the `Cookie` header values.
pub fn session_id_from_cookies<'a>(headers: impl Iterator<Item = &'a str>) -> Option<Uuid> {
    headers
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());
        let id = match session_id_from_cookies(cookies) {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                tracing::debug!(session_id = %id, "Starting a new session.");
                id
            }
        };
        Ok(Session { id })
    }
}
