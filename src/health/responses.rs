use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    /// Without a key every search is rejected by the maps provider.
    pub maps_api_key_configured: bool,
    pub active_sessions: usize,
}
