use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Success body for both notification endpoints. `telegram_response` is the
/// upstream body passed through verbatim.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub telegram_response: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
