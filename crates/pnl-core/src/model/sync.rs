use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookkeeping row for one external sync run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSync {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    /// What was synced, e.g. "orders" or "products"
    pub sync_type: String,
}

impl LastSync {
    pub fn now(sync_type: impl Into<String>) -> Self {
        Self {
            id: None,
            timestamp: Utc::now(),
            sync_type: sync_type.into(),
        }
    }
}
