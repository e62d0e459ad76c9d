use pnl_core_types::Sensitive;
use serde::{Deserialize, Serialize};

/// Storefront REST API connection secret; at most one row is kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub url: String,
    pub consumer_key: String,
    pub consumer_secret: Sensitive<String>,
}

impl ApiCredentials {
    pub fn new(
        url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            url: url.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: Sensitive::new(consumer_secret.into()),
        }
    }
}
