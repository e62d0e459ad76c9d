use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cost basis for one product or variation, used for margin calculations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<i64>,
    pub sku: String,
    pub cost_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_updated: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn new(product_id: i64, sku: impl Into<String>, cost_price: f64) -> Self {
        Self {
            product_id,
            sku: sku.into(),
            cost_price,
            ..Self::default()
        }
    }
}
