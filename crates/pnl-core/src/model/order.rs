use serde::{Deserialize, Serialize};

/// Free-form key/value metadata attached to a line item by the storefront
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    pub value: String,
}

/// A line of an order; embedded in `Order`, never stored on its own
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    /// Line total as reported by the storefront
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    pub meta_data: Vec<MetaEntry>,
}

/// An imported sales order
///
/// Monetary totals keep the storefront's string form; derived cost, profit
/// and margin are filled in by the P&L calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub number: String,
    /// Raw creation timestamp as sent by the storefront
    pub date_created: String,
    /// Creation timestamp converted to the seller's local timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_local: Option<String>,
    /// Creation timestamp formatted for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_display: Option<String>,
    pub status: String,
    pub total: String,
    pub line_items: Vec<OrderItem>,
    pub shipping_total: String,
    pub payment_method: String,
    pub payment_method_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

impl Order {
    pub fn new(
        number: impl Into<String>,
        date_created: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            date_created: date_created.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Total quantity across all line items
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}
