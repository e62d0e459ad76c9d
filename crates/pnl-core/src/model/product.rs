use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level catalog item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    /// Storefront product type ("simple", "variable", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Ids of the `ProductVariation` rows belonging to this product
    pub variations: Vec<i64>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn is_variable(&self) -> bool {
        self.product_type.as_deref() == Some("variable") || !self.variations.is_empty()
    }
}

/// One option pair of a variation, e.g. `Size = Large`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationAttribute {
    pub name: String,
    pub option: String,
}

/// A sellable variant belonging to exactly one `Product`
///
/// `parent_id` is not checked against the products table; keeping the two
/// consistent is the caller's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductVariation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub parent_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    pub attributes: Vec<VariationAttribute>,
}

impl ProductVariation {
    pub fn new(parent_id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            parent_id,
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Look up an attribute option by attribute name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.option.as_str())
    }
}
