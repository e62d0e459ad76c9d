use serde::{Deserialize, Serialize};

/// How an overhead cost is allocated into the P&L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverheadKind {
    /// Flat amount per period
    #[default]
    Fixed,
    /// Percentage of revenue
    Percentage,
    PerOrder,
    PerItem,
}

impl OverheadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverheadKind::Fixed => "fixed",
            OverheadKind::Percentage => "percentage",
            OverheadKind::PerOrder => "per_order",
            OverheadKind::PerItem => "per_item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverheadCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub kind: OverheadKind,
    pub value: f64,
}

impl OverheadCost {
    pub fn new(name: impl Into<String>, kind: OverheadKind, value: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind,
            value,
        }
    }
}
