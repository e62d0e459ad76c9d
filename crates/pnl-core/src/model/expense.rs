use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recurrence period of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpensePeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ExpensePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpensePeriod::Daily => "daily",
            ExpensePeriod::Weekly => "weekly",
            ExpensePeriod::Monthly => "monthly",
            ExpensePeriod::Yearly => "yearly",
        }
    }
}

/// A user-entered or imported business expense
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Expense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: DateTime<Utc>,
    /// Category name; matched against `ExpenseCategory::name` by convention
    pub category: String,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<ExpensePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_deductible: Option<bool>,
    pub tags: Vec<String>,
}

impl Expense {
    pub fn new(
        date: DateTime<Utc>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Grouping for expenses
///
/// Names are unique by convention only; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CSS hex colour used by charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tax_deductible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_monthly: Option<f64>,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
