use pnl_core::model::ExpenseCategory;

/// Names of the default categories, in insertion order
pub const DEFAULT_CATEGORY_NAMES: [&str; 10] = [
    "Rent",
    "Utilities",
    "Salaries",
    "Marketing",
    "Software",
    "Office Supplies",
    "Travel",
    "Shipping",
    "Insurance",
    "Other",
];

// (name, description, colour, tax deductible)
const DEFAULTS: [(&str, &str, &str, bool); 10] = [
    ("Rent", "Office or workspace rent", "#4f46e5", true),
    ("Utilities", "Electricity, water, internet, etc.", "#0ea5e9", true),
    ("Salaries", "Employee salaries and wages", "#10b981", true),
    ("Marketing", "Advertising and marketing expenses", "#f59e0b", true),
    ("Software", "Software subscriptions and licenses", "#8b5cf6", true),
    ("Office Supplies", "Office supplies and equipment", "#ec4899", true),
    ("Travel", "Business travel expenses", "#f43f5e", true),
    ("Shipping", "Shipping and postage costs", "#6366f1", true),
    ("Insurance", "Business insurance premiums", "#14b8a6", true),
    ("Other", "Miscellaneous expenses", "#64748b", false),
];

/// The ten default expense categories, without ids
pub fn default_expense_categories() -> Vec<ExpenseCategory> {
    DEFAULTS
        .iter()
        .map(|(name, description, color, deductible)| ExpenseCategory {
            id: None,
            name: name.to_string(),
            description: Some(description.to_string()),
            color: Some(color.to_string()),
            is_tax_deductible: Some(*deductible),
            budget_monthly: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_defaults() {
        let names: Vec<_> = default_expense_categories()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, DEFAULT_CATEGORY_NAMES);
    }

    #[test]
    fn test_only_other_is_not_deductible() {
        let not_deductible: Vec<_> = default_expense_categories()
            .into_iter()
            .filter(|c| c.is_tax_deductible == Some(false))
            .map(|c| c.name)
            .collect();
        assert_eq!(not_deductible, vec!["Other"]);
    }
}
