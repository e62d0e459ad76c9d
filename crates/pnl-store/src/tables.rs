//! Catalogue of the declared tables
//!
//! Must stay in step with `migrations/001_initial_schema.sql`; the
//! `schema_matches_catalogue` test in `tests/migrations_test.rs` checks both.

use std::fmt;

/// One of the twelve record collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableName {
    Products,
    ProductVariations,
    Orders,
    Inventory,
    OverheadCosts,
    ApiCredentials,
    LastSync,
    Expenses,
    ExpenseCategories,
    ExpenseImports,
    SupplierImports,
    SupplierImportItems,
}

impl TableName {
    /// Every declared table, in schema order
    pub const ALL: [TableName; 12] = [
        TableName::Products,
        TableName::ProductVariations,
        TableName::Orders,
        TableName::Inventory,
        TableName::OverheadCosts,
        TableName::ApiCredentials,
        TableName::LastSync,
        TableName::Expenses,
        TableName::ExpenseCategories,
        TableName::ExpenseImports,
        TableName::SupplierImports,
        TableName::SupplierImportItems,
    ];

    /// SQL table name
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Products => "products",
            TableName::ProductVariations => "product_variations",
            TableName::Orders => "orders",
            TableName::Inventory => "inventory",
            TableName::OverheadCosts => "overhead_costs",
            TableName::ApiCredentials => "api_credentials",
            TableName::LastSync => "last_sync",
            TableName::Expenses => "expenses",
            TableName::ExpenseCategories => "expense_categories",
            TableName::ExpenseImports => "expense_imports",
            TableName::SupplierImports => "supplier_imports",
            TableName::SupplierImportItems => "supplier_import_items",
        }
    }

    /// Secondary index columns, in column order
    pub fn indexes(&self) -> &'static [&'static str] {
        match self {
            TableName::Products => &["name", "sku", "product_type"],
            TableName::ProductVariations => &["parent_id", "sku"],
            TableName::Orders => &["number", "date_created", "status"],
            TableName::Inventory => &["product_id", "variation_id", "sku"],
            TableName::OverheadCosts => &["name", "kind"],
            TableName::ApiCredentials => &[],
            TableName::LastSync => &["sync_type"],
            TableName::Expenses => &["date", "category", "period"],
            TableName::ExpenseCategories => &["name"],
            TableName::ExpenseImports => &["date", "filename"],
            TableName::SupplierImports => &["date", "supplier_name"],
            TableName::SupplierImportItems => &["import_id", "sku"],
        }
    }

    pub fn has_index(&self, index: &str) -> bool {
        self.indexes().contains(&index)
    }

    /// Look a table up by its SQL name
    pub fn from_name(name: &str) -> Option<TableName> {
        TableName::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TableName::ALL.iter().map(|t| t.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_from_name_round_trips() {
        for table in TableName::ALL {
            assert_eq!(TableName::from_name(table.as_str()), Some(table));
        }
        assert_eq!(TableName::from_name("schema_version"), None);
    }

    #[test]
    fn test_index_lookup() {
        assert!(TableName::Orders.has_index("status"));
        assert!(!TableName::Orders.has_index("data"));
        assert!(TableName::ApiCredentials.indexes().is_empty());
    }
}
