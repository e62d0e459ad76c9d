//! `Record` implementations for the domain model

use super::{date_key, opt_int, opt_text, text, IndexValue, Record};
use crate::tables::TableName;
use pnl_core::model::{
    ApiCredentials, Expense, ExpenseCategory, ExpenseImport, InventoryItem, LastSync, Order,
    OverheadCost, Product, ProductVariation, SupplierPriceImport, SupplierPriceItem,
};

macro_rules! impl_record {
    ($ty:ty, $table:expr, |$r:ident| $indexes:expr) => {
        impl Record for $ty {
            const TABLE: TableName = $table;

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = Some(id);
            }

            fn index_values(&self) -> Vec<IndexValue> {
                let $r = self;
                $indexes
            }
        }
    };
}

impl_record!(Product, TableName::Products, |p| vec![
    text(p.name.as_str()),
    opt_text(p.sku.as_deref()),
    opt_text(p.product_type.as_deref()),
]);

impl_record!(ProductVariation, TableName::ProductVariations, |v| vec![
    IndexValue::Integer(v.parent_id),
    opt_text(v.sku.as_deref()),
]);

impl_record!(Order, TableName::Orders, |o| vec![
    text(o.number.as_str()),
    text(o.date_created.as_str()),
    text(o.status.as_str()),
]);

impl_record!(InventoryItem, TableName::Inventory, |i| vec![
    IndexValue::Integer(i.product_id),
    opt_int(i.variation_id),
    text(i.sku.as_str()),
]);

impl_record!(OverheadCost, TableName::OverheadCosts, |o| vec![
    text(o.name.as_str()),
    text(o.kind.as_str()),
]);

impl_record!(ApiCredentials, TableName::ApiCredentials, |_c| Vec::new());

impl_record!(LastSync, TableName::LastSync, |s| vec![text(s.sync_type.as_str())]);

impl_record!(Expense, TableName::Expenses, |e| vec![
    date_key(&e.date),
    text(e.category.as_str()),
    opt_text(e.period.map(|p| p.as_str())),
]);

impl_record!(ExpenseCategory, TableName::ExpenseCategories, |c| vec![text(
    c.name.as_str()
)]);

impl_record!(ExpenseImport, TableName::ExpenseImports, |i| vec![
    date_key(&i.date),
    text(i.filename.as_str()),
]);

impl_record!(SupplierPriceImport, TableName::SupplierImports, |i| vec![
    date_key(&i.date),
    text(i.supplier_name.as_str()),
]);

impl_record!(SupplierPriceItem, TableName::SupplierImportItems, |i| vec![
    IndexValue::Integer(i.import_id),
    text(i.sku.as_str()),
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_arity<R: Record>(record: &R) {
        assert_eq!(
            record.index_values().len(),
            R::TABLE.indexes().len(),
            "index arity mismatch for {}",
            R::TABLE
        );
    }

    #[test]
    fn test_index_arity_matches_catalogue() {
        assert_arity(&Product::default());
        assert_arity(&ProductVariation::default());
        assert_arity(&Order::default());
        assert_arity(&InventoryItem::default());
        assert_arity(&OverheadCost::default());
        assert_arity(&ApiCredentials::new("https://shop.example", "ck", "cs"));
        assert_arity(&LastSync::default());
        assert_arity(&Expense::default());
        assert_arity(&ExpenseCategory::default());
        assert_arity(&ExpenseImport::default());
        assert_arity(&SupplierPriceImport::default());
        assert_arity(&SupplierPriceItem::default());
    }

    #[test]
    fn test_optional_sku_indexes_as_null() {
        let product = Product::new("Unlabelled", 1.0);
        assert_eq!(product.index_values()[1], IndexValue::Null);
    }
}
