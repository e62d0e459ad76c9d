//! Domain records persisted by the local store
//!
//! Every stored record carries `id: Option<i64>`: `None` until the store
//! assigns a primary key, or a storefront-provided id when imported.

pub mod credentials;
pub mod expense;
pub mod imports;
pub mod inventory;
pub mod order;
pub mod overhead;
pub mod product;
pub mod sync;

pub use credentials::ApiCredentials;
pub use expense::{Expense, ExpenseCategory, ExpensePeriod};
pub use imports::{ExpenseImport, SupplierPriceImport, SupplierPriceItem};
pub use inventory::InventoryItem;
pub use order::{MetaEntry, Order, OrderItem};
pub use overhead::{OverheadCost, OverheadKind};
pub use product::{Product, ProductVariation, VariationAttribute};
pub use sync::LastSync;
