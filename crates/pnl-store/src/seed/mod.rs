//! Default reference data inserted on first initialization

mod categories;

pub use categories::{default_expense_categories, DEFAULT_CATEGORY_NAMES};

use crate::errors::{from_rusqlite, Result};
use crate::repo::insert_all;
use rusqlite::Connection;

/// Insert the default expense categories in one transaction
///
/// Returns the number of rows inserted. Callers clear the table first; this
/// function does not check for existing rows.
pub fn seed_default_categories(conn: &mut Connection) -> Result<usize> {
    let categories = default_expense_categories();

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let ids = insert_all(&tx, &categories)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(ids.len())
}
