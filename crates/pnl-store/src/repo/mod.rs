//! Typed table accessors
//!
//! Every table stores its indexed fields as columns plus the full record as
//! JSON in `data`. `Record` describes how a model type maps onto its table;
//! `Table` is the CRUD surface handed to page-level code.

pub mod records;
pub mod settings;

use crate::errors::{from_serde, table_error, Result};
use crate::manager::LocalStore;
use crate::tables::TableName;
use chrono::{DateTime, SecondsFormat, Utc};
use pnl_core::errors::PnlError;
use pnl_core::model::{
    ApiCredentials, Expense, ExpenseCategory, ExpenseImport, InventoryItem, LastSync, Order,
    OverheadCost, Product, ProductVariation, SupplierPriceImport, SupplierPriceItem,
};
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub use rusqlite::types::Value as IndexValue;

/// A model type persisted in one declared table
pub trait Record: Serialize + DeserializeOwned {
    const TABLE: TableName;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Values for `Self::TABLE.indexes()`, in the same order
    fn index_values(&self) -> Vec<IndexValue>;
}

/// Index value for a text column
pub fn text(value: impl Into<String>) -> IndexValue {
    IndexValue::Text(value.into())
}

pub fn opt_text(value: Option<&str>) -> IndexValue {
    value.map_or(IndexValue::Null, |v| IndexValue::Text(v.to_string()))
}

pub fn opt_int(value: Option<i64>) -> IndexValue {
    value.map_or(IndexValue::Null, IndexValue::Integer)
}

/// Sortable index key for a timestamp
///
/// Fixed-width RFC 3339 in UTC, so lexical order is chronological and
/// `where_between` works on date columns.
pub fn date_key(at: &DateTime<Utc>) -> IndexValue {
    IndexValue::Text(at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// CRUD accessor for one table, bound to the live store handle
///
/// Each call acquires the handle, so a `Table` obtained before a recreate
/// or reset operates on the new instance afterwards.
pub struct Table<'a, R: Record> {
    store: &'a LocalStore,
    _record: PhantomData<fn() -> R>,
}

impl<'a, R: Record> Table<'a, R> {
    pub(crate) fn new(store: &'a LocalStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> TableName {
        R::TABLE
    }

    /// Insert a record and write the assigned id back into it
    ///
    /// A record that already carries an id is inserted under that id.
    pub fn add(&self, record: &mut R) -> Result<i64> {
        self.store.with_connection(|conn| insert_record(conn, record))
    }

    /// Insert many records in one transaction
    ///
    /// Ids are written back only once the transaction commits; on failure no
    /// row is kept and the records are left untouched.
    pub fn bulk_add(&self, records: &mut [R]) -> Result<Vec<i64>> {
        let ids = self.store.with_connection_mut(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| table_error(R::TABLE.as_str(), e))?;
            let ids = insert_all(&tx, records)?;
            tx.commit().map_err(|e| table_error(R::TABLE.as_str(), e))?;
            Ok(ids)
        })?;
        for (record, id) in records.iter_mut().zip(&ids) {
            record.set_id(*id);
        }
        Ok(ids)
    }

    /// Insert or replace by id
    pub fn put(&self, record: &mut R) -> Result<i64> {
        self.store.with_connection(|conn| upsert_record(conn, record))
    }

    pub fn get(&self, id: i64) -> Result<Option<R>> {
        self.store.with_connection(|conn| get_record(conn, id))
    }

    /// Like `get`, but a missing row is a `NotFound` error
    pub fn require(&self, id: i64) -> Result<R> {
        self.get(id)?.ok_or_else(|| {
            PnlError::RecordNotFound {
                table: R::TABLE.as_str().to_string(),
                id,
            }
            .into()
        })
    }

    /// Delete by id; returns whether a row was removed
    pub fn delete(&self, id: i64) -> Result<bool> {
        self.store.with_connection(|conn| {
            let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE.as_str());
            let removed = conn
                .execute(&sql, [id])
                .map_err(|e| table_error(R::TABLE.as_str(), e))?;
            Ok(removed > 0)
        })
    }

    pub fn count(&self) -> Result<u64> {
        self.store.with_connection(|conn| count_rows(conn, R::TABLE))
    }

    pub fn clear(&self) -> Result<()> {
        self.store.with_connection(|conn| clear_table(conn, R::TABLE))
    }

    /// All records in id order
    pub fn to_vec(&self) -> Result<Vec<R>> {
        self.store.with_connection(|conn| {
            let sql = format!("SELECT id, data FROM {} ORDER BY id", R::TABLE.as_str());
            query_records(conn, &sql, Vec::new())
        })
    }

    /// Records whose `index` column equals `value`, in id order
    pub fn where_eq(&self, index: &str, value: impl Into<IndexValue>) -> Result<Vec<R>> {
        check_index::<R>(index)?;
        let value = value.into();
        self.store.with_connection(|conn| {
            let sql = format!(
                "SELECT id, data FROM {} WHERE {} = ?1 ORDER BY id",
                R::TABLE.as_str(),
                index
            );
            query_records(conn, &sql, vec![value])
        })
    }

    /// Records whose `index` column lies in `[lo, hi]`, ordered by that column
    pub fn where_between(
        &self,
        index: &str,
        lo: impl Into<IndexValue>,
        hi: impl Into<IndexValue>,
    ) -> Result<Vec<R>> {
        check_index::<R>(index)?;
        let params = vec![lo.into(), hi.into()];
        self.store.with_connection(|conn| {
            let sql = format!(
                "SELECT id, data FROM {table} WHERE {index} BETWEEN ?1 AND ?2 ORDER BY {index}, id",
                table = R::TABLE.as_str(),
                index = index
            );
            query_records(conn, &sql, params)
        })
    }
}

fn check_index<R: Record>(index: &str) -> Result<()> {
    if R::TABLE.has_index(index) {
        Ok(())
    } else {
        Err(PnlError::UnknownIndex {
            table: R::TABLE.as_str().to_string(),
            index: index.to_string(),
        }
        .into())
    }
}

fn encode<R: Record>(record: &R) -> Result<String> {
    serde_json::to_string(record).map_err(|e| from_serde(R::TABLE.as_str(), e))
}

fn decode<R: Record>(id: i64, data: &str) -> Result<R> {
    let mut record: R = serde_json::from_str(data).map_err(|e| from_serde(R::TABLE.as_str(), e))?;
    record.set_id(id);
    Ok(record)
}

/// Column list and parameters for writing `record`, optionally with its id
fn write_columns<R: Record>(record: &R, with_id: Option<i64>) -> Result<(Vec<&'static str>, Vec<IndexValue>)> {
    let mut columns = Vec::new();
    let mut values = Vec::new();
    if let Some(id) = with_id {
        columns.push("id");
        values.push(IndexValue::Integer(id));
    }
    columns.extend_from_slice(R::TABLE.indexes());
    values.extend(record.index_values());
    columns.push("data");
    values.push(IndexValue::Text(encode(record)?));
    debug_assert_eq!(columns.len(), values.len());
    Ok((columns, values))
}

fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn insert_record<R: Record>(conn: &Connection, record: &mut R) -> Result<i64> {
    let id = insert_row(conn, record)?;
    record.set_id(id);
    Ok(id)
}

/// Insert without writing the assigned id back
pub(crate) fn insert_row<R: Record>(conn: &Connection, record: &R) -> Result<i64> {
    let table = R::TABLE.as_str();
    let (columns, values) = write_columns(record, record.id())?;
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders(columns.len())
    );
    conn.execute(&sql, params_from_iter(values))
        .map_err(|e| table_error(table, e))?;

    Ok(conn.last_insert_rowid())
}

/// Insert every record, returning the assigned ids in order
pub(crate) fn insert_all<R: Record>(conn: &Connection, records: &[R]) -> Result<Vec<i64>> {
    records
        .iter()
        .map(|record| insert_row(conn, record))
        .collect()
}

pub(crate) fn upsert_record<R: Record>(conn: &Connection, record: &mut R) -> Result<i64> {
    let Some(id) = record.id() else {
        return insert_record(conn, record);
    };

    let table = R::TABLE.as_str();
    let (columns, values) = write_columns(record, Some(id))?;
    let updates = columns
        .iter()
        .filter(|c| **c != "id")
        .map(|c| format!("{c} = excluded.{c}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
        table,
        columns.join(", "),
        placeholders(columns.len()),
        updates
    );
    conn.execute(&sql, params_from_iter(values))
        .map_err(|e| table_error(table, e))?;
    Ok(id)
}

pub(crate) fn get_record<R: Record>(conn: &Connection, id: i64) -> Result<Option<R>> {
    let table = R::TABLE.as_str();
    let sql = format!("SELECT data FROM {} WHERE id = ?1", table);
    let data: Option<String> = conn
        .query_row(&sql, [id], |row| row.get(0))
        .optional()
        .map_err(|e| table_error(table, e))?;

    data.map(|data| decode(id, &data)).transpose()
}

fn query_records<R: Record>(conn: &Connection, sql: &str, params: Vec<IndexValue>) -> Result<Vec<R>> {
    let table = R::TABLE.as_str();
    let mut stmt = conn.prepare(sql).map_err(|e| table_error(table, e))?;
    let rows: Vec<(i64, String)> = stmt
        .query_map(params_from_iter(params), |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(|e| table_error(table, e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| table_error(table, e))?;

    rows.iter().map(|(id, data)| decode(*id, data)).collect()
}

pub(crate) fn count_rows(conn: &Connection, table: TableName) -> Result<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.as_str());
    let count: i64 = conn
        .query_row(&sql, [], |row| row.get(0))
        .map_err(|e| table_error(table.as_str(), e))?;
    Ok(count as u64)
}

pub(crate) fn clear_table(conn: &Connection, table: TableName) -> Result<()> {
    let sql = format!("DELETE FROM {}", table.as_str());
    conn.execute(&sql, [])
        .map_err(|e| table_error(table.as_str(), e))?;
    Ok(())
}

/// Named accessors for the declared tables
impl LocalStore {
    /// Accessor for any record type
    pub fn table<R: Record>(&self) -> Table<'_, R> {
        Table::new(self)
    }

    pub fn products(&self) -> Table<'_, Product> {
        self.table()
    }

    pub fn product_variations(&self) -> Table<'_, ProductVariation> {
        self.table()
    }

    pub fn orders(&self) -> Table<'_, Order> {
        self.table()
    }

    pub fn inventory(&self) -> Table<'_, InventoryItem> {
        self.table()
    }

    pub fn overhead_costs(&self) -> Table<'_, OverheadCost> {
        self.table()
    }

    pub fn api_credentials(&self) -> Table<'_, ApiCredentials> {
        self.table()
    }

    pub fn last_sync(&self) -> Table<'_, LastSync> {
        self.table()
    }

    pub fn expenses(&self) -> Table<'_, Expense> {
        self.table()
    }

    pub fn expense_categories(&self) -> Table<'_, ExpenseCategory> {
        self.table()
    }

    pub fn expense_imports(&self) -> Table<'_, ExpenseImport> {
        self.table()
    }

    pub fn supplier_imports(&self) -> Table<'_, SupplierPriceImport> {
        self.table()
    }

    pub fn supplier_import_items(&self) -> Table<'_, SupplierPriceItem> {
        self.table()
    }
}
