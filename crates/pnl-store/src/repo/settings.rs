//! Single-row settings and sync bookkeeping

use super::{clear_table, insert_row, query_records, text};
use crate::errors::{table_error, Result};
use crate::flags::HAS_API_CREDENTIALS;
use crate::manager::LocalStore;
use crate::tables::TableName;
use pnl_core::model::{ApiCredentials, LastSync};

impl LocalStore {
    /// Replace the stored storefront credentials and mark them present
    pub fn save_api_credentials(&self, credentials: &mut ApiCredentials) -> Result<i64> {
        let id = self.with_connection_mut(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| table_error(TableName::ApiCredentials.as_str(), e))?;
            clear_table(&tx, TableName::ApiCredentials)?;
            let fresh = ApiCredentials {
                id: None,
                ..credentials.clone()
            };
            let id = insert_row(&tx, &fresh)?;
            tx.commit()
                .map_err(|e| table_error(TableName::ApiCredentials.as_str(), e))?;
            Ok(id)
        })?;
        credentials.id = Some(id);
        self.flags().set(HAS_API_CREDENTIALS, "true")?;
        tracing::info!(table = TableName::ApiCredentials.as_str(), "API credentials saved");
        Ok(id)
    }

    /// The stored credentials, if any
    pub fn load_api_credentials(&self) -> Result<Option<ApiCredentials>> {
        Ok(self.api_credentials().to_vec()?.into_iter().next())
    }

    pub fn clear_api_credentials(&self) -> Result<()> {
        self.api_credentials().clear()?;
        self.flags().remove(HAS_API_CREDENTIALS)
    }

    /// Record that a sync of `sync_type` completed now
    pub fn record_sync(&self, sync_type: &str) -> Result<LastSync> {
        let mut entry = LastSync::now(sync_type);
        self.last_sync().add(&mut entry)?;
        Ok(entry)
    }

    /// Most recent sync of `sync_type`
    pub fn last_sync_of(&self, sync_type: &str) -> Result<Option<LastSync>> {
        self.with_connection(|conn| {
            let rows: Vec<LastSync> = query_records(
                conn,
                "SELECT id, data FROM last_sync WHERE sync_type = ?1 ORDER BY id DESC LIMIT 1",
                vec![text(sync_type)],
            )?;
            Ok(rows.into_iter().next())
        })
    }
}
