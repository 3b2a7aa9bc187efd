use crate::errors::NoteStoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{query_scalar, SqlitePool};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod queries;
use queries::*;

#[cfg(test)]
mod tests;

const BACKEND: &str = "SQLite";

pub struct SQLiteStoreBuilder {
    path: Option<PathBuf>,
    db_options: SqliteConnectOptions,
}

impl SQLiteStoreBuilder {
    /// Store notes in a database file, creating it and its directory if missing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let db_options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self {
            path: Some(path),
            db_options,
        }
    }

    /// Store notes in a private in-memory database that lives as long as the store.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            db_options: SqliteConnectOptions::new().in_memory(true),
        }
    }

    pub async fn build(self) -> Result<SQLiteStore, NoteStoreError> {
        if let Some(parent) = self.path.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        // A single connection that is never recycled, otherwise an in-memory
        // database would vanish with it.
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(Option::<Duration>::None)
            .max_lifetime(Option::<Duration>::None)
            .connect_with(self.db_options)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        let version: String = query_scalar("SELECT sqlite_version()")
            .fetch_one(&db_pool)
            .await
            .map_err(NoteStoreError::connection(BACKEND))?;
        info!(backend = BACKEND, %version, path = ?self.path, "connected");
        let store = SQLiteStore { db_pool };
        store.init().await?;
        Ok(store)
    }
}

pub struct SQLiteStore {
    db_pool: SqlitePool,
}

impl_note_store!(SQLiteStore, update_id = first);
